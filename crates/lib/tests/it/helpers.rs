use varstore::{Container, Store, Value};

/// Creates a store holding a small game state used across tests.
///
/// ```text
/// player.name  = "Ada"
/// player.hp    = 12
/// player.pos.x = 3
/// player.pos.y = -1
/// level        = "2"
/// paused       = null
/// ```
pub fn setup_game_store() -> Store {
    let mut store = Store::new();
    store.set("player.name", "Ada");
    store.set("player.hp", 12);
    store.set("player.pos.x", 3);
    store.set("player.pos.y", -1);
    store.set("level", "2");
    store.set("paused", Value::Null);
    store
}

/// Returns the container at `path`, panicking with context if there is none.
pub fn expect_container<'a>(store: &'a Store, path: &str) -> &'a Container {
    match store.get(path) {
        Some(Value::Map(container)) => container,
        Some(other) => panic!("Expected container at '{path}', found {}", other.type_name()),
        None => panic!("Nothing stored at '{path}'"),
    }
}

/// Asserts that the number stored at `path` equals `expected`.
pub fn assert_number(store: &Store, path: &str, expected: f64) {
    match store.get(path) {
        Some(Value::Number(actual)) => {
            assert_eq!(*actual, expected, "Value mismatch for path '{path}'")
        }
        Some(other) => panic!("Expected number at '{path}', got: {other:?}"),
        None => panic!("Path '{path}' not found in store"),
    }
}
