//! Store integration tests
//!
//! These drive the store the way a script host does: a sequence of set, get,
//! change, remove and exists calls against one store.

use varstore::{
    HostObject, Store, Value,
    constants::{null_value, pi_value, undefined_value},
    path,
};

use super::helpers::*;

// ===== READS =====

#[test]
fn test_reads_on_game_state() {
    let store = setup_game_store();

    assert_eq!(store.get("player.name").unwrap(), &"Ada");
    assert_number(&store, "player.pos.y", -1.0);
    assert_eq!(expect_container(&store, "player.pos").len(), 2);
    assert_eq!(expect_container(&store, "player").len(), 3);
    assert!(store.get("player.mana").is_none());
    assert!(store.get("player.name.first").is_none());
    assert!(store.get("paused").is_some_and(Value::is_null));
    assert!(store.get("paused.reason").is_none());
}

#[test]
fn test_paths_built_at_runtime() {
    let mut store = Store::new();
    for slot in 0..3 {
        store.set(path!("inventory", slot, "count"), slot * 2);
    }

    assert_eq!(expect_container(&store, "inventory").len(), 3);
    assert_number(&store, "inventory.2.count", 4.0);
}

// ===== WRITES =====

#[test]
fn test_nested_auto_vivification() {
    let mut store = Store::new();
    store.set("a.b.c", 1);

    assert!(store.exists("a"));
    assert!(store.exists("a.b"));
    assert_number(&store, "a.b.c", 1.0);
    assert_eq!(expect_container(&store, "a.b").len(), 1);
    assert_eq!(store.get("a.x"), undefined_value().as_ref());
}

#[test]
fn test_overwrite_through_leaf() {
    let mut store = setup_game_store();
    store.set("player.name.first", "Ada");

    // The old text is gone, replaced by a container
    assert_eq!(expect_container(&store, "player.name").len(), 1);
    assert_eq!(store.get("player.name.first").unwrap(), &"Ada");
    assert_number(&store, "player.hp", 12.0);
}

#[test]
fn test_constants_are_storable() {
    let mut store = Store::new();
    store.set("math.pi", pi_value());
    store.set("empty", null_value());

    assert_number(&store, "math.pi", std::f64::consts::PI);
    assert!(store.exists("empty"));
    assert!(store.get("empty").is_some_and(Value::is_null));
}

#[test]
fn test_host_objects_are_opaque_leaves() {
    let mut store = Store::new();
    store.set("actors.hero", HostObject::sprite(11));

    assert_eq!(
        store.get("actors.hero").and_then(Value::as_object),
        Some(&HostObject::sprite(11))
    );
    assert!(!store.exists("actors.hero.kind"));
    assert!(store.remove("actors.hero.kind").is_none());
}

// ===== CHANGE =====

#[test]
fn test_change_counter_session() {
    let mut store = setup_game_store();

    store.change("player.hp", -5.0);
    store.change("player.hp", 0.5);
    assert_number(&store, "player.hp", 7.5);

    // "2" is text, so the base is 0
    store.change("level", 1.0);
    assert_number(&store, "level", 1.0);

    // null is not a number either
    store.change("paused", 5.0);
    assert_number(&store, "paused", 5.0);

    store.change("stats.kills", 1.0);
    assert_number(&store, "stats.kills", 1.0);
}

// ===== REMOVE / EXISTS =====

#[test]
fn test_remove_then_exists() {
    let mut store = setup_game_store();

    store.remove("player.pos.x");
    assert!(!store.exists("player.pos.x"));
    assert!(store.exists("player.pos.y"));

    store.remove("player");
    assert!(!store.exists("player"));
    assert!(!store.exists("player.name"));
    assert!(store.exists("level"));
}

#[test]
fn test_remove_missing_leaves_store_unchanged() {
    let mut store = setup_game_store();
    let before = store.clone();

    store.remove("enemy");
    store.remove("enemy.hp");
    store.remove("player.pos.z");
    store.remove("player.hp.max");
    store.remove("paused.reason");

    assert_eq!(store, before);
}

#[test]
fn test_exists_distinguishes_null_from_absent() {
    let mut store = Store::new();
    store.set("n", Value::Null);

    assert!(store.exists("n"));
    assert!(!store.exists("m"));
    assert_eq!(store.get("n"), Some(&Value::Null));
    assert_eq!(store.get("m"), None);
}

// ===== SNAPSHOTS =====

#[test]
fn test_snapshot_seeds_new_store() {
    let store = setup_game_store();
    let json = store.to_json_string();

    let seeded = Store::from_json_str(&json).unwrap();
    assert_eq!(seeded, store);
    assert_eq!(seeded.len(), 3);
}
