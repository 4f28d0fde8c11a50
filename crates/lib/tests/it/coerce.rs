//! Coercion integration tests
//!
//! Covers the typed read path (`Store::get_as`) and the free helpers as a host
//! would call them on values fetched from the store.

use varstore::{
    HostObject, Store, Value,
    coerce::{Kind, to_boolean, to_image, to_number, to_sprite, to_text},
};

use super::helpers::*;

#[test]
fn test_get_as_on_game_state() {
    let store = setup_game_store();

    assert_eq!(store.get_as("level", Kind::Number), Some(Value::Number(2.0)));
    assert_eq!(store.get_as("player.hp", Kind::Text), Some(Value::from("12")));
    assert_eq!(store.get_as("paused", Kind::Text), Some(Value::from("")));
    assert_eq!(store.get_as("paused", Kind::Boolean), Some(Value::Bool(false)));
    assert_eq!(store.get_as("player.pos", Kind::Boolean), Some(Value::Bool(true)));
    assert_eq!(store.get_as("player.pos", Kind::Number), Some(Value::Number(0.0)));
    assert_eq!(
        store.get_as("player.pos", Kind::Text),
        Some(Value::from(r#"{"x":3,"y":-1}"#))
    );
}

#[test]
fn test_get_as_absent() {
    let store = Store::new();

    assert_eq!(store.get_as("nothing", Kind::Any), None);
    assert_eq!(store.get_as("nothing", Kind::Number), Some(Value::Number(0.0)));
    assert_eq!(store.get_as("nothing", Kind::Boolean), Some(Value::Bool(false)));
    assert_eq!(store.get_as("nothing", Kind::Sprite), Some(Value::Null));
}

#[test]
fn test_get_as_with_parsed_kind_names() {
    let mut store = Store::new();
    store.set("answer", "42.0");

    for (name, expected) in [
        ("any", Value::from("42.0")),
        ("number", Value::Number(42.0)),
        ("string", Value::from("42.0")),
        ("bool", Value::Bool(true)),
        ("image", Value::Null),
    ] {
        let kind: Kind = name.parse().unwrap();
        assert_eq!(store.get_as("answer", kind), Some(expected), "kind {name}");
    }
}

#[test]
fn test_documented_coercions() {
    assert_eq!(to_number(Some(&Value::from("3.14"))), 3.14);
    assert_eq!(to_number(Some(&Value::from("abc"))), 0.0);
    assert!(!to_boolean(Some(&Value::from("false"))));
    assert!(to_boolean(Some(&Value::from("yes"))));
    assert_eq!(to_text(Some(&Value::Null)), "");
}

#[test]
fn test_host_object_coercions() {
    let mut store = Store::new();
    store.set("hero", HostObject::sprite(1));
    store.set("backdrop", HostObject::image(2));

    assert_eq!(to_sprite(store.get("hero")), Some(HostObject::sprite(1)));
    assert_eq!(to_image(store.get("hero")), None);
    assert_eq!(to_image(store.get("backdrop")), Some(HostObject::image(2)));
    assert_eq!(to_sprite(store.get("missing")), None);
    assert_eq!(to_text(store.get("hero")), "<sprite #1>");
}
