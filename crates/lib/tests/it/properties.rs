//! Property tests for the path operations.

use proptest::prelude::*;
use varstore::{Store, Value};

fn segment() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("."))
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z0-9 ]{0,8}".prop_map(Value::Text),
    ]
}

/// Writes a few random entries so properties are checked against a populated tree.
fn populated() -> impl Strategy<Value = Store> {
    prop::collection::vec((path(), leaf()), 0..6).prop_map(|entries| {
        let mut store = Store::new();
        for (path, value) in entries {
            store.set(path, value);
        }
        store
    })
}

proptest! {
    #[test]
    fn unwritten_paths_are_absent(p in path()) {
        let store = Store::new();
        prop_assert!(!store.exists(&p));
        prop_assert!(store.get(&p).is_none());
    }

    #[test]
    fn set_then_get_returns_value(mut store in populated(), p in path(), v in leaf()) {
        store.set(&p, v.clone());
        prop_assert_eq!(store.get(&p), Some(&v));
        prop_assert!(store.exists(&p));
    }

    #[test]
    fn set_then_remove_is_absent(mut store in populated(), p in path(), v in leaf()) {
        store.set(&p, v);
        store.remove(&p);
        prop_assert!(!store.exists(&p));
    }

    #[test]
    fn removing_absent_path_changes_nothing(mut store in populated(), p in path()) {
        prop_assume!(!store.exists(&p));
        let before = store.clone();
        store.remove(&p);
        prop_assert_eq!(store, before);
    }

    #[test]
    fn exists_agrees_with_get(store in populated(), p in path()) {
        prop_assert_eq!(store.exists(&p), store.get(&p).is_some());
    }

    #[test]
    fn change_adds_to_numeric_base(mut store in populated(), p in path(), delta in -1.0e3..1.0e3f64) {
        let base = store.get(&p).and_then(Value::as_number).unwrap_or(0.0);
        let updated = store.change(&p, delta);
        prop_assert_eq!(updated, base + delta);
        prop_assert_eq!(store.get(&p), Some(&Value::Number(base + delta)));
    }
}
