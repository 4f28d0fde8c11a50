//! The path-addressed variable store.
//!
//! [`Store`] holds one tree of variables and resolves dotted paths against it.
//! Every operation is a single synchronous walk from the root:
//!
//! - **Reads** (`get`, `get_as`, `exists`) stop at the first missing segment and
//!   report absence. Walking into a null or any other leaf is also absence.
//! - **Writes** (`set`, `change`) create empty containers for missing or null
//!   intermediate segments. A leaf standing where a container is needed is
//!   replaced by an empty container and its value is lost.
//! - **Removal** (`remove`) stops silently when the parent does not exist, and
//!   removing a missing key does nothing.
//!
//! No operation returns an error or panics on any path.
//!
//! # Examples
//!
//! ```
//! use varstore::{Store, Value, coerce::Kind};
//!
//! let mut store = Store::new();
//! store.set("player.stats.hp", 10);
//! store.change("player.stats.hp", -3.0);
//!
//! assert_eq!(store.get("player.stats.hp"), Some(&Value::Number(7.0)));
//! assert!(store.get("player.stats").is_some_and(Value::is_container));
//! assert_eq!(store.get("player.level"), None);
//! assert_eq!(store.get_as("player.stats.hp", Kind::Text), Some(Value::from("7")));
//!
//! store.remove("player.stats");
//! assert!(!store.exists("player.stats.hp"));
//! assert!(store.exists("player"));
//! ```

use crate::{
    Result,
    coerce::{self, Kind},
    path::Path,
    value::{Container, Value},
};

mod errors;
pub use errors::StoreError;


/// A tree of named variables addressed by dotted paths.
///
/// The store owns every value reachable from its root. Hosts create one store
/// and pass it to whatever needs it; there is no global instance.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Store {
    root: Container,
}

impl Store {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose top level is `root`
    pub fn from_root(root: Container) -> Self {
        Self { root }
    }

    /// Returns the top-level container
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Consumes the store, returning its top-level container
    pub fn into_root(self) -> Container {
        self.root
    }

    /// Returns the number of top-level variables
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if no variables are set
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the top-level variable names in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.root.keys()
    }

    /// Removes every variable
    pub fn clear(&mut self) {
        tracing::debug!(entries = self.root.len(), "Clearing store");
        self.root.clear();
    }

    /// Gets the value at `path`.
    ///
    /// Returns `None` if any segment is missing, or if the walk reaches a null
    /// or other leaf value before the last segment. A stored null at the last
    /// segment is returned as `Some(&Value::Null)`.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let path = path.as_ref();
        tracing::trace!(path = %path, "get");

        let mut segments = path.segments();
        let mut current = self.root.get(segments.next()?)?;
        for segment in segments {
            current = current.as_container()?.get(segment)?;
        }
        Some(current)
    }

    /// Gets the value at `path` coerced to `kind`.
    ///
    /// With [`Kind::Any`] this is a cloning [`get`](Self::get). Every other kind
    /// always returns `Some`, coercing an absent value like any other; see
    /// [`coerce::coerce`].
    pub fn get_as(&self, path: impl AsRef<Path>, kind: Kind) -> Option<Value> {
        coerce::coerce(self.get(path), kind)
    }

    /// Sets the value at `path`, returning the value it replaced.
    ///
    /// Missing or null intermediate segments become empty containers. An
    /// intermediate segment holding any other leaf is overwritten with an empty
    /// container. The value is stored as given; setting a [`Container`] stores a
    /// whole subtree.
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
        let path = path.as_ref();
        tracing::trace!(path = %path, "set");

        let (parents, leaf) = path.split_leaf();
        let mut current = &mut self.root;
        for segment in parents {
            current = current.child_container_mut(segment);
        }
        current.insert(leaf, value)
    }

    /// Adds `delta` to the number at `path`, returning the new number.
    ///
    /// A missing or non-numeric value counts as 0. The result is written back
    /// with [`set`](Self::set), so missing parents are created.
    pub fn change(&mut self, path: impl AsRef<Path>, delta: f64) -> f64 {
        let path = path.as_ref();
        let base = self.get(path).and_then(Value::as_number).unwrap_or(0.0);
        let updated = base + delta;
        tracing::trace!(path = %path, base, delta, "change");

        self.set(path, updated);
        updated
    }

    /// Removes the value at `path`, returning it if it was present.
    ///
    /// Does nothing if the parent of the last segment does not resolve to a
    /// container.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let path = path.as_ref();
        tracing::trace!(path = %path, "remove");

        let (parents, leaf) = path.split_leaf();
        let mut current = &mut self.root;
        for segment in parents {
            current = current.get_mut(segment)?.as_container_mut()?;
        }
        current.remove(leaf)
    }

    /// Returns true if every segment of `path` resolves.
    ///
    /// A stored null counts as existing; walking through one does not.
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// Renders the variables as a plain JSON object.
    ///
    /// Host objects render as `{"kind": .., "handle": ..}` and non-finite
    /// numbers as `null`, so this is meant for display and fixtures. Use the
    /// serde implementation for an exact copy. Rendering recurses once per
    /// nesting level, so very deep trees are limited by the thread's stack.
    pub fn to_json_string(&self) -> String {
        self.root.to_json_string()
    }

    /// Builds a store from a plain JSON object.
    ///
    /// Nested objects become containers.
    ///
    /// ```
    /// # use varstore::Store;
    /// let store = Store::from_json_str(r#"{"a": {"b": 1}}"#)?;
    /// assert_eq!(store.get("a.b").and_then(|v| v.as_number()), Some(1.0));
    ///
    /// assert!(Store::from_json_str("[1, 2]").is_err());
    /// # Ok::<(), varstore::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json)
            .map_err(|source| StoreError::InvalidSnapshot { source })?;
        match Value::from(parsed) {
            Value::Map(root) => Ok(Self { root }),
            other => Err(StoreError::SnapshotRootNotObject {
                found: other.type_name().to_string(),
            }
            .into()),
        }
    }
}

impl From<Container> for Store {
    fn from(root: Container) -> Self {
        Self::from_root(root)
    }
}
