//! The container node of the variable tree.

use std::{collections::BTreeMap, fmt};

use super::Value;

/// A mapping from segment name to [`Value`].
///
/// Containers are the interior nodes of the store. Keys are kept in order so
/// that iteration, [`Display`](fmt::Display) output and snapshots are
/// deterministic.
///
/// Dropping a container is iterative, so arbitrarily deep trees can be built
/// and removed. Cloning, comparing and rendering still recurse once per level
/// and are limited by the stack of the calling thread.
///
/// ```
/// # use varstore::value::{Container, Value};
/// let mut stats = Container::new();
/// stats.insert("hp", 10);
/// stats.insert("name", "knight");
///
/// assert_eq!(stats.len(), 2);
/// assert_eq!(stats.get("hp"), Some(&Value::Number(10.0)));
/// assert_eq!(stats.to_json_string(), r#"{"hp":10,"name":"knight"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Container {
    children: BTreeMap<String, Value>,
}

impl Container {
    /// Creates an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of direct entries
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the container has no entries
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if the container has a direct entry named `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets a direct entry
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    /// Gets a mutable reference to a direct entry
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Inserts a direct entry, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a direct entry, returning it if it was present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Returns the child container at `key`, replacing whatever is there
    /// unless it already is a container.
    pub(crate) fn child_container_mut(&mut self, key: &str) -> &mut Container {
        let slot = self
            .children
            .entry(key.to_string())
            .or_insert_with(|| Value::Map(Container::new()));
        if !slot.is_container() {
            if !slot.is_null() {
                tracing::debug!(
                    segment = key,
                    replaced = slot.type_name(),
                    "Replacing leaf with container"
                );
            }
            *slot = Value::Map(Container::new());
        }
        match slot {
            Value::Map(container) => container,
            _ => unreachable!("slot was just made a container"),
        }
    }

    /// Iterates over entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.children.iter()
    }

    /// Iterates over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    /// Iterates over values in key order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    /// Converts to a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.children
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Renders the container as compact JSON
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        if !self.children.values().any(Value::is_container) {
            return;
        }
        // Detach nested containers onto a work stack so each one is dropped
        // empty, keeping recursion depth at one level.
        let mut pending: Vec<Value> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(value) = pending.pop() {
            if let Value::Map(mut container) = value {
                pending.extend(std::mem::take(&mut container.children).into_values());
            }
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json_string())
    }
}

impl<K, V> FromIterator<(K, V)> for Container
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            children: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
