//! Value types for runtime variables.
//!
//! This module provides the [`Value`] enum that represents everything a host
//! can store under a variable name. Values are either leaves (null, booleans,
//! numbers, text, host object references) or [`Container`]s holding further
//! named values.
//!
//! Absence ("undefined") is not a value: the store reports it as `None`.

use std::fmt;

pub mod container;
pub mod errors;

pub use container::Container;
pub use errors::ValueError;

/// The kinds of host-runtime objects a value can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    Sprite,
    Image,
}

impl HostKind {
    /// Returns the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HostKind::Sprite => "sprite",
            HostKind::Image => "image",
        }
    }
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque reference to an object owned by the host runtime.
///
/// The host tags each reference with its [`HostKind`] when it hands the
/// object to the store; the coercion helpers match on that tag instead of
/// inspecting the object's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HostObject {
    kind: HostKind,
    handle: u64,
}

impl HostObject {
    /// Creates a reference to a host object of the given kind
    pub fn new(kind: HostKind, handle: u64) -> Self {
        Self { kind, handle }
    }

    /// Creates a sprite reference
    pub fn sprite(handle: u64) -> Self {
        Self::new(HostKind::Sprite, handle)
    }

    /// Creates an image reference
    pub fn image(handle: u64) -> Self {
        Self::new(HostKind::Image, handle)
    }

    pub fn kind(&self) -> HostKind {
        self.kind
    }

    pub fn handle(&self) -> u64 {
        self.handle
    }

    /// Converts to a JSON object with `kind` and `handle` fields
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "kind": self.kind.as_str(), "handle": self.handle })
    }
}

impl fmt::Display for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} #{}>", self.kind, self.handle)
    }
}

/// Values that can be stored under a variable name.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with primitive types:
///
/// ```
/// # use varstore::value::Value;
/// assert!(Value::Number(42.0) == 42);
/// assert!(Value::Number(0.5) == 0.5);
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::Bool(true) == true);
///
/// // Type mismatches compare unequal
/// assert!(!(Value::from("42") == 42));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    // Leaf values
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value (IEEE-754 double)
    Number(f64),
    /// Text value
    Text(String),
    /// Reference to a host object
    Object(HostObject),

    // Branch values
    /// Nested variables
    Map(Container),
}

impl Value {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value holds nested variables
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true if this is a leaf value
    pub fn is_leaf(&self) -> bool {
        !self.is_container()
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Object(object) => object.kind().as_str(),
            Value::Map(_) => "container",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HostObject> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Map(container) => Some(container),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Map(container) => Some(container),
            _ => None,
        }
    }

    /// Converts to a `serde_json::Value`.
    ///
    /// Integral numbers become JSON integers, and non-finite numbers become
    /// `null` since JSON cannot represent them.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Object(object) => object.to_json(),
            Value::Map(container) => container.to_json(),
        }
    }

    /// Renders the value as compact JSON for display and debugging.
    ///
    /// ```
    /// # use varstore::value::Value;
    /// assert_eq!(Value::from("hi").to_json_string(), "\"hi\"");
    /// assert_eq!(Value::Number(2.0).to_json_string(), "2");
    /// assert_eq!(Value::Number(f64::NAN).to_json_string(), "null");
    /// ```
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

/// Largest magnitude at which every integer is exactly representable in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Writes a number the way script hosts print them: `NaN`, `Infinity`,
/// integers without a fractional part, and no negative zero. Magnitudes of at
/// least 1e21 or below 1e-6 use exponent form with a signed exponent (`1e+21`,
/// `1.5e-7`).
pub(crate) fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let formatted = format!("{n:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&formatted),
        }
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => fmt_number(*n, f),
            Value::Text(s) => write!(f, "{s}"),
            Value::Object(object) => write!(f, "{object}"),
            Value::Map(container) => write!(f, "{container}"),
        }
    }
}

/// Converts host JSON into a stored value.
///
/// Objects become containers. Arrays have no counterpart in the variable tree
/// and are stored as their JSON text.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(_) => Value::Text(value.to_string()),
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        // Precision loss above 2^53 matches the host's number type
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<HostObject> for Value {
    fn from(value: HostObject) -> Self {
        Value::Object(value)
    }
}

impl From<Container> for Value {
    fn from(value: Container) -> Self {
        Value::Map(value)
    }
}

fn mismatch(expected: &str, value: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected: expected.to_string(),
        actual: value.type_name().to_string(),
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_number().ok_or_else(|| mismatch("number", value))
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| mismatch("text", value))
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ValueError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_text().ok_or_else(|| mismatch("text", value))
    }
}

impl TryFrom<&Value> for HostObject {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_object()
            .copied()
            .ok_or_else(|| mismatch("host object", value))
    }
}

impl TryFrom<&Value> for Container {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_container()
            .cloned()
            .ok_or_else(|| mismatch("container", value))
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_number() == Some(*other as f64)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for f64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == *self
    }
}
