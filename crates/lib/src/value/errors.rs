//! Error types for value extraction and kind parsing.

use thiserror::Error;

/// Structured errors raised when converting stored values into Rust types.
///
/// Store operations themselves never fail; these errors only surface from the
/// typed `TryFrom<&Value>` conversions and from parsing a [`Kind`](crate::coerce::Kind)
/// name.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValueError {
    /// The value does not hold the requested type
    #[error("Value type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A coercion target name was not recognized
    #[error("Unknown value kind: {name}")]
    UnknownKind { name: String },
}

impl ValueError {
    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error came from parsing a kind name
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, ValueError::UnknownKind { .. })
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
