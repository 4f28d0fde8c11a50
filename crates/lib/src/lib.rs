//!
//! varstore: runtime variables for embedded script hosts.
//!
//! A host (a block editor, a game scripting layer, a test harness) keeps its
//! named variables in a [`Store`] and addresses them with dotted paths such as
//! `"player.stats.hp"`.
//!
//! ## Core Concepts
//!
//! * **Paths (`path::Path`)**: Dot-separated variable names. Each segment selects one
//!   level of nesting; segments are used verbatim and cannot contain a dot.
//! * **Values (`value::Value`)**: Null, booleans, numbers, text, host object references,
//!   and containers of further named values.
//! * **Store (`store::Store`)**: The variable tree. Writes create missing intermediate
//!   containers; reads, removals and existence checks stop quietly at the first
//!   missing level. Store operations never fail.
//! * **Coercion (`coerce`)**: Stateless conversion of any stored value (or its absence)
//!   into a number, text, boolean, or host object reference.
//! * **Constants (`constants`)**: The path delimiter and the `undefined`, `pi` and `null`
//!   accessors offered to hosts.

pub mod coerce;
pub mod constants;
pub mod path;
pub mod store;
pub mod value;

/// Re-export the main types for easier access.
pub use path::{Path, PathBuf};
pub use store::Store;
pub use value::{Container, HostKind, HostObject, Value};

/// Result type used throughout the varstore library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the varstore library.
///
/// Variable reads and writes never produce errors; this type covers typed
/// extraction, kind parsing and snapshot loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured value errors from the value module
    #[error(transparent)]
    Value(value::ValueError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Value(_) => "value",
            Error::Store(_) => "store",
        }
    }

    /// Check if this error is a value type mismatch.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error came from an unrecognized kind name.
    pub fn is_unknown_kind(&self) -> bool {
        match self {
            Error::Value(value_err) => value_err.is_unknown_kind(),
            _ => false,
        }
    }

    /// Check if this error came from loading a snapshot.
    pub fn is_snapshot_error(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_snapshot_error(),
            _ => false,
        }
    }
}
