//! Error types for store snapshots.
//!
//! Path operations on a [`Store`](super::Store) never fail. These errors only
//! arise when building a store from external data.

use thiserror::Error;

/// Structured error types for store construction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot text is not valid JSON
    #[error("Invalid snapshot: {source}")]
    InvalidSnapshot {
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot parsed, but its top level is not an object
    #[error("Snapshot root must be an object, found {found}")]
    SnapshotRootNotObject { found: String },
}

impl StoreError {
    /// Check if this error is related to snapshot parsing
    pub fn is_snapshot_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidSnapshot { .. } | StoreError::SnapshotRootNotObject { .. }
        )
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
