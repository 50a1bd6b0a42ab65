//! Favorites diagnostics
//!
//! Neither type here is ever fatal. A corrupted payload is recovered by
//! starting from an empty set, and a failed write leaves the in-memory set
//! authoritative until the next mutation writes it again.

use crate::storage::StorageError;
use thiserror::Error;

/// The persisted favorites payload could not be read back
#[derive(Debug, Error)]
pub enum CorruptedStateWarning {
    /// The blob was not JSON, or not a list of ids
    #[error("Favorites payload under '{key}' is unreadable: {reason}")]
    Malformed { key: String, reason: String },

    /// The storage backend failed while reading
    #[error("Favorites under '{key}' could not be read: {source}")]
    Unreadable {
        key: String,
        #[source]
        source: StorageError,
    },
}

/// A favorites write did not reach storage
#[derive(Debug, Error)]
#[error("Failed to persist {count} favorite(s) under '{key}': {source}")]
pub struct PersistenceWriteFailure {
    pub key: String,
    pub count: usize,
    #[source]
    pub source: StorageError,
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
