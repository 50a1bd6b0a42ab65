//! Storage-specific error types
//!
//! # Error Types
//!
//! - **`SledError`**: Errors from the underlying sled embedded database
//! - **`Unavailable`**: The store refused the operation (used by in-memory stores)

use thiserror::Error;

/// Durable storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Represents a sled database error
    #[error("Storage error: {0}")]
    SledError(#[from] sled::Error),

    /// The store could not serve the request
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
