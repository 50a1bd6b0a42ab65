//! Catalog-specific error types
//!
//! # Error Types
//!
//! - **`DuplicateLoad`**: The catalog was loaded a second time in one session
//! - **`Fetch`**: The fetch collaborator could not supply records
//!
//! A duplicate load is a programmer error. A fetch failure is not fatal: the
//! catalog simply stays empty for the rest of the session.

use thiserror::Error;

/// Catalog-specific errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A load was attempted after the session's single load
    #[error("Catalog already loaded with {existing} record(s); a session loads it exactly once")]
    DuplicateLoad { existing: usize },

    /// Records could not be fetched or decoded
    #[error("Failed to fetch catalog: {0}")]
    Fetch(#[from] FetchFailure),
}

/// Failure reported by a fetch collaborator
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The dataset could not be read
    #[error("I/O error while reading dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The payload was not a JSON array of records
    #[error("Dataset is not a valid record array: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
