//! Metcat - A meteorite catalog browser with persistent favorites
//!
//! This library provides a dataset view controller: an in-memory catalog of
//! meteorite landing records, a favorites set persisted to an embedded
//! key-value store, and a home/search/favorites view selector with
//! pagination over the catalog.

use thiserror::Error;

pub mod browser;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod favorites;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod query;
pub mod storage;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MetcatError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Storage error
    #[error("Storage error: {0}")]
    StorageError(#[from] storage::StorageError),
    /// View error
    #[error("View error: {0}")]
    ViewError(#[from] view::ViewError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<catalog::FetchFailure> for MetcatError {
    fn from(err: catalog::FetchFailure) -> Self {
        Self::CatalogError(catalog::CatalogError::Fetch(err))
    }
}
