//! View-specific error types

use std::num::NonZeroUsize;
use thiserror::Error;

/// Errors raised by view transitions and view configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// Page size must be at least 1
    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    /// Page size is not one of the configured options
    #[error("Page size {size} is not one of the offered sizes {options:?}")]
    UnsupportedPageSize {
        size: usize,
        options: Vec<NonZeroUsize>,
    },

    /// A colour setting is not `#RRGGBB` or `#RGB`
    #[error("Invalid colour '{0}': expected #RRGGBB or #RGB")]
    InvalidColor(String),
}
