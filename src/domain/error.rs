//! Error types for website-filter.

use thiserror::Error;

/// Main error type for website-filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Input could not be turned into a navigable URL
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Row position outside the filter list
    #[error("Index {index} out of range for filter list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for library operations.
pub type Result<T> = std::result::Result<T, FilterError>;
