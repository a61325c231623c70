//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Underlying file could not be read or written
    #[error("IO error: {message}")]
    Io { message: String },

    /// Backing file exists but is not a JSON object of strings
    #[error("Corrupt store '{path}': {message}")]
    Corrupt { path: String, message: String },

    /// Value could not be encoded
    #[error("Serialization failed: {0}")]
    Serialize(String),

    /// Panel sizes outside the accepted range
    #[error("Invalid panel sizes {0:?}: expected two finite, non-negative numbers")]
    InvalidSizes(Vec<f64>),

    /// Another thread panicked while holding the store lock
    #[error("Lock poisoned")]
    LockPoisoned,
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}
