//! Error types for the store boundary

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised while querying the cached issue store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` error from the underlying driver.
    #[error("SQLite error: {0}")]
    Sqlite(String),

    /// Invalid argument reaching the store boundary.
    #[error("Invalid {field}: {message}")]
    InvalidArgument {
        field: &'static str,
        message: String,
    },
}

impl StoreError {
    /// Create an invalid argument error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }
}
