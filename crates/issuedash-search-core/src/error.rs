//! Error types for the search core

use thiserror::Error;

/// Result type alias for search-core operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by the search core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A filter toggle named a group that is not configured. This is a
    /// programming or configuration error, not a user condition; it is
    /// surfaced to the caller and never retried.
    #[error("Unknown filter group: {0}")]
    UnknownGroup(String),
}
