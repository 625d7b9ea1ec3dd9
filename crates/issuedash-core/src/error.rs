//! Error types for issuedash configuration and models

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading or validating the dashboard schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the schema document from disk.
    #[error("Failed to read schema: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document is not valid JSON or does not match the schema.
    #[error("Failed to parse schema: {0}")]
    Parse(#[from] serde_json::Error),

    /// A column or filter-group name is not a legal SQL identifier.
    ///
    /// Identifiers are resolved once at load time so the query compiler
    /// only ever interpolates names from this closed, validated set.
    #[error("Invalid {kind} identifier: {name:?}")]
    InvalidIdentifier { kind: &'static str, name: String },

    /// The projection column list is empty.
    #[error("Schema declares no projection columns")]
    EmptyProjection,

    /// A limit field is zero; an unbounded or empty result window is a bug.
    #[error("Invalid {field}: must be at least 1")]
    ZeroLimit { field: &'static str },
}

impl ConfigError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(kind: &'static str, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            name: name.into(),
        }
    }
}
