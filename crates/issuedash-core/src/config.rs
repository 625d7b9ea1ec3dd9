//! Dashboard configuration schema.
//!
//! The schema document is JSON shaped like the legacy `schema.json`:
//!
//! ```json
//! {
//!   "gui": {
//!     "columns": ["key", "summary", "status", "assignee"],
//!     "filters": {
//!       "status":   { "default_filters": ["Open"] },
//!       "assignee": { "default_filters": [] }
//!     }
//!   }
//! }
//! ```
//!
//! Column and filter-group names are validated once at load time; the query
//! compiler never interpolates an identifier that did not pass through this
//! validation, so user input can only reach the store as a bound parameter.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Name of the cached issue table in the local store.
pub const ISSUES_TABLE: &str = "issues";

/// Recency column used for the fixed result ordering.
pub const UPDATED_AT_COLUMN: &str = "updated_time";

/// Default cap on rows returned by a single search.
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Default cap on candidate values listed per filter group.
pub const DEFAULT_FACET_LIMIT: usize = 20;

/// Per-group filter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroupConfig {
    /// Values active when a session starts.
    #[serde(default)]
    pub default_filters: Vec<String>,
}

/// The `gui` section of the schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashConfig {
    /// Projected columns, in display order. The first column is the
    /// canonical issue key used for activation.
    pub columns: Vec<String>,

    /// Filter groups by column name, in configuration order.
    #[serde(default)]
    pub filters: IndexMap<String, FilterGroupConfig>,

    /// Cap on rows returned by a single search.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Cap on candidate values listed per filter group.
    #[serde(default = "default_facet_limit")]
    pub facet_limit: usize,
}

const fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

const fn default_facet_limit() -> usize {
    DEFAULT_FACET_LIMIT
}

/// Top-level schema document envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SchemaDocument {
    gui: DashConfig,
}

impl DashConfig {
    /// Parse and validate a schema document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: SchemaDocument = serde_json::from_str(json)?;
        doc.gui.validated()
    }

    /// Parse and validate a schema document from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Column name of the canonical key field (first projected column).
    #[must_use]
    pub fn key_column(&self) -> &str {
        &self.columns[0]
    }

    /// Whether `group_id` names a configured filter group.
    #[must_use]
    pub fn has_filter_group(&self, group_id: &str) -> bool {
        self.filters.contains_key(group_id)
    }

    fn validated(self) -> Result<Self> {
        if self.columns.is_empty() {
            return Err(ConfigError::EmptyProjection);
        }
        if self.result_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "result_limit",
            });
        }
        if self.facet_limit == 0 {
            return Err(ConfigError::ZeroLimit {
                field: "facet_limit",
            });
        }
        for col in &self.columns {
            if !is_valid_identifier(col) {
                return Err(ConfigError::invalid_identifier("column", col));
            }
        }
        for group in self.filters.keys() {
            if !is_valid_identifier(group) {
                return Err(ConfigError::invalid_identifier("filter group", group));
            }
        }
        tracing::debug!(
            columns = self.columns.len(),
            filter_groups = self.filters.len(),
            result_limit = self.result_limit,
            "loaded dashboard schema"
        );
        Ok(self)
    }
}

/// Whether `name` is usable as a bare SQL identifier.
///
/// ASCII letters, digits, and underscores, not starting with a digit. The
/// schema is the only source of identifiers that reach generated SQL.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
