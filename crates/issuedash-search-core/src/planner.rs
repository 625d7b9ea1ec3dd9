//! Search plan builder.
//!
//! Converts free text + the active-filter snapshot into SQL + params against
//! the cached `issues` table. The builder performs no I/O; it produces a
//! [`SearchPlan`] the shell executes through `issuedash-db`.
//!
//! Identifiers (columns, filter groups) come only from the validated
//! configuration; user input reaches the statement exclusively through bound
//! parameters.

use serde::{Deserialize, Serialize};

use issuedash_core::{DashConfig, ISSUES_TABLE, UPDATED_AT_COLUMN};

use crate::filter_state::ActiveFilters;

// ────────────────────────────────────────────────────────────────────
// SearchPlan — intermediate representation
// ────────────────────────────────────────────────────────────────────

/// A compiled search: SQL + params, ready for execution.
///
/// `projection` carries the column names in SELECT order so the executor can
/// decode rows positionally; `facets_applied` lists the groups that
/// contributed a membership clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPlan {
    pub sql: String,
    pub params: Vec<PlanParam>,
    pub method: PlanMethod,
    pub projection: Vec<String>,
    pub facets_applied: Vec<String>,
}

/// Parameter value for a planned SQL query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanParam {
    Int(i64),
    Text(String),
}

/// What predicate combination the builder emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanMethod {
    /// LIKE text predicate plus group membership clauses.
    TextAndFilters,
    /// LIKE text predicate only.
    TextOnly,
    /// Group membership clauses only.
    FiltersOnly,
    /// No constraints; bounded recency scan of the whole table.
    RecencyScan,
}

impl PlanMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextAndFilters => "text_and_filters",
            Self::TextOnly => "text_only",
            Self::FiltersOnly => "filters_only",
            Self::RecencyScan => "recency_scan",
        }
    }
}

// ────────────────────────────────────────────────────────────────────
// Plan builder
// ────────────────────────────────────────────────────────────────────

/// Escape LIKE wildcards for literal substring matching.
fn like_escape(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Compile `text` + `filters` into a [`SearchPlan`].
///
/// - Trimmed-empty text contributes no predicate: every row passes the text
///   stage. Non-empty text becomes one `LIKE` per projected column, ORed; a
///   hit on any single column is sufficient. SQLite `LIKE` is
///   case-insensitive for ASCII, which is the match contract here.
/// - Each group with a non-empty active set contributes `col IN (?, ...)`;
///   groups with an empty active set impose no constraint. Group clauses are
///   ANDed, in configuration order.
/// - Ordering is always most-recently-updated first, and `LIMIT ?` is always
///   bound; an unbounded result set is a bug, not an option.
#[must_use]
pub fn compile(text: &str, filters: &ActiveFilters, config: &DashConfig) -> SearchPlan {
    let trimmed = text.trim();

    let mut params: Vec<PlanParam> = Vec::new();
    let mut where_clauses: Vec<String> = Vec::new();
    let mut facets_applied: Vec<String> = Vec::new();

    // ── Text predicate ─────────────────────────────────────────────
    if !trimmed.is_empty() {
        let pattern = format!("%{}%", like_escape(trimmed));
        let like_parts: Vec<String> = config
            .columns
            .iter()
            .map(|col| format!("{col} LIKE ? ESCAPE '\\'"))
            .collect();
        for _ in &config.columns {
            params.push(PlanParam::Text(pattern.clone()));
        }
        where_clauses.push(format!("({})", like_parts.join(" OR ")));
    }

    // ── Filter predicate ───────────────────────────────────────────
    // Walk configured groups (not the snapshot) so only identifiers from the
    // validated closed set ever reach the SQL text.
    for group in config.filters.keys() {
        let Some(active) = filters.get(group) else {
            continue;
        };
        if active.is_empty() {
            continue;
        }
        let placeholders = vec!["?"; active.len()].join(", ");
        where_clauses.push(format!("{group} IN ({placeholders})"));
        for value in active {
            params.push(PlanParam::Text(value.clone()));
        }
        facets_applied.push(group.clone());
    }

    let method = match (!trimmed.is_empty(), !facets_applied.is_empty()) {
        (true, true) => PlanMethod::TextAndFilters,
        (true, false) => PlanMethod::TextOnly,
        (false, true) => PlanMethod::FiltersOnly,
        (false, false) => PlanMethod::RecencyScan,
    };

    let select_cols = config.columns.join(", ");
    let where_sql = if where_clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT {select_cols} FROM {ISSUES_TABLE}{where_sql} \
         ORDER BY {UPDATED_AT_COLUMN} DESC LIMIT ?"
    );
    params.push(PlanParam::Int(
        i64::try_from(config.result_limit).unwrap_or(i64::MAX),
    ));

    tracing::trace!(method = method.as_str(), params = params.len(), "compiled search plan");

    SearchPlan {
        sql,
        params,
        method,
        projection: config.columns.clone(),
        facets_applied,
    }
}
