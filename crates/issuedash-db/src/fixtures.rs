//! Test fixtures for the cached issue table.
//!
//! In production the table is written by an external sync job; tests build
//! an equivalent table locally. Projected columns are TEXT and the recency
//! column is an integer timestamp, matching what the sync job produces.

use sqlmodel_core::Value;

use crate::DbConn;
use crate::error::{StoreError, StoreResult};

/// DDL for the cached `issues` table with the canonical four-column
/// projection used throughout the test suites.
pub const CREATE_ISSUES_SQL: &str = r"
CREATE TABLE IF NOT EXISTS issues (
    key TEXT NOT NULL,
    summary TEXT,
    status TEXT,
    assignee TEXT,
    updated_time INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_issues_updated_time ON issues(updated_time);
";

/// Create the fixture `issues` table on `conn`.
pub fn create_issues_table(conn: &DbConn) -> StoreResult<()> {
    conn.execute_raw(CREATE_ISSUES_SQL)
        .map_err(|e| StoreError::Sqlite(e.to_string()))?;
    Ok(())
}

/// Insert one issue row. `None` status/assignee stores SQL NULL.
pub fn insert_issue(
    conn: &DbConn,
    key: &str,
    summary: &str,
    status: Option<&str>,
    assignee: Option<&str>,
    updated_time: i64,
) -> StoreResult<()> {
    let opt_text = |v: Option<&str>| v.map_or(Value::Null, |s| Value::Text(s.to_string()));
    conn.execute_sync(
        "INSERT INTO issues (key, summary, status, assignee, updated_time) \
         VALUES (?, ?, ?, ?, ?)",
        &[
            Value::Text(key.to_string()),
            Value::Text(summary.to_string()),
            opt_text(status),
            opt_text(assignee),
            Value::BigInt(updated_time),
        ],
    )
    .map_err(|e| StoreError::Sqlite(e.to_string()))?;
    Ok(())
}
