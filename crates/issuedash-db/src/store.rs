//! Plan execution and facet seeding against the cached issue table.
//!
//! These functions are the "store truth" for the search popup: the shell
//! executes every compiled plan through [`run_search`] rather than embedding
//! raw SQL, and filter-group candidate lists come from
//! [`filter_value_counts`]. All user-supplied values travel as bound
//! parameters; the only identifiers interpolated are the configured,
//! validated column and group names.

use std::time::Instant;

use sqlmodel_core::{Row as SqlRow, Value};

use issuedash_core::{DashConfig, ISSUES_TABLE, IssueRecord, is_valid_identifier};
use issuedash_search_core::{FacetValue, FilterState, PlanParam, SearchPlan};

use crate::DbConn;
use crate::error::{StoreError, StoreResult};

/// Facet label presented for rows whose group column is NULL.
pub const NULL_FACET_LABEL: &str = "None";

fn plan_param_to_value(param: &PlanParam) -> Value {
    match param {
        PlanParam::Int(v) => Value::BigInt(*v),
        PlanParam::Text(s) => Value::Text(s.clone()),
    }
}

/// Render a projected column value as the record's field text.
///
/// The popup renders every column textually; NULL becomes the empty string.
fn value_to_field(value: &Value) -> String {
    match value {
        Value::Text(s) => s.clone(),
        Value::BigInt(n) => n.to_string(),
        Value::Int(n) => n.to_string(),
        Value::Double(f) => f.to_string(),
        _ => String::new(),
    }
}

fn value_to_count(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::BigInt(n)) => *n,
        Some(Value::Int(n)) => i64::from(*n),
        _ => 0,
    }
}

fn decode_record(row: &SqlRow, width: usize) -> IssueRecord {
    let fields = (0..width)
        .map(|i| row.get(i).map_or_else(String::new, value_to_field))
        .collect();
    IssueRecord::new(fields)
}

/// Execute a compiled search plan and map the rows to records.
pub fn run_search(conn: &DbConn, plan: &SearchPlan) -> StoreResult<Vec<IssueRecord>> {
    let params: Vec<Value> = plan.params.iter().map(plan_param_to_value).collect();

    let started = Instant::now();
    let rows = conn
        .query_sync(&plan.sql, &params)
        .map_err(|e| StoreError::Sqlite(e.to_string()))?;
    tracing::debug!(
        method = plan.method.as_str(),
        rows = rows.len(),
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "executed search plan"
    );

    let width = plan.projection.len();
    Ok(rows.iter().map(|row| decode_record(row, width)).collect())
}

/// Distinct values of a filter group's column with occurrence counts,
/// frequency-descending, capped at `limit`.
///
/// NULL column values surface under [`NULL_FACET_LABEL`].
pub fn filter_value_counts(
    conn: &DbConn,
    group_id: &str,
    limit: usize,
) -> StoreResult<Vec<FacetValue>> {
    if !is_valid_identifier(group_id) {
        return Err(StoreError::invalid(
            "filter group",
            format!("{group_id:?} is not a configured column"),
        ));
    }

    let sql = format!(
        "SELECT {group_id} AS value, COUNT(*) AS count FROM {ISSUES_TABLE} \
         GROUP BY {group_id} ORDER BY count DESC LIMIT ?"
    );
    let limit_param = [Value::BigInt(i64::try_from(limit).unwrap_or(i64::MAX))];
    let rows = conn
        .query_sync(&sql, &limit_param)
        .map_err(|e| StoreError::Sqlite(e.to_string()))?;

    Ok(rows
        .iter()
        .map(|row| {
            let value = match row.get(0) {
                Some(Value::Null) | None => NULL_FACET_LABEL.to_string(),
                Some(v) => value_to_field(v),
            };
            FacetValue::new(value, value_to_count(row.get(1)))
        })
        .collect())
}

/// Seed every configured group's candidate list from the store.
///
/// Called once at session start, after the filter state is constructed from
/// configuration.
pub fn seed_filter_candidates(
    conn: &DbConn,
    config: &DashConfig,
    filters: &mut FilterState,
) -> StoreResult<()> {
    for group_id in config.filters.keys() {
        let candidates = filter_value_counts(conn, group_id, config.facet_limit)?;
        tracing::debug!(group = %group_id, candidates = candidates.len(), "seeded filter group");
        filters
            .set_candidates(group_id, candidates)
            .map_err(|e| StoreError::invalid("filter group", e.to_string()))?;
    }
    Ok(())
}
