//! Per-group filter state.
//!
//! Each configured filter group (a column such as `status` or `assignee`)
//! carries a store-seeded candidate list and the set of currently active
//! values. An empty active set means "no constraint from this group", not
//! "match nothing".

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use issuedash_core::DashConfig;

use crate::error::{Result, SearchError};

/// Snapshot of active filter values, group-id → value set, in
/// configuration order. Owned by the caller; mutating it cannot corrupt
/// the live [`FilterState`].
pub type ActiveFilters = IndexMap<String, BTreeSet<String>>;

/// One candidate value for a filter group, with its occurrence count in
/// the store at seeding time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    pub count: i64,
}

impl FacetValue {
    #[must_use]
    pub fn new(value: impl Into<String>, count: i64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct FilterGroup {
    /// Top-N candidate values, frequency-descending, as seeded from the
    /// store. Display data only; membership is not enforced on toggle.
    candidates: Vec<FacetValue>,
    active: BTreeSet<String>,
}

/// Active filter values for every configured group.
#[derive(Debug, Clone)]
pub struct FilterState {
    groups: IndexMap<String, FilterGroup>,
}

impl FilterState {
    /// Build the filter state for a session, seeding each group's active
    /// set from its configured `default_filters`.
    #[must_use]
    pub fn from_config(config: &DashConfig) -> Self {
        let groups = config
            .filters
            .iter()
            .map(|(group_id, group_config)| {
                let group = FilterGroup {
                    candidates: Vec::new(),
                    active: group_config.default_filters.iter().cloned().collect(),
                };
                (group_id.clone(), group)
            })
            .collect();
        Self { groups }
    }

    /// Toggle `value` within `group_id`: active values become inactive and
    /// vice versa. Returns whether the value is active after the toggle.
    ///
    /// Values outside the seeded candidate list are accepted; the store
    /// populates candidates, but a toggle arriving for a value the
    /// candidate list no longer carries still lands in the active set.
    pub fn toggle(&mut self, group_id: &str, value: &str) -> Result<bool> {
        let group = self
            .groups
            .get_mut(group_id)
            .ok_or_else(|| SearchError::UnknownGroup(group_id.to_string()))?;
        let now_active = if group.active.remove(value) {
            false
        } else {
            group.active.insert(value.to_string());
            true
        };
        tracing::trace!(group = group_id, value, now_active, "filter toggled");
        Ok(now_active)
    }

    /// Owned snapshot of every group's active set, in configuration order.
    #[must_use]
    pub fn active_filters(&self) -> ActiveFilters {
        self.groups
            .iter()
            .map(|(id, group)| (id.clone(), group.active.clone()))
            .collect()
    }

    /// Install the store-seeded candidate list for `group_id`.
    pub fn set_candidates(&mut self, group_id: &str, candidates: Vec<FacetValue>) -> Result<()> {
        let group = self
            .groups
            .get_mut(group_id)
            .ok_or_else(|| SearchError::UnknownGroup(group_id.to_string()))?;
        group.candidates = candidates;
        Ok(())
    }

    /// Candidate values for `group_id`, frequency-descending.
    #[must_use]
    pub fn candidates(&self, group_id: &str) -> Option<&[FacetValue]> {
        self.groups.get(group_id).map(|g| g.candidates.as_slice())
    }

    /// Whether `value` is currently active within `group_id`.
    #[must_use]
    pub fn is_active(&self, group_id: &str, value: &str) -> bool {
        self.groups
            .get(group_id)
            .is_some_and(|g| g.active.contains(value))
    }

    /// Configured group identifiers, in configuration order.
    pub fn group_ids(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
