//! Event-serialized search session.
//!
//! All mutation (text edits, filter toggles, query completions, navigation)
//! flows through this one struct on one logical thread, so filter state and
//! the result list never need locking. The store query itself may run on a
//! worker; its completion re-enters through [`SearchSession::apply_results`]
//! with the sequence number the query was issued under.
//!
//! Supersession: every issued plan carries a monotonically increasing
//! sequence number, and a completion is applied only while its number is
//! still the highest issued. Late results from an older query are dropped
//! silently; debouncing merely bounds query volume, it is not what makes
//! this correct.

use issuedash_core::{DashConfig, IssueRecord};

use crate::error::Result;
use crate::filter_state::{ActiveFilters, FacetValue, FilterState};
use crate::planner::{SearchPlan, compile};
use crate::results::{Activation, Modifiers, ResultList};

/// Upper bound on the free-text query, matching the entry widget's
/// max length.
pub const MAX_QUERY_CHARS: usize = 200;

/// Ticks a text edit waits before compiling, collapsing keystroke bursts
/// into one query. Filter toggles are discrete events and skip the wait.
pub const TEXT_DEBOUNCE_TICKS: u8 = 2;

/// A compiled plan stamped with its issue sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedQuery {
    pub seq: u64,
    pub plan: SearchPlan,
}

/// What happened to a delivered query completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The completion belonged to the latest issued query and took effect.
    Applied,
    /// A newer query was issued in the meantime; the completion was dropped.
    Superseded,
}

/// The search popup's whole mutable state behind a single event path.
#[derive(Debug)]
pub struct SearchSession {
    config: DashConfig,
    filters: FilterState,
    text: String,
    results: ResultList,
    /// Highest sequence number handed out by [`Self::tick`].
    last_issued: u64,
    dirty: bool,
    debounce_remaining: u8,
}

impl SearchSession {
    /// Start a session: default filters from configuration, empty text, and
    /// an initial query pending so the first tick populates the list.
    #[must_use]
    pub fn new(config: DashConfig) -> Self {
        let filters = FilterState::from_config(&config);
        Self {
            config,
            filters,
            text: String::new(),
            results: ResultList::new(),
            last_issued: 0,
            dirty: true,
            debounce_remaining: 0,
        }
    }

    // ── Mutation events ────────────────────────────────────────────

    /// Text-change event from the entry widget.
    ///
    /// Capped at [`MAX_QUERY_CHARS`]. An unchanged value does not mark a
    /// re-query. Changed text re-queries after the debounce window.
    pub fn set_text(&mut self, text: &str) {
        let capped: String = text.chars().take(MAX_QUERY_CHARS).collect();
        if capped == self.text {
            return;
        }
        self.text = capped;
        self.dirty = true;
        self.debounce_remaining = TEXT_DEBOUNCE_TICKS;
    }

    /// Filter-toggle event. Returns whether the value is active after the
    /// toggle. Unknown groups error without scheduling a re-query.
    pub fn toggle_filter(&mut self, group_id: &str, value: &str) -> Result<bool> {
        let now_active = self.filters.toggle(group_id, value)?;
        self.dirty = true;
        self.debounce_remaining = 0;
        Ok(now_active)
    }

    /// Install the store-seeded candidate list for a group.
    pub fn set_candidates(&mut self, group_id: &str, candidates: Vec<FacetValue>) -> Result<()> {
        self.filters.set_candidates(group_id, candidates)
    }

    // ── Query issue & completion ───────────────────────────────────

    /// Advance the debounce clock and, when a re-query is due, compile and
    /// stamp it with the next sequence number.
    ///
    /// The shell calls this once per UI tick and executes any returned plan
    /// against the store.
    pub fn tick(&mut self) -> Option<IssuedQuery> {
        if !self.dirty {
            return None;
        }
        if self.debounce_remaining > 0 {
            self.debounce_remaining -= 1;
            return None;
        }
        self.dirty = false;
        self.last_issued += 1;
        let plan = compile(&self.text, &self.filters.active_filters(), &self.config);
        tracing::debug!(seq = self.last_issued, method = plan.method.as_str(), "issuing search");
        Some(IssuedQuery {
            seq: self.last_issued,
            plan,
        })
    }

    /// Deliver a successful query completion.
    ///
    /// Applied only when `seq` is still the highest issued; a stale
    /// completion is a normal outcome of typing fast, not a failure.
    pub fn apply_results(&mut self, seq: u64, records: Vec<IssueRecord>) -> ApplyOutcome {
        if seq != self.last_issued {
            tracing::trace!(seq, latest = self.last_issued, "dropping superseded results");
            return ApplyOutcome::Superseded;
        }
        self.results.replace(records);
        ApplyOutcome::Applied
    }

    /// Deliver a failed query completion.
    ///
    /// The previous list and selection are retained either way; the list
    /// goes empty only on a *successful* empty result. Not retried here —
    /// the next text or filter change naturally re-issues.
    pub fn apply_failure(&mut self, seq: u64) -> ApplyOutcome {
        if seq != self.last_issued {
            tracing::trace!(seq, latest = self.last_issued, "dropping superseded failure");
            return ApplyOutcome::Superseded;
        }
        tracing::warn!(seq, "search query failed; keeping previous results");
        ApplyOutcome::Applied
    }

    // ── Navigation & activation ────────────────────────────────────

    /// Returns whether the key event was consumed.
    pub fn move_up(&mut self) -> bool {
        self.results.move_up()
    }

    /// Returns whether the key event was consumed.
    pub fn move_down(&mut self) -> bool {
        self.results.move_down()
    }

    /// Activate the selected record, if any.
    #[must_use]
    pub fn activate(&self, modifiers: Modifiers) -> Option<Activation> {
        self.results.activate(modifiers)
    }

    // ── Read access for the shell ──────────────────────────────────

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn results(&self) -> &ResultList {
        &self.results
    }

    #[must_use]
    pub fn active_filters(&self) -> ActiveFilters {
        self.filters.active_filters()
    }

    #[must_use]
    pub fn candidates(&self, group_id: &str) -> Option<&[FacetValue]> {
        self.filters.candidates(group_id)
    }

    #[must_use]
    pub fn is_active(&self, group_id: &str, value: &str) -> bool {
        self.filters.is_active(group_id, value)
    }

    #[must_use]
    pub fn config(&self) -> &DashConfig {
        &self.config
    }
}
