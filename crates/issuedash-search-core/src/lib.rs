//! Incremental filtered-search core for issuedash.
//!
//! This crate is the pure heart of the search popup. It owns no I/O and no
//! widget state; the UI shell feeds events in and executes compiled plans
//! against the store.
//!
//! # Architecture
//!
//! - [`FilterState`] tracks which values are active within each filter
//!   group (leaf component, pure data).
//! - [`compile`] turns free text + an active-filter snapshot into a
//!   [`SearchPlan`]: parameterized SQL, fixed recency ordering, bounded row
//!   count.
//! - [`ResultList`] owns the live record sequence and the cursor, with
//!   saturating keyboard navigation and deterministic activation.
//! - [`SearchSession`] serializes all mutations through one event path and
//!   stamps every issued query with a monotonically increasing sequence
//!   number; results are applied only when their sequence number is still
//!   the highest issued (supersession), so out-of-order completions can
//!   never clobber a newer query's results.

#![forbid(unsafe_code)]

pub mod error;
pub mod filter_state;
pub mod planner;
pub mod results;
pub mod session;

pub use error::{Result as SearchResult, SearchError};
pub use filter_state::{ActiveFilters, FacetValue, FilterState};
pub use planner::{PlanMethod, PlanParam, SearchPlan, compile};
pub use results::{Activation, Modifiers, ResultList};
pub use session::{
    ApplyOutcome, IssuedQuery, MAX_QUERY_CHARS, SearchSession, TEXT_DEBOUNCE_TICKS,
};
