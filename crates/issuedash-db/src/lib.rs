//! Record-store boundary for issuedash
//!
//! This crate executes compiled [`SearchPlan`]s against the locally cached
//! `issues` table (`SQLite` via `sqlmodel` on frankensqlite) and seeds each
//! filter group's candidate list from distinct-value counts. The table
//! itself is produced by an external sync job; nothing here writes to it
//! outside of test fixtures.
//!
//! [`SearchPlan`]: issuedash_search_core::SearchPlan

#![forbid(unsafe_code)]

pub mod error;
pub mod fixtures;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{NULL_FACET_LABEL, filter_value_counts, run_search, seed_filter_candidates};

// Re-export the driver stack for consumers
pub use sqlmodel_core;
pub use sqlmodel_frankensqlite;

/// The connection type used against the cached issue store.
pub type DbConn = sqlmodel_frankensqlite::FrankenConnection;
