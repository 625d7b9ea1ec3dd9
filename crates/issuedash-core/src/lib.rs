//! Core types, configuration, and models for issuedash
//!
//! This crate provides:
//! - The dashboard configuration schema (`DashConfig`, JSON parsing)
//! - The issue record model (`IssueRecord`)
//! - Common error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod models;

// Re-export key types for convenience
pub use config::{
    DashConfig, FilterGroupConfig, ISSUES_TABLE, UPDATED_AT_COLUMN, is_valid_identifier,
};
pub use error::{ConfigError, Result as CoreResult};
pub use models::IssueRecord;
