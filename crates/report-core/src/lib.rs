//! Core domain types for the consolidated test report generator.
//!
//! Holds the raw report-file shapes, the normalized per-test record, the
//! error type, and the CLI settings shared by the other crates.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;

pub use error::{ReportError, Result};
