//! Data ingestion and aggregation for the report consolidator.
//!
//! Responsible for discovering and parsing `report_*.json` files produced
//! by the test harness, folding their results into the run's [`Corpus`],
//! and deriving the summary statistics shared by all output formats.

pub mod collector;
pub mod corpus;
pub mod summary;

pub use corpus::Corpus;

pub use report_core as core;
