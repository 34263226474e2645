//! Output rendering for the report consolidator.
//!
//! Three targets share the statistics derived in `report-data`: the
//! structured JSON document, the flat CSV document, and the console
//! summary.

pub mod console;
pub mod csv;
pub mod json;
