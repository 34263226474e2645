//! The consolidated JSON document.

use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::info;

use report_core::models::FlatRecord;
use report_core::{ReportError, Result};
use report_data::summary::{summarize, GroupStats, Summary};
use report_data::Corpus;

/// `reportType` value stamped into every generated document.
pub const REPORT_TYPE: &str = "Google Play Console Testing Report";

/// Top-level consolidated report document.
///
/// `deviceCoverage` keeps device keys in first-seen order; `dailyStats`
/// keys are ascending.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedReport<'a> {
    pub report_type: &'static str,
    /// ISO-8601 generation timestamp (local clock).
    pub generated_at: String,
    pub summary: Summary,
    #[serde(serialize_with = "pairs_as_map")]
    pub device_coverage: Vec<(String, GroupStats)>,
    #[serde(serialize_with = "pairs_as_map")]
    pub daily_stats: Vec<(String, GroupStats)>,
    pub detailed_results: &'a [FlatRecord],
}

/// Serialize `(key, stats)` pairs as a JSON object in pair order.
fn pairs_as_map<S>(pairs: &[(String, GroupStats)], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, stats) in pairs {
        map.serialize_entry(key, stats)?;
    }
    map.end()
}

/// Assemble the document from a populated corpus.
pub fn build_report(corpus: &Corpus) -> ConsolidatedReport<'_> {
    let device_coverage = corpus
        .device_stats
        .iter()
        .map(|(key, counter)| (key.to_string(), GroupStats::from_counter(counter)))
        .collect();
    let daily_stats = corpus
        .daily_stats
        .iter_sorted()
        .map(|(key, counter)| (key.to_string(), GroupStats::from_counter(counter)))
        .collect();

    ConsolidatedReport {
        report_type: REPORT_TYPE,
        generated_at: chrono::Local::now().to_rfc3339(),
        summary: summarize(corpus),
        device_coverage,
        daily_stats,
        detailed_results: &corpus.records,
    }
}

/// Render the document and write it pretty-printed to `path`.
pub fn write_json_report(path: &Path, corpus: &Corpus) -> Result<()> {
    let report = build_report(corpus);
    let rendered = serde_json::to_string_pretty(&report)?;
    std::fs::write(path, rendered).map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("JSON report generated: {}", path.display());
    Ok(())
}
