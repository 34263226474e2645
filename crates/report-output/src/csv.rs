//! The flat CSV companion document.
//!
//! One row per record in corpus order, independent of the grouped
//! statistics. Missing fields render as empty strings.

use std::path::Path;

use tracing::info;

use report_core::models::FlatRecord;
use report_core::{ReportError, Result};
use report_data::Corpus;

const HEADER: &str = "Test Name,Status,Start Time,Duration (ms),Device,Android Version,Message";

/// Escape one CSV field: wrap in quotes and double embedded quotes when the
/// value contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render milliseconds without a trailing `.0` for whole values.
fn format_duration(duration: Option<f64>) -> String {
    duration.map(|d| d.to_string()).unwrap_or_default()
}

fn format_row(record: &FlatRecord) -> String {
    [
        escape_field(record.test_name.as_deref().unwrap_or_default()),
        escape_field(record.status.as_deref().unwrap_or_default()),
        escape_field(record.start_time.as_deref().unwrap_or_default()),
        format_duration(record.duration),
        escape_field(&record.device),
        escape_field(&record.android_version),
        escape_field(&record.message),
    ]
    .join(",")
}

/// Render the full CSV document, header first, rows in corpus order.
pub fn render_csv(corpus: &Corpus) -> String {
    let mut lines = Vec::with_capacity(corpus.records.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(corpus.records.iter().map(format_row));
    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// Render and write the CSV document to `path`.
pub fn write_csv_report(path: &Path, corpus: &Corpus) -> Result<()> {
    std::fs::write(path, render_csv(corpus)).map_err(|source| ReportError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("CSV report generated: {}", path.display());
    Ok(())
}
