use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Consolidate per-device test reports for Google Play Console submission
#[derive(Parser, Debug, Clone)]
#[command(
    name = "report-consolidator",
    about = "Consolidate per-device test reports for Google Play Console submission",
    version
)]
pub struct Settings {
    /// Directory scanned recursively for report_*.json files
    pub reports_dir: PathBuf,

    /// Path of the consolidated JSON report (the CSV companion is written
    /// next to it with a .csv extension)
    pub output: PathBuf,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,
}

impl Settings {
    /// Path of the CSV companion report: the JSON output path with its
    /// extension replaced by `csv`.
    pub fn csv_output(&self) -> PathBuf {
        self.output.with_extension("csv")
    }
}
