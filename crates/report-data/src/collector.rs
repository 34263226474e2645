//! Report-file discovery and loading.
//!
//! Finds `report_*.json` files produced by the test harness and folds each
//! one into the run's [`Corpus`] as soon as it parses, so memory is bound
//! by the corpus size rather than the file count.

use std::path::{Path, PathBuf};

use report_core::models::RawReport;
use tracing::{info, warn};

use crate::corpus::Corpus;

/// Find all `report_*.json` files recursively under `root`, sorted by path.
pub fn find_report_files(root: &Path) -> Vec<PathBuf> {
    if !root.exists() {
        warn!("Reports directory does not exist: {}", root.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_report_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Discover every report file under `root` and fold it into `corpus`.
///
/// A file that cannot be read or parsed is logged and skipped; it
/// contributes zero records and never aborts the run. Returns the number
/// of files successfully folded.
pub fn collect_reports(root: &Path, corpus: &mut Corpus) -> usize {
    info!("Collecting reports from: {}", root.display());

    let report_files = find_report_files(root);
    info!("Found {} report files", report_files.len());

    let mut folded = 0usize;
    for file_path in &report_files {
        match load_report(file_path) {
            Ok(report) => {
                corpus.fold(&report);
                folded += 1;
            }
            Err(e) => {
                warn!("Error processing {}: {}", file_path.display(), e);
            }
        }
    }

    folded
}

/// Read and parse one report file.
fn load_report(path: &Path) -> report_core::Result<RawReport> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        report_core::ReportError::FileRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Matches the harness's `report_*.json` naming convention.
fn is_report_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with("report_") && name.ends_with(".json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn sample_report(manufacturer: &str, model: &str, status: &str, start_time: &str) -> String {
        serde_json::json!({
            "device": {"manufacturer": manufacturer, "model": model, "androidVersion": "14"},
            "results": [{
                "testName": "testCase",
                "status": status,
                "startTime": start_time,
                "duration": 100,
            }]
        })
        .to_string()
    }

    // ── find_report_files ─────────────────────────────────────────────────────

    #[test]
    fn test_find_report_files_matches_naming_convention() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "report_pixel7.json", "{}");
        write_file(dir.path(), "summary.json", "{}");
        write_file(dir.path(), "report_s23.txt", "{}");

        let files = find_report_files(dir.path());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("report_pixel7.json"));
    }

    #[test]
    fn test_find_report_files_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("run-2024-01-01");
        std::fs::create_dir_all(&sub).unwrap();
        write_file(dir.path(), "report_a.json", "{}");
        write_file(&sub, "report_b.json", "{}");

        let files = find_report_files(dir.path());
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_find_report_files_sorted() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "report_c.json", "{}");
        write_file(dir.path(), "report_a.json", "{}");
        write_file(dir.path(), "report_b.json", "{}");

        let names: Vec<String> = find_report_files(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["report_a.json", "report_b.json", "report_c.json"]);
    }

    #[test]
    fn test_find_report_files_nonexistent_root() {
        let files = find_report_files(Path::new("/tmp/does-not-exist-report-test-xyz"));
        assert!(files.is_empty());
    }

    // ── collect_reports ───────────────────────────────────────────────────────

    #[test]
    fn test_collect_reports_folds_all_files() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "report_a.json",
            &sample_report("Google", "Pixel7", "PASS", "2024-01-01T10:00:00"),
        );
        write_file(
            dir.path(),
            "report_b.json",
            &sample_report("Google", "Pixel7", "FAIL", "2024-01-01T11:00:00"),
        );

        let mut corpus = Corpus::new();
        let folded = collect_reports(dir.path(), &mut corpus);

        assert_eq!(folded, 2);
        assert_eq!(corpus.records.len(), 2);
        let device = corpus.device_stats.get("Google Pixel7").unwrap();
        assert_eq!(device.total, 2);
        assert_eq!(device.passed, 1);
        assert_eq!(device.failed, 1);
    }

    #[test]
    fn test_collect_reports_skips_corrupt_file() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "report_good.json",
            &sample_report("Google", "Pixel7", "PASS", "2024-01-01T10:00:00"),
        );
        write_file(dir.path(), "report_bad.json", "{not valid json{{");

        let mut corpus = Corpus::new();
        let folded = collect_reports(dir.path(), &mut corpus);

        // The corrupt file contributes nothing; the run still completes.
        assert_eq!(folded, 1);
        assert_eq!(corpus.records.len(), 1);
        assert_eq!(corpus.device_stats.get("Google Pixel7").unwrap().total, 1);
    }

    #[test]
    fn test_collect_reports_corrupt_file_leaves_aggregates_unchanged() {
        let dir = TempDir::new().unwrap();
        write_file(
            dir.path(),
            "report_good.json",
            &sample_report("Google", "Pixel7", "PASS", "2024-01-01T10:00:00"),
        );

        let mut clean = Corpus::new();
        collect_reports(dir.path(), &mut clean);

        write_file(dir.path(), "report_zz_bad.json", "not json at all");
        let mut with_bad = Corpus::new();
        collect_reports(dir.path(), &mut with_bad);

        assert_eq!(clean.records.len(), with_bad.records.len());
        assert_eq!(
            clean.device_stats.get("Google Pixel7").unwrap(),
            with_bad.device_stats.get("Google Pixel7").unwrap()
        );
    }

    #[test]
    fn test_collect_reports_empty_directory() {
        let dir = TempDir::new().unwrap();
        let mut corpus = Corpus::new();
        let folded = collect_reports(dir.path(), &mut corpus);

        assert_eq!(folded, 0);
        assert!(corpus.records.is_empty());
        assert!(corpus.device_stats.is_empty());
        assert!(corpus.daily_stats.is_empty());
    }
}
