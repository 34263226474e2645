//! The human-readable console summary.

use report_core::formatting::format_percent;
use report_data::summary::{success_rate, summarize};
use report_data::Corpus;

const BANNER: &str = "============================================================";

/// Render the console summary: headline counts plus one line per device
/// group in first-seen order.
pub fn render_summary(corpus: &Corpus) -> String {
    let summary = summarize(corpus);

    let mut out = String::new();
    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\nCONSOLIDATED TEST REPORT SUMMARY\n");
    out.push_str(BANNER);
    out.push_str(&format!("\nTotal Tests: {}\n", summary.total_tests));
    out.push_str(&format!("Passed: {}\n", summary.passed));
    out.push_str(&format!("Failed: {}\n", summary.failed));
    out.push_str(&format!(
        "Success Rate: {}\n",
        format_percent(summary.success_rate)
    ));
    out.push_str("\nDevice Coverage:\n");
    for (device, counter) in corpus.device_stats.iter() {
        out.push_str(&format!(
            "  {}: {} tests, {} success\n",
            device,
            counter.total,
            format_percent(success_rate(counter.passed, counter.total))
        ));
    }
    out.push_str(BANNER);
    out.push('\n');
    out
}

/// Render and print the summary to stdout.
pub fn print_summary(corpus: &Corpus) {
    print!("{}", render_summary(corpus));
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_core::models::RawReport;

    fn fold(corpus: &mut Corpus, json: &str) {
        let report: RawReport = serde_json::from_str(json).unwrap();
        corpus.fold(&report);
    }

    #[test]
    fn test_summary_headline() {
        let mut corpus = Corpus::new();
        fold(
            &mut corpus,
            r#"{"device": {"manufacturer": "Google", "model": "Pixel7"},
                "results": [
                    {"status": "PASS", "startTime": "2024-01-01T10:00:00"},
                    {"status": "FAIL", "startTime": "2024-01-01T11:00:00"}
                ]}"#,
        );
        let rendered = render_summary(&corpus);

        assert!(rendered.contains("CONSOLIDATED TEST REPORT SUMMARY"));
        assert!(rendered.contains("Total Tests: 2"));
        assert!(rendered.contains("Passed: 1"));
        assert!(rendered.contains("Failed: 1"));
        assert!(rendered.contains("Success Rate: 50.00%"));
        assert!(rendered.contains("  Google Pixel7: 2 tests, 50.00% success"));
    }

    #[test]
    fn test_summary_empty_corpus() {
        let rendered = render_summary(&Corpus::new());
        assert!(rendered.contains("Total Tests: 0"));
        assert!(rendered.contains("Success Rate: 0.00%"));
        assert!(rendered.contains("Device Coverage:\n"));
    }

    #[test]
    fn test_device_lines_in_insertion_order() {
        let mut corpus = Corpus::new();
        fold(
            &mut corpus,
            r#"{"device": {"manufacturer": "Samsung", "model": "S23"},
                "results": [{"status": "PASS"}]}"#,
        );
        fold(
            &mut corpus,
            r#"{"device": {"manufacturer": "Google", "model": "Pixel7"},
                "results": [{"status": "FAIL"}]}"#,
        );
        let rendered = render_summary(&corpus);
        let samsung = rendered.find("Samsung S23").unwrap();
        let google = rendered.find("Google Pixel7").unwrap();
        assert!(samsung < google);
        assert!(rendered.contains("  Google Pixel7: 1 tests, 0.00% success"));
    }

    #[test]
    fn test_banner_width() {
        let rendered = render_summary(&Corpus::new());
        assert!(rendered.lines().any(|l| l == "=".repeat(60)));
    }
}
