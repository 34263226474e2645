//! Derived statistics shared by the JSON, CSV, and console renderers.

use serde::Serialize;

use report_core::formatting::round2;

use crate::corpus::{Corpus, GroupCounter};

/// Corpus-wide headline statistics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_tests: u64,
    pub passed: u64,
    pub failed: u64,
    /// Percentage in `[0, 100]`, two decimals; exactly `0` on an empty corpus.
    pub success_rate: f64,
    pub testing_period: TestingPeriod,
}

/// First and last `startTime` seen across the corpus.
///
/// Lexicographic min/max of the timestamp strings, which matches
/// chronological order as long as the harness emits one format and
/// timezone. Both `None` when no record carries a start time.
#[derive(Debug, Clone, Serialize)]
pub struct TestingPeriod {
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Derived per-group figures for one [`GroupCounter`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub total_tests: u64,
    pub passed: u64,
    pub failed: u64,
    pub success_rate: f64,
}

impl GroupStats {
    pub fn from_counter(counter: &GroupCounter) -> Self {
        Self {
            total_tests: counter.total,
            passed: counter.passed,
            failed: counter.failed,
            success_rate: success_rate(counter.passed, counter.total),
        }
    }
}

/// `passed / total * 100`, rounded to two decimals, `0` when `total == 0`.
pub fn success_rate(passed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(passed as f64 / total as f64 * 100.0)
}

/// Compute the corpus-wide summary.
pub fn summarize(corpus: &Corpus) -> Summary {
    let total_tests = corpus.records.len() as u64;
    let passed = corpus.records.iter().filter(|r| r.is_passed()).count() as u64;
    let failed = corpus.records.iter().filter(|r| r.is_failed()).count() as u64;

    let start_times = || corpus.records.iter().filter_map(|r| r.start_time.as_deref());
    let testing_period = TestingPeriod {
        start: start_times().min().map(str::to_string),
        end: start_times().max().map(str::to_string),
    };

    Summary {
        total_tests,
        passed,
        failed,
        success_rate: success_rate(passed, total_tests),
        testing_period,
    }
}
