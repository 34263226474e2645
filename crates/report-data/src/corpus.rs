//! The per-run accumulator: flattened records plus both grouped counters.
//!
//! Mirrors the harness's counting rules exactly: `total` counts every
//! result, `passed`/`failed` only the recognised `PASS`/`FAIL` statuses,
//! so ties/skips/errors leave `passed + failed < total`.

use std::collections::HashMap;

use report_core::models::{FlatRecord, RawReport};

// ── GroupCounter ──────────────────────────────────────────────────────────────

/// Monotonic total/passed/failed counts for one group key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupCounter {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
}

impl GroupCounter {
    /// Count one result. `total` always increments; `passed` and `failed`
    /// only for the exact `PASS` / `FAIL` markers.
    fn record(&mut self, record: &FlatRecord) {
        self.total += 1;
        if record.is_passed() {
            self.passed += 1;
        } else if record.is_failed() {
            self.failed += 1;
        }
    }
}

// ── CounterMap ────────────────────────────────────────────────────────────────

/// Keyed [`GroupCounter`] accumulator with lazy zero-initialisation.
///
/// Keys keep their first-seen order; both grouping dimensions (device
/// identity and calendar date) use the same type, and the date dimension
/// sorts its keys only at render time.
#[derive(Debug, Clone, Default)]
pub struct CounterMap {
    order: Vec<String>,
    counters: HashMap<String, GroupCounter>,
}

impl CounterMap {
    fn record(&mut self, key: &str, record: &FlatRecord) {
        if !self.counters.contains_key(key) {
            self.order.push(key.to_string());
        }
        self.counters.entry(key.to_string()).or_default().record(record);
    }

    pub fn get(&self, key: &str) -> Option<&GroupCounter> {
        self.counters.get(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(key, counter)` pairs in first-seen insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupCounter)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), &self.counters[key]))
    }

    /// Iterate `(key, counter)` pairs in ascending key order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &GroupCounter)> {
        let mut keys: Vec<&String> = self.order.iter().collect();
        keys.sort();
        keys.into_iter().map(|key| (key.as_str(), &self.counters[key]))
    }
}

// ── Corpus ────────────────────────────────────────────────────────────────────

/// Process-wide accumulator for one run.
///
/// Populated monotonically while reports are collected, then read-only
/// during rendering. Record order is file-then-result order, never
/// time-sorted.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub records: Vec<FlatRecord>,
    pub device_stats: CounterMap,
    pub daily_stats: CounterMap,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed report into the accumulator.
    ///
    /// Every result becomes a [`FlatRecord`] carrying denormalised device
    /// info, and increments both grouped counters. All fields are
    /// defaulted, so this never fails.
    pub fn fold(&mut self, report: &RawReport) {
        let device_key = report.device_key();
        let android_version = report.android_version();

        for result in &report.results {
            let record = FlatRecord::from_result(result, &device_key, &android_version);
            let date_key = result.date_key();

            self.device_stats.record(&device_key, &record);
            self.daily_stats.record(&date_key, &record);
            self.records.push(record);
        }
    }
}
