use serde::{Deserialize, Serialize};

/// Sentinel substituted for absent device fields.
pub const UNKNOWN: &str = "Unknown";

/// Status string the harness writes for a passing test.
pub const STATUS_PASS: &str = "PASS";
/// Status string the harness writes for a failing test.
pub const STATUS_FAIL: &str = "FAIL";

/// Device block of a report file. Every field is optional in the wild.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDevice {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub android_version: Option<String>,
}

/// One test outcome inside a report file.
///
/// Only `PASS` and `FAIL` statuses are semantically recognised downstream;
/// anything else still counts toward totals.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResult {
    pub test_name: Option<String>,
    pub status: Option<String>,
    pub start_time: Option<String>,
    /// Duration in milliseconds.
    pub duration: Option<f64>,
    pub message: Option<String>,
}

impl RawResult {
    /// Calendar-date grouping key: the first 10 characters of `startTime`
    /// (`"YYYY-MM-DD"`), or an empty string when the value is absent or
    /// shorter than a full date.
    pub fn date_key(&self) -> String {
        // Character-based so a malformed non-ASCII timestamp cannot panic.
        match self.start_time.as_deref() {
            Some(ts) if ts.chars().count() >= 10 => ts.chars().take(10).collect(),
            _ => String::new(),
        }
    }
}

/// One deserialized report file: device metadata plus its test results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReport {
    pub device: Option<RawDevice>,
    #[serde(default)]
    pub results: Vec<RawResult>,
}

impl RawReport {
    /// Device-grouping identity: `"<manufacturer> <model>"` with the
    /// `Unknown` sentinel for either absent field. Reports whose pair
    /// renders identically land in the same device group.
    pub fn device_key(&self) -> String {
        let device = self.device.as_ref();
        let manufacturer = device
            .and_then(|d| d.manufacturer.as_deref())
            .unwrap_or(UNKNOWN);
        let model = device.and_then(|d| d.model.as_deref()).unwrap_or(UNKNOWN);
        format!("{} {}", manufacturer, model)
    }

    /// Android version string, `Unknown` when absent.
    pub fn android_version(&self) -> String {
        self.device
            .as_ref()
            .and_then(|d| d.android_version.clone())
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// Canonical per-test record with the owning report's device info
/// denormalised in, so the raw report can be dropped after flattening.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub test_name: Option<String>,
    pub status: Option<String>,
    pub start_time: Option<String>,
    pub duration: Option<f64>,
    /// Composite `"<manufacturer> <model>"` device identity.
    pub device: String,
    pub android_version: String,
    pub message: String,
}

impl FlatRecord {
    /// Build a record from one result and its owning report's device info.
    pub fn from_result(result: &RawResult, device_key: &str, android_version: &str) -> Self {
        Self {
            test_name: result.test_name.clone(),
            status: result.status.clone(),
            start_time: result.start_time.clone(),
            duration: result.duration,
            device: device_key.to_string(),
            android_version: android_version.to_string(),
            message: result.message.clone().unwrap_or_default(),
        }
    }

    /// Whether this record's status is the recognised pass marker.
    pub fn is_passed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_PASS)
    }

    /// Whether this record's status is the recognised fail marker.
    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some(STATUS_FAIL)
    }
}
