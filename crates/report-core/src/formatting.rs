/// Round a value to two decimal places, half away from zero.
///
/// Used for every success-rate figure in the generated reports.
///
/// # Examples
///
/// ```
/// use report_core::formatting::round2;
///
/// assert_eq!(round2(50.0), 50.0);
/// assert_eq!(round2(33.333333), 33.33);
/// assert_eq!(round2(66.666666), 66.67);
/// assert_eq!(round2(0.005), 0.01);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a rate as a percentage with two decimal places, e.g. `"50.00%"`.
///
/// # Examples
///
/// ```
/// use report_core::formatting::format_percent;
///
/// assert_eq!(format_percent(50.0), "50.00%");
/// assert_eq!(format_percent(0.0), "0.00%");
/// assert_eq!(format_percent(66.666666), "66.67%");
/// ```
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate)
}
