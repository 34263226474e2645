use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised. All output
/// goes to stderr so it never mixes with the console summary on stdout.
/// Idempotent: re-initialising an already-set subscriber is a no-op.
pub fn setup_logging(log_level: &str) {
    // Map Python-style log-level names to tracing level names.
    let normalised = match log_level.to_uppercase().as_str() {
        "DEBUG" | "CRITICAL" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        other => other.to_lowercase(),
    };

    let filter = EnvFilter::try_new(&normalised).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}
