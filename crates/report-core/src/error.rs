use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the report consolidator.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A report file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A generated report could not be written to its destination.
    #[error("Failed to write report {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reports root directory does not exist.
    #[error("Reports directory not found: {0}")]
    ReportsDirNotFound(PathBuf),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the report crates.
pub type Result<T> = std::result::Result<T, ReportError>;
