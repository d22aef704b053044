//! Error types for engage-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in engage-core
#[derive(Debug, Error)]
pub enum Error {
    /// A required file or directory could not be opened
    #[error("could not open '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A class-list line has too few tab-separated fields
    #[error("classlist line {line}: only {fields} fields")]
    MalformedRoster { line: usize, fields: usize },

    /// An engagement export ended before its preamble was complete
    #[error("error reading '{path}': could not read line {line}")]
    ExportTruncated { path: PathBuf, line: usize },

    /// An engagement export preamble line exists but violates its rule
    #[error("error reading '{path}': invalid line {line} - {reason}")]
    ExportPreamble {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// CSV writing error from the csv crate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
