use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricDeltaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Operator '{operator}' failed: {source}")]
    OperatorFailed {
        operator: String,
        #[source]
        source: Box<MetricDeltaError>,
    },

    #[error("No revisions recorded for archiver '{archiver}'; run `metric-delta snapshot` first")]
    NoRevisions { archiver: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Timed out waiting for lock on {path}")]
    StateLock { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MetricDeltaError {
    /// Wrap an error raised while an operator was executing.
    #[must_use]
    pub fn operator_failed(operator: &str, source: Self) -> Self {
        Self::OperatorFailed {
            operator: operator.to_string(),
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricDeltaError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
