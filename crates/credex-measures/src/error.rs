//! Error types for the measure engine.

use credex_core::CoreError;
use thiserror::Error;

/// Result type for measure engine operations.
pub type MeasuresResult<T> = Result<T, MeasuresError>;

/// Errors surfaced by the measure engine.
///
/// Missing scenarios and failed valuations are not errors; they only remove
/// entries from a report. What remains is lookup and configuration failure.
#[derive(Error, Debug)]
pub enum MeasuresError {
    /// Core lookup failure, e.g. an explicitly requested measure is absent.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error while loading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeasuresError {
    /// Create a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}
