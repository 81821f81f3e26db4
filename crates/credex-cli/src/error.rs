//! CLI error types.

use std::path::PathBuf;

use credex_core::CoreError;
use credex_measures::MeasuresError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Input file is not valid JSON of the expected shape.
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// Measure lookup or policy error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Engine configuration error.
    #[error(transparent)]
    Measures(#[from] MeasuresError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
