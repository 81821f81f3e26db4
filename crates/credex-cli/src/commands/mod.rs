//! CLI command implementations.

pub mod config;
pub mod diff;
pub mod lookup;
pub mod rollup;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use diff::DiffArgs;
pub use lookup::LookupArgs;
pub use rollup::RollupArgs;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CliError, CliResult};

/// Reads and parses a JSON input file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
