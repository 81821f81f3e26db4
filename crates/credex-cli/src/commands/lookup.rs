//! Lookup command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use credex_core::MeasureMap;

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::error::CliError;
use crate::output::{print_output, MeasureRow};

/// Arguments for the lookup command.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Measure map to search (JSON object of measure to value)
    #[arg(long)]
    pub values: PathBuf,

    /// Measure name, matched case-insensitively
    #[arg(short, long)]
    pub measure: String,
}

/// Executes the lookup command.
///
/// Fails with the measure-not-found message when the map has no such measure.
pub fn execute(args: LookupArgs, format: OutputFormat) -> Result<()> {
    let values: MeasureMap = read_json(&args.values)?;
    let value = values.measure(&args.measure).map_err(CliError::from)?;

    let row = MeasureRow {
        measure: args.measure,
        value,
    };
    print_output(&row, std::slice::from_ref(&row), format)
}
