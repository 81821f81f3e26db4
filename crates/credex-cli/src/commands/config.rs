//! Config command implementation.
//!
//! Prints the measures engine configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use credex_measures::MeasuresConfig;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show(ShowArgs),

    /// Show the default configuration
    Default,
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file (JSON); unset fields take their defaults
    #[arg(short, long, env = "CREDEX_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Executes the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    let config = match args.command {
        ConfigCommand::Show(show) => load(show.config)?,
        ConfigCommand::Default => MeasuresConfig::default(),
    };

    if format == OutputFormat::Table {
        print_header("Measures Configuration");
    }
    print_output(&config, &settings(&config)?, format)
}

fn load(path: Option<PathBuf>) -> Result<MeasuresConfig> {
    let Some(path) = path else {
        debug!("No configuration file, using defaults");
        return Ok(MeasuresConfig::default());
    };

    debug!(path = %path.display(), "Loading configuration");
    Ok(MeasuresConfig::from_json_file(&path).map_err(CliError::from)?)
}

fn settings(config: &MeasuresConfig) -> Result<Vec<KeyValue>> {
    let value = serde_json::to_value(config)?;
    let rows = value
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .map(|(key, value)| KeyValue::new(key, value.to_string()))
                .collect()
        })
        .unwrap_or_default();
    Ok(rows)
}
