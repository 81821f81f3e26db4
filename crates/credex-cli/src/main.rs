//! Credex CLI - offline scenario measure tools.
//!
//! # Usage
//!
//! ```bash
//! # Delta and gamma from precomputed valuations
//! credex diff --base base.json --up up.json --down down.json
//!
//! # Roll component values up into a basket
//! credex rollup --components components.json --policies policies.json
//!
//! # Look up a single measure
//! credex lookup --values base.json --measure PV
//!
//! # Print the engine configuration
//! credex config show --config measures.json
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` to override the default `credex=info`
//! filter, or pass `--verbose` for debug output.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let format = cli.format;

    match cli.command {
        Commands::Diff(args) => commands::diff::execute(args, format)?,
        Commands::Rollup(args) => commands::rollup::execute(args, format)?,
        Commands::Lookup(args) => commands::lookup::execute(args, format)?,
        Commands::Config(args) => commands::config::execute(args, format)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "credex=debug" } else { "credex=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
