//! Rollup command implementation.
//!
//! Rolls component measure maps up into basket values under a policy table.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use credex_core::{MeasureMap, PolicyTable};
use credex_measures::{rollup, ComponentValues};
use serde::Deserialize;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::output::{print_output, MeasureRow};

/// Arguments for the rollup command.
#[derive(Args, Debug)]
pub struct RollupArgs {
    /// Components: JSON list of `{"name", "notional", "values"}` entries
    #[arg(short, long)]
    pub components: PathBuf,

    /// Policy table: `{"default": "CUMULATIVE", "overrides": {"Price": "WEIGHTED_CUMULATIVE"}}`.
    /// Every measure aggregates cumulatively when omitted.
    #[arg(short, long)]
    pub policies: Option<PathBuf>,
}

/// One component as read from the components file.
#[derive(Debug, Deserialize)]
struct ComponentInput {
    name: String,
    notional: f64,
    #[serde(default)]
    values: MeasureMap,
}

impl From<ComponentInput> for ComponentValues {
    fn from(input: ComponentInput) -> Self {
        ComponentValues::new(input.name, input.notional, input.values)
    }
}

/// Executes the rollup command.
pub fn execute(args: RollupArgs, format: OutputFormat) -> Result<()> {
    let inputs: Vec<ComponentInput> = read_json(&args.components)?;
    let policies: PolicyTable = match &args.policies {
        Some(path) => read_json(path)?,
        None => PolicyTable::default(),
    };

    let components: Vec<ComponentValues> = inputs.into_iter().map(Into::into).collect();
    let basket = rollup(&components, |measure| policies.policy_for(measure));
    info!(
        components = components.len(),
        measures = basket.len(),
        "Basket rolled up"
    );

    print_output(&basket, &MeasureRow::from_map(&basket), format)
}
