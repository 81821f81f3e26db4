//! Diff command implementation.
//!
//! Computes delta and gamma from precomputed base, up and down measure maps.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use credex_core::MeasureMap;
use credex_measures::{diff, DeltaGamma};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::output::{print_output, print_warning};

/// Arguments for the diff command.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Base scenario measures (JSON object of measure to value)
    #[arg(short, long)]
    pub base: PathBuf,

    /// Up-bumped scenario measures
    #[arg(short, long)]
    pub up: PathBuf,

    /// Down-bumped scenario measures; gamma is only computed when given
    #[arg(short, long)]
    pub down: Option<PathBuf>,
}

/// One delta or gamma entry.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DiffRow {
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Measure")]
    pub measure: String,
    #[tabled(rename = "Value")]
    pub value: f64,
}

/// Executes the diff command.
pub fn execute(args: DiffArgs, format: OutputFormat) -> Result<()> {
    let base: MeasureMap = read_json(&args.base)?;
    let up: MeasureMap = read_json(&args.up)?;
    let down: Option<MeasureMap> = args.down.as_deref().map(read_json::<MeasureMap>).transpose()?;

    let result = diff(&base, Some(&up), down.as_ref());
    if result.is_empty() {
        print_warning("Up scenario has no measures, nothing to difference");
    }

    print_output(&result, &rows(&result), format)
}

fn rows(result: &DeltaGamma) -> Vec<DiffRow> {
    [("Delta", &result.delta), ("Gamma", &result.gamma)]
        .into_iter()
        .filter_map(|(kind, values)| values.as_ref().map(|v| (kind, v)))
        .flat_map(|(kind, values)| {
            values.iter().map(move |(measure, value)| DiffRow {
                kind: kind.to_string(),
                measure: measure.to_string(),
                value: *value,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_delta_then_gamma() {
        let result = DeltaGamma {
            delta: Some([("PV", -3.0)].into_iter().collect()),
            gamma: Some([("PV", 2.0)].into_iter().collect()),
        };

        let rows = rows(&result);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].kind, "Delta");
        assert_eq!(rows[0].value, -3.0);
        assert_eq!(rows[1].kind, "Gamma");
        assert_eq!(rows[1].value, 2.0);
    }

    #[test]
    fn test_rows_without_gamma() {
        let result = DeltaGamma {
            delta: Some([("PV", 1.0), ("Spread", 0.5)].into_iter().collect()),
            gamma: None,
        };
        assert!(rows(&result).iter().all(|r| r.kind == "Delta"));
        assert!(rows(&DeltaGamma::default()).is_empty());
    }
}
