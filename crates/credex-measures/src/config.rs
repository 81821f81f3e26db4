//! Configuration for measure computation.

use std::path::Path;

use credex_core::{FlatBump, TenorBump};
use serde::{Deserialize, Serialize};

use crate::error::{MeasuresError, MeasuresResult};

/// Configuration for measure computation.
///
/// Controls which sensitivity families are computed and when component-wise
/// aggregation fans out in parallel. A disabled family is reported as absent,
/// exactly like a missing scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasuresConfig {
    /// Compute flat credit delta/gamma.
    pub calc_flat_credit: bool,

    /// Compute flat interest rate delta/gamma.
    pub calc_flat_ir: bool,

    /// Compute flat recovery delta/gamma.
    pub calc_flat_recovery: bool,

    /// Compute tenor-bucketed credit delta/gamma.
    pub calc_tenor_credit: bool,

    /// Compute tenor-bucketed interest rate delta/gamma.
    pub calc_tenor_ir: bool,

    /// Compute component-wise tenor credit delta/gamma for baskets.
    pub calc_component_tenor: bool,

    /// Value down scenarios and report gamma. When false, only delta is reported.
    pub calc_gamma: bool,

    /// Enable parallel component aggregation (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum component count to trigger parallel aggregation.
    pub parallel_threshold: usize,
}

impl Default for MeasuresConfig {
    fn default() -> Self {
        Self {
            calc_flat_credit: true,
            calc_flat_ir: true,
            calc_flat_recovery: true,
            calc_tenor_credit: true,
            calc_tenor_ir: true,
            calc_component_tenor: true,
            calc_gamma: true,
            parallel: true,
            parallel_threshold: 8,
        }
    }
}

impl MeasuresConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that computes delta only.
    #[must_use]
    pub fn delta_only() -> Self {
        Self {
            calc_gamma: false,
            ..Self::default()
        }
    }

    /// Creates a config that always aggregates sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether gamma is computed.
    #[must_use]
    pub fn with_gamma(mut self, enabled: bool) -> Self {
        self.calc_gamma = enabled;
        self
    }

    /// Enables or disables one flat bump family.
    #[must_use]
    pub fn with_flat(mut self, bump: FlatBump, enabled: bool) -> Self {
        match bump {
            FlatBump::Credit => self.calc_flat_credit = enabled,
            FlatBump::InterestRate => self.calc_flat_ir = enabled,
            FlatBump::Recovery => self.calc_flat_recovery = enabled,
        }
        self
    }

    /// Enables or disables one tenor bump family.
    #[must_use]
    pub fn with_tenor(mut self, bump: TenorBump, enabled: bool) -> Self {
        match bump {
            TenorBump::Credit => self.calc_tenor_credit = enabled,
            TenorBump::InterestRate => self.calc_tenor_ir = enabled,
        }
        self
    }

    /// Sets whether component-wise tenor aggregation runs.
    #[must_use]
    pub fn with_component_tenor(mut self, enabled: bool) -> Self {
        self.calc_component_tenor = enabled;
        self
    }

    /// Sets whether to use parallel aggregation.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel aggregation.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if the flat family is enabled.
    #[must_use]
    pub fn flat_enabled(&self, bump: FlatBump) -> bool {
        match bump {
            FlatBump::Credit => self.calc_flat_credit,
            FlatBump::InterestRate => self.calc_flat_ir,
            FlatBump::Recovery => self.calc_flat_recovery,
        }
    }

    /// Returns true if the tenor family is enabled.
    #[must_use]
    pub fn tenor_enabled(&self, bump: TenorBump) -> bool {
        match bump {
            TenorBump::Credit => self.calc_tenor_credit,
            TenorBump::InterestRate => self.calc_tenor_ir,
        }
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MeasuresError::Config`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> MeasuresResult<Self> {
        serde_json::from_str(json).map_err(|e| MeasuresError::config(e.to_string()))
    }

    /// Loads a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MeasuresError::Io`] if the file cannot be read and
    /// [`MeasuresError::Config`] if it cannot be parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> MeasuresResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
