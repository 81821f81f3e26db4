//! Bump families and canonical scenario names.

use serde::{Deserialize, Serialize};

/// Name of the mandatory unbumped scenario.
pub const BASE_SCENARIO: &str = "Base";

/// Measure carrying the wall-clock seconds spent producing a result.
pub const CALC_TIME_MEASURE: &str = "CalcTime";

/// Direction of a scenario bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BumpDirection {
    /// Bump up.
    Up,
    /// Bump down.
    Down,
}

impl BumpDirection {
    fn suffix(self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Dn",
        }
    }
}

/// Parallel bump families applied uniformly across a whole curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlatBump {
    /// Credit (hazard/spread) curve.
    Credit,
    /// Interest rate (discount) curve.
    InterestRate,
    /// Recovery rate.
    Recovery,
}

impl FlatBump {
    /// All flat bump families.
    pub const ALL: [FlatBump; 3] = [Self::Credit, Self::InterestRate, Self::Recovery];

    /// Returns the canonical scenario name, e.g. `FlatCreditBumpUp` or `RRBumpDn`.
    #[must_use]
    pub fn scenario_name(self, direction: BumpDirection) -> String {
        let stem = match self {
            Self::Credit => "FlatCreditBump",
            Self::InterestRate => "FlatIRBump",
            Self::Recovery => "RRBump",
        };
        format!("{stem}{}", direction.suffix())
    }

    /// Returns the short label used when flattening reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::InterestRate => "IR",
            Self::Recovery => "RR",
        }
    }
}

/// Bump families that are bucketed by tenor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorBump {
    /// Credit curve, one tenor at a time.
    Credit,
    /// Interest rate curve, one tenor at a time.
    InterestRate,
}

impl TenorBump {
    /// All tenor bump families.
    pub const ALL: [TenorBump; 2] = [Self::Credit, Self::InterestRate];

    /// Returns the short label used when flattening reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Credit => "Credit",
            Self::InterestRate => "IR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_scenario_names() {
        assert_eq!(
            FlatBump::Credit.scenario_name(BumpDirection::Up),
            "FlatCreditBumpUp"
        );
        assert_eq!(
            FlatBump::InterestRate.scenario_name(BumpDirection::Down),
            "FlatIRBumpDn"
        );
        assert_eq!(FlatBump::Recovery.scenario_name(BumpDirection::Up), "RRBumpUp");
    }

    #[test]
    fn test_labels() {
        assert_eq!(FlatBump::Recovery.label(), "RR");
        assert_eq!(TenorBump::InterestRate.label(), "IR");
    }
}
