//! Per-measure aggregation policies for basket roll-up.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::measure_map::CaseInsensitiveMap;

/// How a basket combines one measure across its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregationPolicy {
    /// Plain sum across components; weights are ignored.
    #[default]
    Cumulative,

    /// Notional-weighted sum across components.
    WeightedCumulative,

    /// No merge: one `Component[Measure]` entry per component.
    UnitAccumulate,

    /// Dropped from the basket output.
    Ignore,
}

impl AggregationPolicy {
    /// Returns a human-readable name for the policy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cumulative => "Cumulative",
            Self::WeightedCumulative => "Weighted Cumulative",
            Self::UnitAccumulate => "Unit Accumulate",
            Self::Ignore => "Ignore",
        }
    }

    /// Returns the numeric tag for the policy. Every policy has its own tag.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Cumulative => 1,
            Self::WeightedCumulative => 2,
            Self::UnitAccumulate => 3,
            Self::Ignore => 4,
        }
    }

    /// Decodes an integer tag produced by legacy instrument definitions.
    ///
    /// Legacy definitions tagged both UNIT_ACCUMULATE and IGNORE with `4`, so
    /// that tag cannot be decoded and is rejected instead of guessed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AmbiguousPolicyCode`] for `4` and
    /// [`CoreError::UnknownPolicyCode`] for anything other than `1` or `2`.
    pub fn from_legacy_code(code: i32) -> CoreResult<Self> {
        match code {
            1 => Ok(Self::Cumulative),
            2 => Ok(Self::WeightedCumulative),
            4 => Err(CoreError::AmbiguousPolicyCode { code }),
            _ => Err(CoreError::UnknownPolicyCode { code }),
        }
    }
}

impl std::fmt::Display for AggregationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Measure name to policy table owned by an instrument type.
///
/// Every measure resolves to exactly one policy: an explicit override, or the
/// table default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyTable {
    /// Policy for measures without an override.
    #[serde(default)]
    pub default: AggregationPolicy,

    /// Per-measure overrides.
    #[serde(default)]
    pub overrides: CaseInsensitiveMap<AggregationPolicy>,
}

impl PolicyTable {
    /// Creates a table where every measure uses `default`.
    #[must_use]
    pub fn new(default: AggregationPolicy) -> Self {
        Self {
            default,
            overrides: CaseInsensitiveMap::new(),
        }
    }

    /// Adds an override for one measure.
    #[must_use]
    pub fn with_policy(mut self, measure: impl Into<String>, policy: AggregationPolicy) -> Self {
        self.overrides.insert(measure, policy);
        self
    }

    /// Returns the policy for a measure.
    #[must_use]
    pub fn policy_for(&self, measure: &str) -> AggregationPolicy {
        self.overrides.get(measure).copied().unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_distinct() {
        let codes: HashSet<i32> = [
            AggregationPolicy::Cumulative,
            AggregationPolicy::WeightedCumulative,
            AggregationPolicy::UnitAccumulate,
            AggregationPolicy::Ignore,
        ]
        .iter()
        .map(AggregationPolicy::code)
        .collect();

        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_legacy_codes() {
        assert_eq!(
            AggregationPolicy::from_legacy_code(1),
            Ok(AggregationPolicy::Cumulative)
        );
        assert_eq!(
            AggregationPolicy::from_legacy_code(2),
            Ok(AggregationPolicy::WeightedCumulative)
        );
        assert_eq!(
            AggregationPolicy::from_legacy_code(4),
            Err(CoreError::AmbiguousPolicyCode { code: 4 })
        );
        assert_eq!(
            AggregationPolicy::from_legacy_code(9),
            Err(CoreError::UnknownPolicyCode { code: 9 })
        );
    }

    #[test]
    fn test_policy_table() {
        let table = PolicyTable::new(AggregationPolicy::Cumulative)
            .with_policy("Price", AggregationPolicy::WeightedCumulative)
            .with_policy("CalcTime", AggregationPolicy::Ignore);

        assert_eq!(table.policy_for("PV"), AggregationPolicy::Cumulative);
        assert_eq!(
            table.policy_for("price"),
            AggregationPolicy::WeightedCumulative
        );
        assert_eq!(table.policy_for("CALCTIME"), AggregationPolicy::Ignore);
    }

    #[test]
    fn test_serde() {
        let json = r#"{"default":"CUMULATIVE","overrides":{"Price":"WEIGHTED_CUMULATIVE","Spread":"UNIT_ACCUMULATE"}}"#;
        let table: PolicyTable = serde_json::from_str(json).unwrap();

        assert_eq!(
            table.policy_for("PRICE"),
            AggregationPolicy::WeightedCumulative
        );
        assert_eq!(table.policy_for("spread"), AggregationPolicy::UnitAccumulate);

        let partial: PolicyTable = serde_json::from_str(r#"{"default":"IGNORE"}"#).unwrap();
        assert_eq!(partial.policy_for("PV"), AggregationPolicy::Ignore);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", AggregationPolicy::WeightedCumulative),
            "Weighted Cumulative"
        );
    }
}
