//! Scenario providers.

use credex_core::{BumpDirection, CaseInsensitiveMap, FlatBump, TenorBump, BASE_SCENARIO};

use crate::cell::ScenarioCell;

/// Tenor label to scenario input, one map per bump direction.
pub type TenorScenarios<S> = CaseInsensitiveMap<ScenarioCell<S>>;

/// Resolves the scenario inputs built for one instrument or basket.
///
/// Only [`scenario`](ScenarioSource::scenario) and
/// [`tenor`](ScenarioSource::tenor) are required; the other lookups derive
/// from the canonical scenario names.
pub trait ScenarioSource {
    /// The market parameter set understood by the valuer.
    type Input;

    /// Looks up a scenario by name (`"Base"`, `"FlatCreditBumpUp"`, custom names).
    fn scenario(&self, name: &str) -> Option<&Self::Input>;

    /// Looks up the tenor-bucketed scenarios for one family and direction.
    fn tenor(
        &self,
        bump: TenorBump,
        direction: BumpDirection,
    ) -> Option<&TenorScenarios<Self::Input>>;

    /// Component name to the scenario input holding that component's curve.
    fn component_scenarios(&self) -> Option<&CaseInsensitiveMap<Self::Input>> {
        None
    }

    /// The unbumped scenario.
    fn base(&self) -> Option<&Self::Input> {
        self.scenario(BASE_SCENARIO)
    }

    /// A flat bump scenario.
    fn flat(&self, bump: FlatBump, direction: BumpDirection) -> Option<&Self::Input> {
        self.scenario(&bump.scenario_name(direction))
    }
}
