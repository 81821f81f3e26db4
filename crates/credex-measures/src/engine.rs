//! Report assembly for instruments and baskets.
//!
//! [`MeasuresEngine`] drives the differencer and the aggregators over the
//! scenarios a [`ScenarioSource`] provides. The same code serves both scopes:
//! a basket is just a [`Valuer`] whose values come from a roll-up, plus the
//! component-wise tenor pass.

use std::time::Instant;

use credex_core::{BumpDirection, FlatBump, MeasureMap, TenorBump};
use credex_traits::{BasketComponent, CreditCurveStore, ScenarioSource, Valuer};
use tracing::{debug, info};

use crate::basket::Basket;
use crate::component::{aggregate_by_component_and_tenor, ComponentTenorDeltaGamma};
use crate::config::MeasuresConfig;
use crate::differencer::{diff, diff_scenarios, evaluate, DeltaGamma};
use crate::error::MeasuresResult;
use crate::report::MeasuresReport;
use crate::tenor::{aggregate_tenor_scenarios, TenorDeltaGamma};

/// Computes measures reports from a valuer and its scenarios.
#[derive(Debug, Clone, Default)]
pub struct MeasuresEngine {
    config: MeasuresConfig,
}

impl MeasuresEngine {
    /// Creates an engine with the given configuration.
    #[must_use]
    pub fn new(config: MeasuresConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &MeasuresConfig {
        &self.config
    }

    /// Computes base values plus flat and tenor sensitivities for one instrument.
    ///
    /// Returns `None` if the base scenario is missing or cannot be valued.
    /// Every other missing scenario only removes its own entry.
    pub fn instrument_measures<X, V>(&self, valuer: &V, scenarios: &X) -> Option<MeasuresReport>
    where
        X: ScenarioSource,
        V: Valuer<X::Input> + ?Sized,
    {
        let start = Instant::now();
        let mut report = self.base_report(valuer, scenarios)?;

        report.calc_time_seconds = start.elapsed().as_secs_f64();
        info!(
            seconds = report.calc_time_seconds,
            measures = report.base.len(),
            "Instrument measures computed"
        );
        Some(report)
    }

    /// Computes the instrument report for a basket plus component-wise tenor
    /// credit sensitivities.
    ///
    /// Returns `None` if the base scenario is missing or cannot be valued.
    pub fn basket_measures<X, C>(&self, basket: &Basket<C>, scenarios: &X) -> Option<MeasuresReport>
    where
        X: ScenarioSource,
        X::Input: CreditCurveStore + Send + Sync,
        C: BasketComponent + Valuer<X::Input> + Sync,
    {
        let start = Instant::now();
        let mut report = self.base_report(basket, scenarios)?;

        if self.config.calc_component_tenor {
            report.component_tenor_credit = self.component_tenor(basket, &report.base, scenarios);
        }

        report.calc_time_seconds = start.elapsed().as_secs_f64();
        info!(
            seconds = report.calc_time_seconds,
            components = basket.components().len(),
            "Basket measures computed"
        );
        Some(report)
    }

    /// Values a named scenario and returns its delta against base.
    ///
    /// `base_override` replaces the base valuation when supplied. Returns
    /// `None` if no base is available or the scenario is missing or cannot be
    /// valued. Gamma is never computed here.
    pub fn custom_scenario_measures<X, V>(
        &self,
        valuer: &V,
        scenarios: &X,
        scenario: &str,
        base_override: Option<&MeasureMap>,
    ) -> Option<MeasureMap>
    where
        X: ScenarioSource,
        V: Valuer<X::Input> + ?Sized,
    {
        let computed_base;
        let base = match base_override {
            Some(base) => base,
            None => {
                computed_base = evaluate(valuer, scenarios.base()?, "Base")?;
                &computed_base
            }
        };

        let Some(input) = scenarios.scenario(scenario) else {
            debug!(scenario, "Custom scenario not available");
            return None;
        };
        let values = evaluate(valuer, input, scenario)?;

        diff(base, Some(&values), None).delta
    }

    /// Values the base scenario and returns one named measure.
    ///
    /// Returns `Ok(None)` if the base scenario is missing or cannot be valued.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MeasureNotFound`](credex_core::CoreError::MeasureNotFound)
    /// if the base valuation does not contain `measure`.
    pub fn measure_value<X, V>(
        &self,
        valuer: &V,
        scenarios: &X,
        measure: &str,
    ) -> MeasuresResult<Option<f64>>
    where
        X: ScenarioSource,
        V: Valuer<X::Input> + ?Sized,
    {
        let Some(base) = scenarios.base().and_then(|input| evaluate(valuer, input, "Base")) else {
            return Ok(None);
        };
        Ok(Some(base.measure(measure)?))
    }

    fn base_report<X, V>(&self, valuer: &V, scenarios: &X) -> Option<MeasuresReport>
    where
        X: ScenarioSource,
        V: Valuer<X::Input> + ?Sized,
    {
        let Some(base_input) = scenarios.base() else {
            debug!("Base scenario not available, no measures computed");
            return None;
        };
        let base = evaluate(valuer, base_input, "Base")?;
        let mut report = MeasuresReport::new(base);

        for bump in FlatBump::ALL {
            if self.config.flat_enabled(bump) {
                let result = self.flat(valuer, &report.base, scenarios, bump);
                report.set_flat(bump, result);
            }
        }

        for bump in TenorBump::ALL {
            if self.config.tenor_enabled(bump) {
                let result = self.tenor(valuer, &report.base, scenarios, bump);
                report.set_tenor(bump, result);
            }
        }

        Some(report)
    }

    fn flat<X, V>(
        &self,
        valuer: &V,
        base: &MeasureMap,
        scenarios: &X,
        bump: FlatBump,
    ) -> Option<DeltaGamma>
    where
        X: ScenarioSource,
        V: Valuer<X::Input> + ?Sized,
    {
        let up = scenarios.flat(bump, BumpDirection::Up);
        let down = self
            .config
            .calc_gamma
            .then(|| scenarios.flat(bump, BumpDirection::Down))
            .flatten();

        let result = diff_scenarios(valuer, base, up, down);
        if result.is_empty() {
            debug!(bump = bump.label(), "Flat bump not available");
            return None;
        }
        Some(result)
    }

    fn tenor<X, V>(
        &self,
        valuer: &V,
        base: &MeasureMap,
        scenarios: &X,
        bump: TenorBump,
    ) -> Option<TenorDeltaGamma>
    where
        X: ScenarioSource,
        V: Valuer<X::Input> + ?Sized,
    {
        let Some(up) = scenarios.tenor(bump, BumpDirection::Up) else {
            debug!(bump = bump.label(), "Tenor bump scenarios not available");
            return None;
        };
        let down = self
            .config
            .calc_gamma
            .then(|| scenarios.tenor(bump, BumpDirection::Down))
            .flatten();

        let result = aggregate_tenor_scenarios(valuer, base, up, down);
        (!result.is_empty()).then_some(result)
    }

    fn component_tenor<X, C>(
        &self,
        basket: &Basket<C>,
        base: &MeasureMap,
        scenarios: &X,
    ) -> Option<ComponentTenorDeltaGamma>
    where
        X: ScenarioSource,
        X::Input: CreditCurveStore + Send + Sync,
        C: BasketComponent + Valuer<X::Input> + Sync,
    {
        let components = scenarios.component_scenarios()?;
        let up = scenarios.tenor(TenorBump::Credit, BumpDirection::Up)?;
        let down = self
            .config
            .calc_gamma
            .then(|| scenarios.tenor(TenorBump::Credit, BumpDirection::Down))
            .flatten();

        let result =
            aggregate_by_component_and_tenor(basket, base, components, up, down, &self.config);
        (!result.is_empty()).then_some(result)
    }
}
