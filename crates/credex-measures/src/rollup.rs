//! Basket value roll-up across components.
//!
//! Combines each component's base-case measure map into one basket map. Every
//! (component, measure) pair is dispatched on the measure's
//! [`AggregationPolicy`]:
//!
//! | Policy                | Basket entry                                   |
//! |-----------------------|------------------------------------------------|
//! | `Cumulative`          | `Σ value_i[k]`                                 |
//! | `WeightedCumulative`  | `Σ w_i × value_i[k]`, skipped without weights  |
//! | `UnitAccumulate`      | `Component_i[k] = value_i[k]`, one per component |
//! | `Ignore`              | dropped                                        |
//!
//! [`rollup`] always appends a `CalcTime` entry with the elapsed seconds.
//! [`rollup_values`] does not; scenario valuation goes through it so timing
//! never reaches a delta or gamma.

use std::time::Instant;

use credex_core::{AggregationPolicy, MeasureMap, CALC_TIME_MEASURE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::weights::component_weights;

/// One component's base-case values, as fed to the roll-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentValues {
    /// Component name, used to namespace `UnitAccumulate` measures.
    pub name: String,

    /// Initial notional, used to derive the component weight.
    pub initial_notional: f64,

    /// Component measures.
    pub values: MeasureMap,
}

impl ComponentValues {
    /// Creates component values.
    #[must_use]
    pub fn new(name: impl Into<String>, initial_notional: f64, values: MeasureMap) -> Self {
        Self {
            name: name.into(),
            initial_notional,
            values,
        }
    }
}

/// Rolls component values up into one basket measure map and stamps `CalcTime`.
///
/// Weights are derived once per call from the components' initial notionals.
/// When the total notional is zero there are no weights and every
/// `WeightedCumulative` measure is left out of the result.
#[must_use]
pub fn rollup<P>(components: &[ComponentValues], policy: P) -> MeasureMap
where
    P: Fn(&str) -> AggregationPolicy,
{
    let start = Instant::now();
    let mut basket = rollup_values(components, policy);
    basket.insert(CALC_TIME_MEASURE, start.elapsed().as_secs_f64());
    basket
}

/// Rolls component values up without a `CalcTime` entry.
///
/// `CalcTime` reported by a component is aggregated under its policy like
/// any other measure.
#[must_use]
pub fn rollup_values<P>(components: &[ComponentValues], policy: P) -> MeasureMap
where
    P: Fn(&str) -> AggregationPolicy,
{
    let notionals: Vec<f64> = components.iter().map(|c| c.initial_notional).collect();
    let weights = component_weights(&notionals);
    if weights.is_none() {
        debug!(
            components = components.len(),
            "Zero total notional, weighted measures skipped"
        );
    }

    let mut basket = MeasureMap::new();

    for (i, component) in components.iter().enumerate() {
        for (measure, value) in component.values.iter() {
            match policy(measure) {
                AggregationPolicy::Cumulative => {
                    *basket.get_or_insert_with(measure, || 0.0) += value;
                }
                AggregationPolicy::WeightedCumulative => {
                    if let Some(weights) = &weights {
                        *basket.get_or_insert_with(measure, || 0.0) += weights[i] * value;
                    }
                }
                AggregationPolicy::UnitAccumulate => {
                    basket.insert(format!("{}[{}]", component.name, measure), *value);
                }
                AggregationPolicy::Ignore => {}
            }
        }
    }

    basket
}
