//! Component-wise tenor aggregation for baskets.
//!
//! For each basket component, the component's own credit curve is installed
//! into every tenor-bumped basket scenario and the basket revalued, isolating
//! the basket's tenor sensitivity to that one name.

use credex_core::{CaseInsensitiveMap, MeasureMap};
use credex_traits::{CreditCurveStore, TenorScenarios, Valuer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MeasuresConfig;
use crate::parallel::maybe_parallel_filter_map;
use crate::tenor::{aggregate_tenor_scenarios_with_curve, CurveSubstitution, TenorDeltaGamma};

/// Component name to tenor label to measure name to value.
pub type ComponentTenorMap = CaseInsensitiveMap<CaseInsensitiveMap<MeasureMap>>;

/// Delta and gamma keyed by component, then tenor, then measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentTenorDeltaGamma {
    /// Component to tenor to delta measures.
    pub delta: ComponentTenorMap,

    /// Component to tenor to gamma measures.
    pub gamma: ComponentTenorMap,
}

impl ComponentTenorDeltaGamma {
    /// Returns true if no component produced a result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty() && self.gamma.is_empty()
    }

    /// Returns the tenor results for one component.
    #[must_use]
    pub fn component(&self, name: &str) -> Option<TenorDeltaGamma> {
        let delta = self.delta.get(name);
        let gamma = self.gamma.get(name);
        if delta.is_none() && gamma.is_none() {
            return None;
        }
        Some(TenorDeltaGamma {
            delta: delta.cloned().unwrap_or_default(),
            gamma: gamma.cloned().unwrap_or_default(),
        })
    }
}

/// Runs tenor aggregation once per component, with that component's curve
/// substituted into every bucket.
///
/// `components` maps each component name to the scenario input holding its
/// curve. A component whose curve cannot be found, or whose tenor aggregation
/// yields nothing, is omitted without affecting the others.
///
/// Components fan out over rayon when `config` allows it. Every tenor bucket
/// is a [`ScenarioCell`](credex_traits::ScenarioCell), so substitutions into
/// the same bucket from different components are serialized.
pub fn aggregate_by_component_and_tenor<S, V>(
    valuer: &V,
    base: &MeasureMap,
    components: &CaseInsensitiveMap<S>,
    up: &TenorScenarios<S>,
    down: Option<&TenorScenarios<S>>,
    config: &MeasuresConfig,
) -> ComponentTenorDeltaGamma
where
    S: CreditCurveStore + Send + Sync,
    V: Valuer<S> + Sync + ?Sized,
{
    let entries: Vec<(&str, &S)> = components.iter().collect();

    let per_component = maybe_parallel_filter_map(&entries, config, |(name, input)| {
        let Some(curve) = input.credit_curve(name) else {
            debug!(component = *name, "No credit curve for component, skipped");
            return None;
        };

        let substitution = CurveSubstitution {
            component: name,
            curve,
        };
        let result = aggregate_tenor_scenarios_with_curve(valuer, base, up, down, &substitution);

        if result.is_empty() {
            debug!(component = *name, "No tenor results for component");
            None
        } else {
            Some((name.to_string(), result))
        }
    });

    let mut aggregated = ComponentTenorDeltaGamma::default();
    for (name, result) in per_component {
        if !result.delta.is_empty() {
            aggregated.delta.insert(name.as_str(), result.delta);
        }
        if !result.gamma.is_empty() {
            aggregated.gamma.insert(name, result.gamma);
        }
    }
    aggregated
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use credex_traits::{ScenarioCell, ValuationError};

    /// Hazard rate per name; the valuer prices a two-name basket as
    /// `-100 * (h_A + h_B)`.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Hazards(CaseInsensitiveMap<f64>);

    impl CreditCurveStore for Hazards {
        type Curve = f64;

        fn credit_curve(&self, component: &str) -> Option<f64> {
            self.0.get(component).copied()
        }

        fn set_credit_curve(&mut self, component: &str, curve: Option<f64>) -> Option<f64> {
            match curve {
                Some(h) => self.0.insert(component, h),
                None => self.0.remove(component),
            }
        }
    }

    fn hazards(entries: &[(&str, f64)]) -> Hazards {
        Hazards(entries.iter().map(|(k, v)| (*k, *v)).collect())
    }

    fn basket_pv(input: &Hazards) -> Result<MeasureMap, ValuationError> {
        let total: f64 = input.0.values().sum();
        Ok([("PV", -100.0 * total)].into_iter().collect())
    }

    #[test]
    fn test_component_curve_isolates_sensitivity() {
        let base: MeasureMap = [("PV", -3.0)].into_iter().collect();

        // Bucket inputs start from the unbumped curves.
        let up: TenorScenarios<Hazards> = [
            ("1Y", ScenarioCell::new(hazards(&[("A", 0.01), ("B", 0.02)]))),
            ("5Y", ScenarioCell::new(hazards(&[("A", 0.01), ("B", 0.02)]))),
        ]
        .into_iter()
        .collect();

        // Each component's scenario input holds its bumped curve.
        let components: CaseInsensitiveMap<Hazards> = [
            ("A", hazards(&[("A", 0.011)])),
            ("B", hazards(&[("B", 0.025)])),
        ]
        .into_iter()
        .collect();

        let result = aggregate_by_component_and_tenor(
            &basket_pv,
            &base,
            &components,
            &up,
            None,
            &MeasuresConfig::sequential(),
        );

        let a = result.component("a").unwrap();
        assert_relative_eq!(a.delta.get("5Y").unwrap().value_or_zero("PV"), -0.1, epsilon = 1e-9);
        let b = result.component("B").unwrap();
        assert_relative_eq!(b.delta.get("1Y").unwrap().value_or_zero("PV"), -0.5, epsilon = 1e-9);
        assert!(result.gamma.is_empty());

        // Buckets are back to their original curves.
        for (_, cell) in up.iter() {
            assert_eq!(
                cell.with_input(|h| h.clone()),
                hazards(&[("A", 0.01), ("B", 0.02)])
            );
        }
    }

    #[test]
    fn test_component_without_curve_omitted() {
        let base: MeasureMap = [("PV", 0.0)].into_iter().collect();
        let up: TenorScenarios<Hazards> = [("1Y", ScenarioCell::new(hazards(&[("A", 0.01)])))]
            .into_iter()
            .collect();
        let components: CaseInsensitiveMap<Hazards> =
            [("A", hazards(&[("A", 0.02)])), ("C", Hazards::default())]
                .into_iter()
                .collect();

        let result = aggregate_by_component_and_tenor(
            &basket_pv,
            &base,
            &components,
            &up,
            None,
            &MeasuresConfig::sequential(),
        );

        assert!(result.component("A").is_some());
        assert!(result.component("C").is_none());
    }
}
