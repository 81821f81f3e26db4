//! Tenor-bucketed scenario aggregation.
//!
//! Applies the flat differencer once per tenor bucket. Buckets are processed
//! independently: each reads only its own up and down inputs, so the result
//! does not depend on processing order.

use credex_core::{CaseInsensitiveMap, MeasureMap};
use credex_traits::{CreditCurveStore, ScenarioCell, TenorScenarios, Valuer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::differencer::{diff, evaluate, DeltaGamma};

/// Delta and gamma measure maps keyed by tenor label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenorDeltaGamma {
    /// Tenor label to delta measures.
    pub delta: CaseInsensitiveMap<MeasureMap>,

    /// Tenor label to gamma measures. Tenors without a down valuation are absent.
    pub gamma: CaseInsensitiveMap<MeasureMap>,
}

impl TenorDeltaGamma {
    /// Returns true if no tenor produced a result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delta.is_empty() && self.gamma.is_empty()
    }

    /// Returns the delta and gamma for a single tenor.
    #[must_use]
    pub fn at_tenor(&self, tenor: &str) -> DeltaGamma {
        DeltaGamma {
            delta: self.delta.get(tenor).cloned(),
            gamma: self.gamma.get(tenor).cloned(),
        }
    }

    fn record(&mut self, tenor: &str, result: DeltaGamma) {
        if let Some(delta) = result.delta {
            self.delta.insert(tenor, delta);
        }
        if let Some(gamma) = result.gamma {
            self.gamma.insert(tenor, gamma);
        }
    }
}

/// A component curve to install into every tenor bucket before valuing it.
#[derive(Debug, Clone)]
pub struct CurveSubstitution<'a, C> {
    /// Label of the curve being replaced.
    pub component: &'a str,

    /// The curve to install.
    pub curve: C,
}

/// Aggregates precomputed tenor-bumped measure maps.
///
/// Every tenor in `up` is differenced against `base`, using the matching
/// tenor in `down` (case-insensitive) for gamma when present.
#[must_use]
pub fn aggregate_by_tenor(
    base: &MeasureMap,
    up: &CaseInsensitiveMap<MeasureMap>,
    down: Option<&CaseInsensitiveMap<MeasureMap>>,
) -> TenorDeltaGamma {
    let mut result = TenorDeltaGamma::default();

    for (tenor, up_values) in up.iter() {
        let down_values = down.and_then(|d| d.get(tenor));
        let tenor_result = diff(base, Some(up_values), down_values);
        if tenor_result.delta.is_none() {
            debug!(tenor, "No up valuation for tenor, skipped");
        }
        result.record(tenor, tenor_result);
    }

    result
}

/// Values and aggregates tenor-bumped scenario inputs.
///
/// A tenor whose up valuation fails or is empty contributes no entry; the
/// remaining tenors are still computed.
pub fn aggregate_tenor_scenarios<S, V>(
    valuer: &V,
    base: &MeasureMap,
    up: &TenorScenarios<S>,
    down: Option<&TenorScenarios<S>>,
) -> TenorDeltaGamma
where
    V: Valuer<S> + ?Sized,
{
    aggregate_cells(base, up, down, |tenor, cell| {
        cell.with_input(|input| evaluate(valuer, input, tenor))
    })
}

/// Values and aggregates tenor-bumped scenario inputs with a component curve
/// substituted into every bucket.
///
/// Each bucket is locked, the curve installed, the bucket valued, and the
/// original curve restored before the lock is released, whether or not the
/// valuation succeeded. Nothing leaks from one tenor into the next.
pub fn aggregate_tenor_scenarios_with_curve<S, V>(
    valuer: &V,
    base: &MeasureMap,
    up: &TenorScenarios<S>,
    down: Option<&TenorScenarios<S>>,
    substitution: &CurveSubstitution<'_, S::Curve>,
) -> TenorDeltaGamma
where
    S: CreditCurveStore,
    V: Valuer<S> + ?Sized,
{
    aggregate_cells(base, up, down, |tenor, cell| {
        cell.with_credit_curve(
            substitution.component,
            substitution.curve.clone(),
            |input| evaluate(valuer, input, tenor),
        )
    })
}

fn aggregate_cells<S, F>(
    base: &MeasureMap,
    up: &TenorScenarios<S>,
    down: Option<&TenorScenarios<S>>,
    value_cell: F,
) -> TenorDeltaGamma
where
    F: Fn(&str, &ScenarioCell<S>) -> Option<MeasureMap>,
{
    let mut result = TenorDeltaGamma::default();

    for (tenor, up_cell) in up.iter() {
        let Some(up_values) = value_cell(tenor, up_cell) else {
            debug!(tenor, "No up valuation for tenor, skipped");
            continue;
        };
        let down_values = down
            .and_then(|d| d.get(tenor))
            .and_then(|cell| value_cell(tenor, cell));

        result.record(tenor, diff(base, Some(&up_values), down_values.as_ref()));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use credex_traits::ValuationError;

    fn map(entries: &[(&str, f64)]) -> MeasureMap {
        entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn test_aggregate_by_tenor() {
        let base = map(&[("PV", 100.0)]);
        let up: CaseInsensitiveMap<MeasureMap> = [
            ("1Y", map(&[("PV", 99.9)])),
            ("5Y", map(&[("PV", 99.0)])),
        ]
        .into_iter()
        .collect();
        let down: CaseInsensitiveMap<MeasureMap> =
            [("5y", map(&[("PV", 101.2)]))].into_iter().collect();

        let result = aggregate_by_tenor(&base, &up, Some(&down));

        assert_eq!(result.delta.len(), 2);
        assert_relative_eq!(result.delta.get("1Y").unwrap().value_or_zero("PV"), -0.1, epsilon = 1e-12);
        assert_relative_eq!(result.delta.get("5Y").unwrap().value_or_zero("PV"), -1.0);
        assert_eq!(result.gamma.len(), 1);
        assert_relative_eq!(result.gamma.get("5Y").unwrap().value_or_zero("PV"), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_up_tenor_omitted() {
        let base = map(&[("PV", 100.0)]);
        let up: CaseInsensitiveMap<MeasureMap> = [("1Y", MeasureMap::new()), ("2Y", map(&[("PV", 99.0)]))]
            .into_iter()
            .collect();

        let result = aggregate_by_tenor(&base, &up, None);
        assert!(!result.delta.contains_key("1Y"));
        assert!(result.delta.contains_key("2Y"));
        assert!(result.gamma.is_empty());
    }

    #[test]
    fn test_aggregate_tenor_scenarios_skips_failures() {
        let valuer = |shift: &f64| -> Result<MeasureMap, ValuationError> {
            if shift.is_nan() {
                Err(ValuationError::NotComputable("bad bucket".into()))
            } else {
                Ok(map(&[("PV", 100.0 - shift)]))
            }
        };
        let base = map(&[("PV", 100.0)]);
        let up: TenorScenarios<f64> = [
            ("1Y", ScenarioCell::new(0.5)),
            ("3Y", ScenarioCell::new(f64::NAN)),
        ]
        .into_iter()
        .collect();

        let result = aggregate_tenor_scenarios(&valuer, &base, &up, None);
        assert_eq!(result.delta.len(), 1);
        assert_relative_eq!(result.at_tenor("1y").delta.unwrap().value_or_zero("PV"), -0.5);
        assert!(result.at_tenor("3Y").is_empty());
    }
}
