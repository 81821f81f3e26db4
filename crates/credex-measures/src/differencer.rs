//! Flat scenario differencing: delta and gamma from base, up and down values.
//!
//! ## Formulas
//!
//! ```text
//! delta[k] = up[k] - base[k]                 for every k in up
//! gamma[k] = up[k] + down[k] - 2 * base[k]   for every k in down
//! ```
//!
//! An entry missing from any map counts as 0.0. Keys only present in `base`
//! produce nothing: sensitivities are reported for the measures the bumped
//! valuation actually produced. `CalcTime` is skipped everywhere.

use credex_core::{MeasureMap, CALC_TIME_MEASURE};
use credex_traits::Valuer;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// First and second order sensitivities for one scenario pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaGamma {
    /// `up - base`, absent when no up valuation was available.
    pub delta: Option<MeasureMap>,

    /// `up + down - 2 * base`, absent when no down valuation was available.
    pub gamma: Option<MeasureMap>,
}

impl DeltaGamma {
    /// Returns true if neither delta nor gamma is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delta.is_none() && self.gamma.is_none()
    }
}

/// Differences precomputed base, up and down measure maps.
///
/// An absent or empty `up` yields an empty result. An absent or empty `down`
/// yields delta only. `CalcTime` is timing, not a measure, and is never
/// differenced.
#[must_use]
pub fn diff(base: &MeasureMap, up: Option<&MeasureMap>, down: Option<&MeasureMap>) -> DeltaGamma {
    let Some(up) = up else {
        return DeltaGamma::default();
    };

    let delta: MeasureMap = measures(up)
        .map(|(k, u)| (k, u - base.value_or_zero(k)))
        .collect();
    if delta.is_empty() {
        return DeltaGamma::default();
    }

    let gamma = down
        .map(|down| -> MeasureMap {
            measures(down)
                .map(|(k, d)| (k, up.value_or_zero(k) + d - 2.0 * base.value_or_zero(k)))
                .collect()
        })
        .filter(|gamma| !gamma.is_empty());

    DeltaGamma {
        delta: Some(delta),
        gamma,
    }
}

fn measures(values: &MeasureMap) -> impl Iterator<Item = (&str, &f64)> + '_ {
    values
        .iter()
        .filter(|(k, _)| !k.eq_ignore_ascii_case(CALC_TIME_MEASURE))
}

/// Values the up and down scenario inputs, then differences them against `base`.
///
/// A failed or empty valuation is treated as a missing scenario.
pub fn diff_scenarios<S, V>(
    valuer: &V,
    base: &MeasureMap,
    up: Option<&S>,
    down: Option<&S>,
) -> DeltaGamma
where
    S: ?Sized,
    V: Valuer<S> + ?Sized,
{
    let Some(up_values) = up.and_then(|input| evaluate(valuer, input, "up")) else {
        return DeltaGamma::default();
    };
    let down_values = down.and_then(|input| evaluate(valuer, input, "down"));

    diff(base, Some(&up_values), down_values.as_ref())
}

/// Values one scenario input, mapping failures and empty results to `None`.
pub(crate) fn evaluate<S, V>(valuer: &V, input: &S, scenario: &str) -> Option<MeasureMap>
where
    S: ?Sized,
    V: Valuer<S> + ?Sized,
{
    match valuer.value(input) {
        Ok(values) if values.is_empty() => {
            debug!(scenario, "Valuation returned no measures");
            None
        }
        Ok(values) => Some(values),
        Err(e) => {
            warn!(scenario, error = %e, "Valuation failed, scenario omitted");
            None
        }
    }
}
