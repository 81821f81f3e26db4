//! The measures report produced for an instrument or basket.

use credex_core::{CaseInsensitiveMap, FlatBump, MeasureMap, TenorBump, CALC_TIME_MEASURE};
use serde::{Deserialize, Serialize};

use crate::component::ComponentTenorDeltaGamma;
use crate::differencer::DeltaGamma;
use crate::tenor::TenorDeltaGamma;

/// Base values plus every sensitivity that could be computed.
///
/// Only `base` and `calc_time_seconds` are guaranteed. A family whose
/// scenarios were missing, failed to value, or were disabled is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasuresReport {
    /// Measures under the base scenario.
    pub base: MeasureMap,

    /// Flat credit bump delta/gamma.
    pub flat_credit: Option<DeltaGamma>,

    /// Flat interest rate bump delta/gamma.
    pub flat_ir: Option<DeltaGamma>,

    /// Flat recovery bump delta/gamma.
    pub flat_recovery: Option<DeltaGamma>,

    /// Credit delta/gamma per tenor bucket.
    pub tenor_credit: Option<TenorDeltaGamma>,

    /// Interest rate delta/gamma per tenor bucket.
    pub tenor_ir: Option<TenorDeltaGamma>,

    /// Basket only: credit delta/gamma per component and tenor bucket.
    pub component_tenor_credit: Option<ComponentTenorDeltaGamma>,

    /// Wall-clock seconds spent producing the report.
    pub calc_time_seconds: f64,
}

impl MeasuresReport {
    /// Creates a report holding only base values.
    #[must_use]
    pub fn new(base: MeasureMap) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Returns the flat result for a bump family.
    #[must_use]
    pub fn flat(&self, bump: FlatBump) -> Option<&DeltaGamma> {
        match bump {
            FlatBump::Credit => self.flat_credit.as_ref(),
            FlatBump::InterestRate => self.flat_ir.as_ref(),
            FlatBump::Recovery => self.flat_recovery.as_ref(),
        }
    }

    /// Returns the tenor result for a bump family.
    #[must_use]
    pub fn tenor(&self, bump: TenorBump) -> Option<&TenorDeltaGamma> {
        match bump {
            TenorBump::Credit => self.tenor_credit.as_ref(),
            TenorBump::InterestRate => self.tenor_ir.as_ref(),
        }
    }

    pub(crate) fn set_flat(&mut self, bump: FlatBump, result: Option<DeltaGamma>) {
        match bump {
            FlatBump::Credit => self.flat_credit = result,
            FlatBump::InterestRate => self.flat_ir = result,
            FlatBump::Recovery => self.flat_recovery = result,
        }
    }

    pub(crate) fn set_tenor(&mut self, bump: TenorBump, result: Option<TenorDeltaGamma>) {
        match bump {
            TenorBump::Credit => self.tenor_credit = result,
            TenorBump::InterestRate => self.tenor_ir = result,
        }
    }

    /// Flattens the report into a single measure map.
    ///
    /// Base measures keep their names. Sensitivities are namespaced:
    ///
    /// ```text
    /// FlatCreditDelta[PV]
    /// TenorIRGamma[5Y][PV]
    /// ComponentTenorCreditDelta[ACME][5Y][PV]
    /// CalcTime
    /// ```
    #[must_use]
    pub fn to_flat_map(&self) -> MeasureMap {
        let mut flat = self.base.clone();

        for bump in FlatBump::ALL {
            if let Some(result) = self.flat(bump) {
                let prefix = format!("Flat{}", bump.label());
                push_delta_gamma(&mut flat, &prefix, result);
            }
        }

        for bump in TenorBump::ALL {
            if let Some(result) = self.tenor(bump) {
                let prefix = format!("Tenor{}", bump.label());
                push_tenor(&mut flat, &format!("{prefix}Delta"), &result.delta);
                push_tenor(&mut flat, &format!("{prefix}Gamma"), &result.gamma);
            }
        }

        if let Some(result) = &self.component_tenor_credit {
            for (label, by_component) in [("Delta", &result.delta), ("Gamma", &result.gamma)] {
                for (component, by_tenor) in by_component.iter() {
                    let prefix = format!("ComponentTenorCredit{label}[{component}]");
                    push_tenor(&mut flat, &prefix, by_tenor);
                }
            }
        }

        flat.insert(CALC_TIME_MEASURE, self.calc_time_seconds);
        flat
    }
}

fn push_delta_gamma(flat: &mut MeasureMap, prefix: &str, result: &DeltaGamma) {
    for (label, values) in [("Delta", &result.delta), ("Gamma", &result.gamma)] {
        if let Some(values) = values {
            for (measure, value) in values.iter() {
                flat.insert(format!("{prefix}{label}[{measure}]"), *value);
            }
        }
    }
}

fn push_tenor(flat: &mut MeasureMap, prefix: &str, by_tenor: &CaseInsensitiveMap<MeasureMap>) {
    for (tenor, values) in by_tenor.iter() {
        for (measure, value) in values.iter() {
            flat.insert(format!("{prefix}[{tenor}][{measure}]"), *value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pv(value: f64) -> MeasureMap {
        [("PV", value)].into_iter().collect()
    }

    #[test]
    fn test_flat_map_keys() {
        let mut report = MeasuresReport::new(pv(100.0));
        report.flat_credit = Some(DeltaGamma {
            delta: Some(pv(-1.0)),
            gamma: Some(pv(0.02)),
        });
        report.tenor_ir = Some(TenorDeltaGamma {
            delta: [("5Y", pv(-0.4))].into_iter().collect(),
            gamma: CaseInsensitiveMap::new(),
        });
        let mut component = ComponentTenorDeltaGamma::default();
        component
            .delta
            .insert("ACME", [("5Y", pv(-0.3))].into_iter().collect());
        report.component_tenor_credit = Some(component);
        report.calc_time_seconds = 0.25;

        let flat = report.to_flat_map();

        assert_eq!(flat.value_or_zero("PV"), 100.0);
        assert_eq!(flat.value_or_zero("FlatCreditDelta[PV]"), -1.0);
        assert_eq!(flat.value_or_zero("FlatCreditGamma[PV]"), 0.02);
        assert_eq!(flat.value_or_zero("TenorIRDelta[5Y][PV]"), -0.4);
        assert_eq!(flat.value_or_zero("ComponentTenorCreditDelta[ACME][5Y][PV]"), -0.3);
        assert_eq!(flat.value_or_zero(CALC_TIME_MEASURE), 0.25);
        assert_eq!(flat.len(), 6);
    }

    #[test]
    fn test_accessors() {
        let mut report = MeasuresReport::new(pv(1.0));
        report.set_flat(FlatBump::Recovery, Some(DeltaGamma::default()));
        report.set_tenor(TenorBump::Credit, Some(TenorDeltaGamma::default()));

        assert!(report.flat(FlatBump::Recovery).is_some());
        assert!(report.flat(FlatBump::Credit).is_none());
        assert!(report.tenor(TenorBump::Credit).is_some());
        assert!(report.tenor(TenorBump::InterestRate).is_none());
    }

    #[test]
    fn test_serde_roundtrip_shape() {
        let report = MeasuresReport::new(pv(100.0));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["base"]["PV"], 100.0);
        assert!(json["flat_credit"].is_null());
    }
}
