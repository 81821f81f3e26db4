//! # Credex Measures
//!
//! Scenario measure aggregation for credit and fixed income instruments.
//!
//! Given a base valuation and a set of named market-parameter bumps, this
//! crate computes first order (delta) and second order (gamma) sensitivities
//! for every priced measure, at instrument scope and at basket scope.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every aggregation is a function of its inputs plus at
//!   most one valuation call per scenario
//! - **One engine, two scopes**: a [`Basket`] is a [`Valuer`](credex_traits::Valuer)
//!   like any instrument, so the same differencer and tenor aggregator serve both
//! - **Absence is not failure**: missing scenarios and failed valuations remove
//!   entries; only a missing base or an explicit measure lookup miss surface
//!
//! ## Pipeline
//!
//! ```text
//! valuation(scenario) -> MeasureMap
//!        │
//!        ├── differencer::diff            delta = up - base, gamma = up + down - 2·base
//!        ├── tenor::aggregate_*           one diff per tenor bucket
//!        ├── component::aggregate_*       one tenor pass per basket component
//!        └── rollup::rollup               component values -> basket values
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use credex_measures::prelude::*;
//!
//! let engine = MeasuresEngine::new(MeasuresConfig::default());
//! let report = engine.basket_measures(&basket, &scenarios).expect("base scenario");
//!
//! let pv = report.base.measure("PV")?;
//! let credit01 = report.flat(FlatBump::Credit).and_then(|r| r.delta.as_ref());
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: fan component-wise aggregation out over rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod basket;
pub mod component;
pub mod config;
pub mod differencer;
pub mod engine;
pub mod error;
pub mod parallel;
pub mod report;
pub mod rollup;
pub mod tenor;
pub mod weights;

pub use basket::Basket;
pub use component::{aggregate_by_component_and_tenor, ComponentTenorDeltaGamma, ComponentTenorMap};
pub use config::MeasuresConfig;
pub use differencer::{diff, diff_scenarios, DeltaGamma};
pub use engine::MeasuresEngine;
pub use error::{MeasuresError, MeasuresResult};
pub use report::MeasuresReport;
pub use rollup::{rollup, rollup_values, ComponentValues};
pub use tenor::{
    aggregate_by_tenor, aggregate_tenor_scenarios, aggregate_tenor_scenarios_with_curve,
    CurveSubstitution, TenorDeltaGamma,
};
pub use weights::component_weights;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Basket, ComponentTenorDeltaGamma, ComponentValues, DeltaGamma, MeasuresConfig,
        MeasuresEngine, MeasuresError, MeasuresReport, MeasuresResult, TenorDeltaGamma,
    };
    pub use credex_core::{
        AggregationPolicy, BumpDirection, CaseInsensitiveMap, FlatBump, MeasureMap, PolicyTable,
        TenorBump,
    };
    pub use credex_traits::{
        BasketComponent, CreditCurveStore, ScenarioCell, ScenarioSource, TenorScenarios,
        ValuationError, Valuer,
    };
}
