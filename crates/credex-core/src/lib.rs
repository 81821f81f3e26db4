//! # Credex Core
//!
//! Core types shared by every Credex crate.
//!
//! This crate provides:
//!
//! - **Measure maps**: [`CaseInsensitiveMap`] and its numeric form [`MeasureMap`],
//!   the unit of data passed between valuation and aggregation
//! - **Aggregation policies**: [`AggregationPolicy`] and [`PolicyTable`], which
//!   decide how a basket combines a measure across its components
//! - **Bump families**: [`FlatBump`], [`TenorBump`] and [`BumpDirection`], with the
//!   canonical scenario names understood by scenario providers
//!
//! ## Example
//!
//! ```rust
//! use credex_core::MeasureMap;
//!
//! let mut values = MeasureMap::new();
//! values.insert("PV", 101.25);
//!
//! assert_eq!(values.value_or_zero("pv"), 101.25);
//! assert_eq!(values.value_or_zero("DV01"), 0.0);
//! assert!(values.measure("DV01").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod measure_map;
pub mod policy;
pub mod scenario;

pub use error::{CoreError, CoreResult};
pub use measure_map::{CaseInsensitiveMap, MeasureMap};
pub use policy::{AggregationPolicy, PolicyTable};
pub use scenario::{BumpDirection, FlatBump, TenorBump, BASE_SCENARIO, CALC_TIME_MEASURE};
