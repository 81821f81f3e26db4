//! # Credex Traits
//!
//! Trait definitions for the collaborators the measure engine consumes.
//!
//! The engine never prices anything itself. Pricing, scenario construction and
//! curve storage are injected through these traits:
//!
//! - [`valuation`]: [`Valuer`] prices one scenario input into a [`MeasureMap`](credex_core::MeasureMap);
//!   and [`BasketComponent`] adds the name and notional a basket needs
//! - [`scenario`]: [`ScenarioSource`] resolves named and tenor-bucketed scenarios
//! - [`curve`]: [`CreditCurveStore`] and the scoped [`CurveSwap`] used for
//!   component curve substitution
//! - [`cell`]: [`ScenarioCell`], the lock that serializes substitutions on a
//!   shared scenario input

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cell;
pub mod curve;
pub mod error;
pub mod scenario;
pub mod valuation;

pub use cell::ScenarioCell;
pub use curve::{CreditCurveStore, CurveSwap};
pub use error::ValuationError;
pub use scenario::{ScenarioSource, TenorScenarios};
pub use valuation::{BasketComponent, Valuer};
