//! Valuation collaborators.

use credex_core::MeasureMap;

use crate::error::ValuationError;

/// Prices an instrument under one scenario input.
///
/// An empty map and an `Err` both mean "not computable" to the measure engine.
///
/// Closures of the form `Fn(&S) -> Result<MeasureMap, ValuationError>` are valuers:
///
/// ```rust
/// use credex_core::MeasureMap;
/// use credex_traits::{ValuationError, Valuer};
///
/// let pv = |spread: &f64| -> Result<MeasureMap, ValuationError> {
///     Ok([("PV", 100.0 - *spread)].into_iter().collect())
/// };
/// assert_eq!(pv.value(&2.0).unwrap().value_or_zero("PV"), 98.0);
/// ```
pub trait Valuer<S: ?Sized> {
    /// Values the instrument under `input`.
    fn value(&self, input: &S) -> Result<MeasureMap, ValuationError>;
}

impl<S: ?Sized, F> Valuer<S> for F
where
    F: Fn(&S) -> Result<MeasureMap, ValuationError>,
{
    fn value(&self, input: &S) -> Result<MeasureMap, ValuationError> {
        self(input)
    }
}

/// One named, notional-carrying component of a basket.
///
/// A basket values its components through their [`Valuer`] impls; this trait
/// supplies what the roll-up needs on top of that.
pub trait BasketComponent {
    /// The component name; also the label of its credit curve.
    fn name(&self) -> &str;

    /// Initial notional, used only to derive basket weights.
    fn initial_notional(&self) -> f64;
}
