//! Credit curve storage and scoped curve substitution.
//!
//! Isolating one component's contribution to a basket means pricing the basket
//! with that component's curve installed into every tenor-bumped scenario.
//! [`CurveSwap`] installs the curve and puts the original back when dropped,
//! so the scenario input is restored on every exit path, failures included.

/// A scenario input that owns credit curves keyed by component label.
pub trait CreditCurveStore {
    /// The curve type.
    type Curve: Clone;

    /// Returns a copy of the curve for `component`, if any.
    fn credit_curve(&self, component: &str) -> Option<Self::Curve>;

    /// Replaces the curve for `component` and returns the previous one.
    ///
    /// `None` removes the curve.
    fn set_credit_curve(
        &mut self,
        component: &str,
        curve: Option<Self::Curve>,
    ) -> Option<Self::Curve>;
}

/// A curve installed into a scenario input for the lifetime of the guard.
pub struct CurveSwap<'a, S: CreditCurveStore> {
    input: &'a mut S,
    component: String,
    original: Option<S::Curve>,
}

impl<'a, S: CreditCurveStore> CurveSwap<'a, S> {
    /// Installs `curve` for `component`, remembering what it replaced.
    pub fn install(input: &'a mut S, component: &str, curve: S::Curve) -> Self {
        let original = input.set_credit_curve(component, Some(curve));
        Self {
            input,
            component: component.to_string(),
            original,
        }
    }

    /// The scenario input with the substituted curve in place.
    #[must_use]
    pub fn input(&self) -> &S {
        self.input
    }
}

impl<S: CreditCurveStore> Drop for CurveSwap<'_, S> {
    fn drop(&mut self) {
        let original = self.original.take();
        self.input.set_credit_curve(&self.component, original);
    }
}
