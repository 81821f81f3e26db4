//! Locked scenario inputs.

use parking_lot::{Mutex, MutexGuard};

use crate::curve::{CreditCurveStore, CurveSwap};

/// A scenario input shared between aggregation passes.
///
/// Curve substitution mutates the input in place, so every access goes
/// through a lock. The lock is held from the swap until the original curve is
/// restored; concurrent passes over the same cell are serialized.
#[derive(Debug, Default)]
pub struct ScenarioCell<S> {
    inner: Mutex<S>,
}

impl<S> ScenarioCell<S> {
    /// Wraps a scenario input.
    pub fn new(input: S) -> Self {
        Self {
            inner: Mutex::new(input),
        }
    }

    /// Runs `f` against the input while holding the lock.
    pub fn with_input<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let guard = self.inner.lock();
        f(&guard)
    }

    /// Acquires the lock directly.
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.inner.lock()
    }

    /// Consumes the cell, returning the input.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S: CreditCurveStore> ScenarioCell<S> {
    /// Runs `f` with `curve` installed for `component`.
    ///
    /// The original curve is back in place before the lock is released,
    /// whatever `f` returns.
    pub fn with_credit_curve<R>(
        &self,
        component: &str,
        curve: S::Curve,
        f: impl FnOnce(&S) -> R,
    ) -> R {
        let mut guard = self.inner.lock();
        let swap = CurveSwap::install(&mut *guard, component, curve);
        f(swap.input())
    }
}

impl<S> From<S> for ScenarioCell<S> {
    fn from(input: S) -> Self {
        Self::new(input)
    }
}
