//! Basket component weights.

/// Normalizes component notionals into weights.
///
/// ```text
/// w_i = N_i / Σ N_j
/// ```
///
/// Returns `None` when the total notional is exactly zero; weighted measures
/// are then skipped rather than divided by zero.
#[must_use]
pub fn component_weights(notionals: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = notionals.iter().sum();
    if total == 0.0 {
        return None;
    }
    Some(notionals.iter().map(|n| n / total).collect())
}
