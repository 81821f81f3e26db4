//! Error type for valuation collaborators.

use thiserror::Error;

/// Failure reported by a valuation collaborator.
///
/// The measure engine treats every variant as "no result for this scenario".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValuationError {
    /// The instrument cannot be valued under this scenario.
    #[error("not computable: {0}")]
    NotComputable(String),

    /// A required curve is missing from the scenario input.
    #[error("missing curve: {0}")]
    MissingCurve(String),

    /// The pricer did not answer in time.
    #[error("timeout")]
    Timeout,

    /// Any other pricer failure.
    #[error("valuation failed: {0}")]
    Failed(String),
}
