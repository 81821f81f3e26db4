//! Error types for core measure operations.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by core measure types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A single named measure was requested but is not present in the map.
    #[error("Measure '{measure}' not found")]
    MeasureNotFound {
        /// The requested measure name.
        measure: String,
    },

    /// A legacy integer policy tag maps to more than one policy.
    #[error("Aggregation policy code {code} is ambiguous: shared by UNIT_ACCUMULATE and IGNORE")]
    AmbiguousPolicyCode {
        /// The ambiguous code.
        code: i32,
    },

    /// A legacy integer policy tag is not recognised.
    #[error("Unknown aggregation policy code: {code}")]
    UnknownPolicyCode {
        /// The unrecognised code.
        code: i32,
    },
}

impl CoreError {
    /// Create a measure not found error.
    #[must_use]
    pub fn measure_not_found(measure: impl Into<String>) -> Self {
        Self::MeasureNotFound {
            measure: measure.into(),
        }
    }
}
