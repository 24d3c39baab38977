//! Error types raised while configuring priority weights.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when a [`PriorityWeights`](crate::PriorityWeights)
/// configuration cannot keep scores inside `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A weight was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
    },
    /// A weight fell outside `0.0..=1.0`.
    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    OutOfRange {
        /// Name of the offending weight.
        field: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The normal-priority weight exceeded the high-priority weight.
    #[error("normal_weight {normal_weight} must not exceed high_weight {high_weight}")]
    Inverted {
        /// Configured high-priority weight.
        high_weight: f32,
        /// Configured normal-priority weight.
        normal_weight: f32,
    },
}
