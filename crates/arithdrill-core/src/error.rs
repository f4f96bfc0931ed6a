//! Validation error types.
//!
//! These errors are reported synchronously before any question is
//! generated. Generation itself never fails once settings are valid.

use thiserror::Error;

/// Reasons a [`GenerationSettings`](crate::model::GenerationSettings) value
/// cannot be used to generate a question set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Every per-category count is zero.
    #[error("at least one question must be requested")]
    NoQuestions,

    /// The numeric range is empty or reversed.
    #[error("minimum ({min}) must be less than maximum ({max})")]
    InvalidRange { min: i64, max: i64 },

    /// The range starts below zero.
    #[error("minimum ({min}) must not be negative")]
    NegativeRange { min: i64 },

    /// The range ends above the supported operand size.
    #[error("maximum ({max}) must not exceed {limit}")]
    RangeTooLarge { max: i64, limit: i64 },

    /// Decimal mode was requested with an unsupported precision.
    #[error("decimal places must be 1 or 2, got {0}")]
    DecimalPlaces(u32),
}

impl ValidationError {
    /// Returns `true` if the error is about the numeric range rather than
    /// the requested counts or precision.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidRange { .. }
                | ValidationError::NegativeRange { .. }
                | ValidationError::RangeTooLarge { .. }
        )
    }
}
