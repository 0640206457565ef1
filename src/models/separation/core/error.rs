use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised when equipment data or operating inputs are invalid.
///
/// Every variant is a local, recoverable failure reported to the immediate
/// caller. Nothing is retried or logged here; the caller decides whether to
/// reject the input, substitute a default, or surface the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The tag number is empty.
    #[error("tag number must not be empty")]
    EmptyTag,

    /// A physical dimension is zero, negative, or not a number.
    #[error("{dimension} must be greater than zero")]
    NonPositiveDimension {
        /// Name of the offending dimension.
        dimension: &'static str,
    },

    /// The rated efficiency lies outside 0–100 %.
    #[error("efficiency must be between 0 % and 100 %")]
    OutOfRangeEfficiency,

    /// An estimator input violates its precondition.
    #[error("invalid {input}")]
    InvalidInput {
        /// Name of the offending input.
        input: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A body proportion is non-positive, or an outlet is not narrower
    /// than the cylinder.
    #[error("{proportion} proportion is out of range")]
    InvalidProportion {
        /// Name of the offending proportion.
        proportion: &'static str,
    },

    /// A value that must be finite is infinite.
    #[error("{value} must be finite")]
    NonFinite {
        /// Name of the offending value.
        value: &'static str,
    },

    /// A review needs operating conditions the descriptor does not carry.
    #[error("descriptor has no operating conditions")]
    MissingOperatingConditions,

    /// A design rating or rated operating value is out of range.
    #[error("invalid {rating}")]
    InvalidRating {
        /// Name of the offending rating.
        rating: &'static str,
        #[source]
        source: ConstraintError,
    },
}
