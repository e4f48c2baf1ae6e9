//! Generator error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::types::Category;

/// Errors from a generation run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Invalid date range (start after end).
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange {
        /// First day requested.
        start: NaiveDate,
        /// Last day requested.
        end: NaiveDate,
    },
}

/// Errors from category-profile validation.
///
/// These are static-configuration faults: they surface when a profile
/// set is constructed, never during generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// A weight vector does not sum to 1.0.
    #[error("Weight vector sums to {sum}, expected 1.0")]
    WeightSum {
        /// Actual sum of the vector.
        sum: Decimal,
    },

    /// A weight is finer than basis-point precision or negative.
    #[error("Weight {weight} is not representable in basis points")]
    WeightPrecision {
        /// The offending weight.
        weight: Decimal,
    },

    /// A category amount range is empty, non-positive, or finer than cents.
    #[error("Invalid amount range for {category}: [{min}, {max}]")]
    InvalidAmountRange {
        /// Category whose range is invalid.
        category: Category,
        /// Configured lower bound.
        min: Decimal,
        /// Configured upper bound.
        max: Decimal,
    },
}

impl From<GeneratorError> for spendcast_shared::AppError {
    fn from(err: GeneratorError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ProfileError> for spendcast_shared::AppError {
    fn from(err: ProfileError) -> Self {
        Self::Validation(err.to_string())
    }
}
