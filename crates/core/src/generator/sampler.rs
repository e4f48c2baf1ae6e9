//! Discrete-distribution sampling over category weights.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::ProfileError;

/// Basis points in a full probability mass (weights summing to 1.0).
const FULL_SCALE_BP: u32 = 10_000;

/// Weighted random sampler over a fixed discrete distribution.
///
/// Built once from a weight vector and sampled many times. The weights
/// are folded into a cumulative table of integer basis points, so a
/// draw is a single integer in `[0, 10000)` plus a binary search.
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    /// Cumulative upper bounds in basis points; the last entry is 10000.
    cumulative_bp: Vec<u32>,
}

impl WeightedSampler {
    /// Builds a sampler from weights that must sum to exactly 1.0.
    ///
    /// Every weight must be non-negative and representable in basis
    /// points (i.e. a multiple of 0.0001).
    pub fn new(weights: &[Decimal]) -> Result<Self, ProfileError> {
        let scale = Decimal::from(FULL_SCALE_BP);
        let mut cumulative_bp = Vec::with_capacity(weights.len());
        let mut total = Decimal::ZERO;

        for weight in weights {
            let bp = *weight * scale;
            if weight.is_sign_negative() || !bp.fract().is_zero() || bp.to_u32().is_none() {
                return Err(ProfileError::WeightPrecision { weight: *weight });
            }
            total += *weight;
            let cumulative = total * scale;
            match cumulative.to_u32() {
                Some(bound) if cumulative.fract().is_zero() => cumulative_bp.push(bound),
                _ => return Err(ProfileError::WeightSum { sum: total }),
            }
        }

        if total != Decimal::ONE {
            return Err(ProfileError::WeightSum { sum: total });
        }

        Ok(Self { cumulative_bp })
    }

    /// Draws an index according to the distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let draw = rng.random_range(0..FULL_SCALE_BP);
        self.cumulative_bp.partition_point(|&bound| bound <= draw)
    }
}
