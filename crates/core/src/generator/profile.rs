//! Static category profiles and year-conditioned weight vectors.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::ProfileError;
use super::types::Category;

/// Number of categories in a profile set.
pub const CATEGORY_COUNT: usize = Category::ALL.len();

/// Per-category selection weight and amount range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProfile {
    /// Baseline selection weight. Weights across all categories sum to 1.
    pub weight: Decimal,
    /// Inclusive lower bound of the sampled amount.
    pub min: Decimal,
    /// Inclusive upper bound of the sampled amount.
    pub max: Decimal,
}

impl CategoryProfile {
    const fn new(weight_hundredths: u32, min: u32, max: u32) -> Self {
        Self {
            weight: Decimal::from_parts(weight_hundredths, 0, 0, false, 2),
            min: Decimal::from_parts(min, 0, 0, false, 0),
            max: Decimal::from_parts(max, 0, 0, false, 0),
        }
    }
}

/// Baseline profiles, aligned positionally with [`Category::ALL`].
const STANDARD_PROFILES: [CategoryProfile; CATEGORY_COUNT] = [
    CategoryProfile::new(25, 10, 100), // Groceries
    CategoryProfile::new(15, 10, 100), // Dining
    CategoryProfile::new(10, 10, 150), // Entertainment
    CategoryProfile::new(20, 10, 300), // Shopping
    CategoryProfile::new(10, 5, 50),   // Transportation
    CategoryProfile::new(5, 20, 300),  // Healthcare
    CategoryProfile::new(10, 1000, 1500), // Living Expenses
    CategoryProfile::new(5, 5, 100),   // Misc
];

const fn weight(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

/// 2022 weights: groceries-heavy, simulating inflation pressure.
const INFLATION_WEIGHTS: [Decimal; CATEGORY_COUNT] = [
    weight(30),
    weight(10),
    weight(5),
    weight(20),
    weight(10),
    weight(5),
    weight(5),
    weight(15),
];

/// 2023 weights: dining/entertainment-heavy, simulating the rebound.
const REBOUND_WEIGHTS: [Decimal; CATEGORY_COUNT] = [
    weight(25),
    weight(20),
    weight(12),
    weight(18),
    weight(10),
    weight(5),
    weight(5),
    weight(5),
];

/// Validated set of category profiles and year-conditioned weight vectors.
///
/// Construction performs all static-configuration checks, so a value of
/// this type is guaranteed internally consistent: every weight vector
/// sums to exactly 1.0 and every amount range is positive, ordered, and
/// expressible in whole cents.
#[derive(Debug, Clone)]
pub struct CategoryProfiles {
    profiles: [CategoryProfile; CATEGORY_COUNT],
    amount_cents: [(i64, i64); CATEGORY_COUNT],
    inflation_weights: [Decimal; CATEGORY_COUNT],
    rebound_weights: [Decimal; CATEGORY_COUNT],
}

impl CategoryProfiles {
    /// The fixed production configuration.
    pub fn standard() -> Result<Self, ProfileError> {
        Self::new(STANDARD_PROFILES, INFLATION_WEIGHTS, REBOUND_WEIGHTS)
    }

    /// Builds a profile set from explicit tables, validating everything.
    pub fn new(
        profiles: [CategoryProfile; CATEGORY_COUNT],
        inflation_weights: [Decimal; CATEGORY_COUNT],
        rebound_weights: [Decimal; CATEGORY_COUNT],
    ) -> Result<Self, ProfileError> {
        let mut amount_cents = [(0_i64, 0_i64); CATEGORY_COUNT];
        for (category, profile) in Category::ALL.iter().zip(&profiles) {
            let bounds = cents(profile.min).zip(cents(profile.max));
            match bounds {
                Some((min, max)) if min > 0 && min <= max => {
                    amount_cents[category.index()] = (min, max);
                }
                _ => {
                    return Err(ProfileError::InvalidAmountRange {
                        category: *category,
                        min: profile.min,
                        max: profile.max,
                    });
                }
            }
        }

        let base: Vec<Decimal> = profiles.iter().map(|p| p.weight).collect();
        check_weight_sum(&base)?;
        check_weight_sum(&inflation_weights)?;
        check_weight_sum(&rebound_weights)?;

        Ok(Self {
            profiles,
            amount_cents,
            inflation_weights,
            rebound_weights,
        })
    }

    /// Profile for a category.
    #[must_use]
    pub fn profile(&self, category: Category) -> &CategoryProfile {
        &self.profiles[category.index()]
    }

    /// Validated amount bounds for a category, in whole cents.
    #[must_use]
    pub fn amount_cents(&self, category: Category) -> (i64, i64) {
        self.amount_cents[category.index()]
    }

    /// Baseline weight vector, aligned with [`Category::ALL`].
    #[must_use]
    pub fn base_weights(&self) -> [Decimal; CATEGORY_COUNT] {
        let mut weights = [Decimal::ZERO; CATEGORY_COUNT];
        for (slot, profile) in weights.iter_mut().zip(&self.profiles) {
            *slot = profile.weight;
        }
        weights
    }

    /// Weight vector for a calendar year.
    ///
    /// 2022 and 2023 carry trend-shifted vectors; every other year,
    /// 2024 and beyond included, uses the baseline.
    #[must_use]
    pub fn weights_for_year(&self, year: i32) -> [Decimal; CATEGORY_COUNT] {
        match year {
            2022 => self.inflation_weights,
            2023 => self.rebound_weights,
            _ => self.base_weights(),
        }
    }
}

fn check_weight_sum(weights: &[Decimal]) -> Result<(), ProfileError> {
    let sum: Decimal = weights.iter().copied().sum();
    if sum == Decimal::ONE {
        Ok(())
    } else {
        Err(ProfileError::WeightSum { sum })
    }
}

/// Converts an amount bound to whole cents, rejecting sub-cent values.
fn cents(value: Decimal) -> Option<i64> {
    let scaled = value * Decimal::ONE_HUNDRED;
    if scaled.fract().is_zero() {
        scaled.to_i64()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_profiles_validate() {
        let profiles = CategoryProfiles::standard().unwrap();
        assert_eq!(profiles.profile(Category::Groceries).weight, dec!(0.25));
        assert_eq!(profiles.profile(Category::LivingExpenses).min, dec!(1000));
        assert_eq!(profiles.amount_cents(Category::Transportation), (500, 5_000));
    }

    #[rstest]
    #[case(2021)]
    #[case(2022)]
    #[case(2023)]
    #[case(2024)]
    #[case(2030)]
    fn test_every_weight_vector_sums_to_one(#[case] year: i32) {
        let profiles = CategoryProfiles::standard().unwrap();
        let weights = profiles.weights_for_year(year);
        assert_eq!(weights.len(), Category::ALL.len());
        let sum: Decimal = weights.iter().copied().sum();
        assert_eq!(sum, Decimal::ONE);
    }

    #[test]
    fn test_year_branches_select_distinct_vectors() {
        let profiles = CategoryProfiles::standard().unwrap();
        let inflation = profiles.weights_for_year(2022);
        let rebound = profiles.weights_for_year(2023);
        let base = profiles.weights_for_year(2024);

        // 2022 leans into groceries, 2023 into dining.
        assert_eq!(inflation[Category::Groceries.index()], dec!(0.30));
        assert_eq!(rebound[Category::Dining.index()], dec!(0.20));
        assert_eq!(base, profiles.base_weights());
        assert_eq!(profiles.weights_for_year(2021), base);
    }

    #[test]
    fn test_bad_weight_sum_is_a_construction_error() {
        let mut profiles = STANDARD_PROFILES;
        profiles[0].weight = dec!(0.50);
        let err = CategoryProfiles::new(profiles, INFLATION_WEIGHTS, REBOUND_WEIGHTS).unwrap_err();
        assert_eq!(err, ProfileError::WeightSum { sum: dec!(1.25) });
    }

    #[test]
    fn test_inverted_amount_range_is_a_construction_error() {
        let mut profiles = STANDARD_PROFILES;
        profiles[Category::Misc.index()].min = dec!(200);
        let err = CategoryProfiles::new(profiles, INFLATION_WEIGHTS, REBOUND_WEIGHTS).unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidAmountRange {
                category: Category::Misc,
                min: dec!(200),
                max: dec!(100),
            }
        );
    }

    #[test]
    fn test_non_positive_minimum_is_a_construction_error() {
        let mut profiles = STANDARD_PROFILES;
        profiles[0].min = Decimal::ZERO;
        let err = CategoryProfiles::new(profiles, INFLATION_WEIGHTS, REBOUND_WEIGHTS).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidAmountRange { .. }));
    }
}
