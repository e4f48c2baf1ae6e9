//! The day-by-day simulation loop.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;

use super::error::{GeneratorError, ProfileError};
use super::profile::CategoryProfiles;
use super::sampler::WeightedSampler;
use super::text::TextSource;
use super::types::{Category, Transaction};

/// The single simulated user.
const USER_ID: u32 = 1;
/// Transaction ids are drawn from this range; collisions are allowed.
const TRANSACTION_ID_RANGE: RangeInclusive<u32> = 1000..=9999;
/// The simulated user's accounts.
const ACCOUNT_ID_RANGE: RangeInclusive<u32> = 1..=3;
/// Fixed description for the monthly Living-Expenses transaction.
const RENT_DESCRIPTION: &str = "Monthly rent or utilities";
/// Rent amounts are drawn uniformly from [800, 1500], in cents.
const RENT_CENTS_RANGE: RangeInclusive<i64> = 80_000..=150_000;
/// Maximum length of a generated free-text description.
const DESCRIPTION_MAX_CHARS: usize = 50;
/// Candidate regular transactions drawn per day.
const DAILY_CANDIDATE_RANGE: RangeInclusive<u32> = 1..=2;

/// Ceiling on total regular spending within one simulated month.
const MONTHLY_CAP: Decimal = Decimal::from_parts(3000, 0, 0, false, 0);
/// Hard per-day ceiling, regardless of remaining monthly budget.
const DAILY_CAP_CEILING: Decimal = Decimal::from_parts(200, 0, 0, false, 0);
/// Amount multiplier for holiday-scaled categories in Nov/Dec.
const HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);
/// Amount multiplier for vacation-scaled categories in Jun-Aug.
const VACATION_MULTIPLIER: Decimal = Decimal::from_parts(13, 0, 0, false, 1);
/// Fixed month length used when spreading the remaining budget.
///
/// Deliberately not calendar-accurate; see [`daily_cap`].
const SIMULATED_MONTH_DAYS: u32 = 30;

/// Synthetic personal-spending transaction generator.
///
/// Owns its random stream and text source, so one generator instance
/// per run keeps concurrent runs isolated and seeded runs reproducible.
pub struct TransactionGenerator<R, T> {
    rng: R,
    text: T,
    profiles: CategoryProfiles,
    base_sampler: WeightedSampler,
    inflation_sampler: WeightedSampler,
    rebound_sampler: WeightedSampler,
}

/// Run-scoped bookkeeping carried across the day loop.
///
/// Created inside [`TransactionGenerator::generate`] and dropped when
/// the run ends; nothing here outlives or is shared between runs.
#[derive(Debug)]
struct RunState {
    /// Month number currently being accumulated.
    current_month: u32,
    /// (year, month) pairs that already received their rent transaction.
    rent_emitted: HashSet<(i32, u32)>,
    /// Regular (non-rent) spending accepted so far this month.
    monthly_spending: Decimal,
}

impl RunState {
    fn new(start: NaiveDate) -> Self {
        Self {
            current_month: start.month(),
            rent_emitted: HashSet::new(),
            monthly_spending: Decimal::ZERO,
        }
    }
}

impl<R: Rng, T: TextSource> TransactionGenerator<R, T> {
    /// Creates a generator with the standard category profiles.
    pub fn new(rng: R, text: T) -> Result<Self, ProfileError> {
        Self::with_profiles(rng, text, CategoryProfiles::standard()?)
    }

    /// Creates a generator with explicit (already validated) profiles.
    pub fn with_profiles(
        rng: R,
        text: T,
        profiles: CategoryProfiles,
    ) -> Result<Self, ProfileError> {
        let base_sampler = WeightedSampler::new(&profiles.base_weights())?;
        let inflation_sampler = WeightedSampler::new(&profiles.weights_for_year(2022))?;
        let rebound_sampler = WeightedSampler::new(&profiles.weights_for_year(2023))?;
        Ok(Self {
            rng,
            text,
            profiles,
            base_sampler,
            inflation_sampler,
            rebound_sampler,
        })
    }

    /// Generates the full transaction sequence for `[start, end]`, both
    /// inclusive.
    ///
    /// Transactions are ordered by day; within a day the Living-Expenses
    /// transaction (if any) precedes the regular ones, which keep
    /// generation order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidRange`] when `start > end`.
    pub fn generate(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, GeneratorError> {
        if start > end {
            return Err(GeneratorError::InvalidRange { start, end });
        }

        let mut state = RunState::new(start);
        let mut transactions = Vec::new();

        let mut cursor = start;
        while cursor <= end {
            self.simulate_day(cursor, &mut state, &mut transactions);
            let Some(next) = cursor.succ_opt() else { break };
            cursor = next;
        }

        tracing::debug!(
            %start,
            %end,
            count = transactions.len(),
            "Generated synthetic transactions"
        );
        Ok(transactions)
    }

    /// Runs one simulated day, appending its transactions to `out`.
    fn simulate_day(&mut self, date: NaiveDate, state: &mut RunState, out: &mut Vec<Transaction>) {
        let year = date.year();
        let month = date.month();

        if month != state.current_month {
            state.monthly_spending = Decimal::ZERO;
            state.current_month = month;
        }

        let holiday = if matches!(month, 11 | 12) {
            HOLIDAY_MULTIPLIER
        } else {
            Decimal::ONE
        };
        let vacation = if matches!(month, 6..=8) {
            VACATION_MULTIPLIER
        } else {
            Decimal::ONE
        };

        // Rent lands on the first visited day of each month.
        if state.rent_emitted.insert((year, month)) {
            let rent = self.rent_transaction(date);
            out.push(rent);
        }

        let daily_cap = daily_cap(state.monthly_spending, date.day());

        let candidates = self.rng.random_range(DAILY_CANDIDATE_RANGE);
        let mut daily_total = Decimal::ZERO;
        for _ in 0..candidates {
            let sampler = match year {
                2022 => &self.inflation_sampler,
                2023 => &self.rebound_sampler,
                _ => &self.base_sampler,
            };
            let category = Category::ALL[sampler.sample(&mut self.rng)];

            let (min_cents, max_cents) = self.profiles.amount_cents(category);
            let raw = Decimal::new(self.rng.random_range(min_cents..=max_cents), 2);
            let amount = apply_multipliers(raw, category, holiday, vacation);

            // Stop at the first rejection; later candidates are not tried.
            if daily_total + amount > daily_cap {
                break;
            }
            daily_total += amount;
            state.monthly_spending += amount;

            let transaction = self.regular_transaction(date, category, amount);
            out.push(transaction);
        }
    }

    fn rent_transaction(&mut self, date: NaiveDate) -> Transaction {
        Transaction {
            transaction_id: self.rng.random_range(TRANSACTION_ID_RANGE),
            user_id: USER_ID,
            account_id: self.rng.random_range(ACCOUNT_ID_RANGE),
            vendor_name: self.text.company_name(),
            amount: Decimal::new(self.rng.random_range(RENT_CENTS_RANGE), 2),
            description: RENT_DESCRIPTION.to_string(),
            category: Category::LivingExpenses,
            date,
        }
    }

    fn regular_transaction(
        &mut self,
        date: NaiveDate,
        category: Category,
        amount: Decimal,
    ) -> Transaction {
        Transaction {
            transaction_id: self.rng.random_range(TRANSACTION_ID_RANGE),
            user_id: USER_ID,
            account_id: self.rng.random_range(ACCOUNT_ID_RANGE),
            vendor_name: self.text.company_name(),
            amount,
            description: self.text.short_text(DESCRIPTION_MAX_CHARS),
            category,
            date,
        }
    }
}

/// Applies the seasonal multipliers that match the category, re-rounding
/// to cents after each one.
pub(crate) fn apply_multipliers(
    raw: Decimal,
    category: Category,
    holiday: Decimal,
    vacation: Decimal,
) -> Decimal {
    let mut amount = raw;
    if category.is_holiday_scaled() {
        amount = (amount * holiday).round_dp(2);
    }
    if category.is_vacation_scaled() {
        amount = (amount * vacation).round_dp(2);
    }
    amount
}

/// Daily spending allowance derived from the remaining monthly budget.
///
/// `days_remaining` uses a fixed 30-day month, so it ignores the real
/// month length and clamps at 1 on day 30 and 31. The result can be
/// zero or negative late in an over-spent month; callers treat that as
/// "no further spending today".
pub(crate) fn daily_cap(monthly_spending: Decimal, day_of_month: u32) -> Decimal {
    let days_remaining = SIMULATED_MONTH_DAYS.saturating_sub(day_of_month).max(1);
    let remaining_budget = MONTHLY_CAP - monthly_spending;
    (remaining_budget / Decimal::from(days_remaining)).min(DAILY_CAP_CEILING)
}
