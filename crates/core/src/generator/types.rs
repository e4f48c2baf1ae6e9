//! Transaction data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending categories recognized by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Supermarket and grocery spending.
    Groceries,
    /// Restaurants, cafes, and takeout.
    Dining,
    /// Movies, concerts, streaming, hobbies.
    Entertainment,
    /// General retail purchases.
    Shopping,
    /// Fuel, transit, and rideshare.
    Transportation,
    /// Medical and pharmacy costs.
    Healthcare,
    /// Monthly rent and utilities.
    #[serde(rename = "Living Expenses")]
    LivingExpenses,
    /// Anything that fits nowhere else.
    Misc,
}

impl Category {
    /// All categories in fixed positional order.
    ///
    /// Weight vectors align positionally with this order.
    pub const ALL: [Self; 8] = [
        Self::Groceries,
        Self::Dining,
        Self::Entertainment,
        Self::Shopping,
        Self::Transportation,
        Self::Healthcare,
        Self::LivingExpenses,
        Self::Misc,
    ];

    /// Position of this category in [`Category::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Groceries => 0,
            Self::Dining => 1,
            Self::Entertainment => 2,
            Self::Shopping => 3,
            Self::Transportation => 4,
            Self::Healthcare => 5,
            Self::LivingExpenses => 6,
            Self::Misc => 7,
        }
    }

    /// Whether the holiday multiplier (Nov/Dec) applies to this category.
    #[must_use]
    pub const fn is_holiday_scaled(self) -> bool {
        matches!(
            self,
            Self::Groceries | Self::Dining | Self::Shopping | Self::Entertainment
        )
    }

    /// Whether the vacation multiplier (Jun-Aug) applies to this category.
    #[must_use]
    pub const fn is_vacation_scaled(self) -> bool {
        matches!(self, Self::Transportation | Self::Dining | Self::Entertainment)
    }

    /// Human-readable label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Transportation => "Transportation",
            Self::Healthcare => "Healthcare",
            Self::LivingExpenses => "Living Expenses",
            Self::Misc => "Misc",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One simulated spending event.
///
/// Serializes in the camelCase wire format the dashboard consumes
/// (`transactionId`, `vendorName`, ...); dates render as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Random identifier in [1000, 9999]. Uniqueness is not guaranteed.
    pub transaction_id: u32,
    /// Owning user. The simulation covers a single synthetic user.
    pub user_id: u32,
    /// Account the spend is drawn from, one of a small fixed set.
    pub account_id: u32,
    /// Synthetic vendor name.
    pub vendor_name: String,
    /// Transaction amount, always positive, two fractional digits.
    pub amount: Decimal,
    /// Synthetic free-text description.
    pub description: String,
    /// Spending category.
    pub category: Category,
    /// Calendar day the spend occurred on.
    pub date: NaiveDate,
}
