//! Aggregation helpers over generated datasets.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::Transaction;

/// Sums transaction amounts per (year, month), in chronological order.
#[must_use]
pub fn monthly_totals(transactions: &[Transaction]) -> BTreeMap<(i32, u32), Decimal> {
    let mut totals = BTreeMap::new();
    for tx in transactions {
        let key = (tx.date.year(), tx.date.month());
        *totals.entry(key).or_insert(Decimal::ZERO) += tx.amount;
    }
    totals
}
