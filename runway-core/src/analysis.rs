//! Spending aggregation and net-savings calculation.

use std::collections::BTreeMap;

use runway_ingest::Transaction;

use crate::profile::Profile;

/// Per-category sum of transaction amounts. BTreeMap so the breakdown
/// iterates in a stable order for display.
pub type CategoryTotals = BTreeMap<String, f64>;

/// Sum amounts per category. Empty input yields an empty map.
pub fn categorize_spending(txns: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for t in txns {
        *totals.entry(t.category.clone()).or_insert(0.0) += t.amount;
    }
    totals
}

/// Total spent across all transactions.
pub fn total_spent(txns: &[Transaction]) -> f64 {
    txns.iter().map(|t| t.amount).sum()
}

/// Net monthly savings: income minus (spend + recurring bills), floored
/// at zero. The overspend magnitude is deliberately not reported —
/// downstream only needs to know there are no positive savings.
pub fn calc_savings(profile: &Profile, total_spent: f64) -> f64 {
    let expenses = total_spent + profile.recurring_bills;
    let savings = profile.income - expenses;
    savings.max(0.0)
}
