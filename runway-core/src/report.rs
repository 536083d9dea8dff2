//! One-shot report combinator chaining the full pipeline:
//! aggregate → net savings → goal ETA → insights.

use serde::{Deserialize, Serialize};

use runway_ingest::Transaction;

use crate::analysis::{CategoryTotals, calc_savings, categorize_spending, total_spent};
use crate::forecast::{GoalEta, predict_goal_eta};
use crate::insights::generate_insights;
use crate::profile::Profile;

/// Plain-data result of one pipeline run. Everything a presentation
/// layer needs; nothing it has to compute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub category_totals: CategoryTotals,
    pub total_spent: f64,
    pub savings: f64,
    pub eta: GoalEta,
    pub insights: Vec<String>,
}

/// Run the full pipeline over a loaded ledger.
pub fn run_report(profile: &Profile, txns: &[Transaction]) -> Report {
    let category_totals = categorize_spending(txns);
    let total = total_spent(txns);
    let savings = calc_savings(profile, total);
    let eta = predict_goal_eta(profile.goal_amount, profile.current_savings, savings);
    let insights = generate_insights(profile.goal_amount, savings, savings, eta);

    Report {
        category_totals,
        total_spent: total,
        savings,
        eta,
        insights,
    }
}
