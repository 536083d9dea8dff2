//! Goal ETA projection by linear extrapolation of the monthly savings rate.

use serde::{Deserialize, Serialize};

/// Outcome of a goal projection. Tagged so the unreachable branch is
/// exhaustive at the call site instead of hiding behind a null months
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GoalEta {
    /// Months until the goal is met, rounded to one decimal place.
    /// 0.0 means the goal is already met.
    Reachable(f64),
    /// Monthly savings are zero or negative; no finite ETA exists.
    Unreachable,
}

impl GoalEta {
    pub fn is_reachable(&self) -> bool {
        matches!(self, GoalEta::Reachable(_))
    }

    pub fn months(&self) -> Option<f64> {
        match self {
            GoalEta::Reachable(m) => Some(*m),
            GoalEta::Unreachable => None,
        }
    }
}

/// Project months-to-goal at a constant monthly savings rate.
///
/// A non-positive rate can never close the gap, so it maps to
/// `Unreachable`. If the current balance already covers the goal the
/// result is `Reachable(0.0)` rather than a negative month count.
pub fn predict_goal_eta(goal_amount: f64, current_savings: f64, monthly_savings: f64) -> GoalEta {
    if monthly_savings <= 0.0 {
        return GoalEta::Unreachable;
    }
    if current_savings >= goal_amount {
        return GoalEta::Reachable(0.0);
    }
    let months = (goal_amount - current_savings) / monthly_savings;
    GoalEta::Reachable((months * 10.0).round() / 10.0)
}
