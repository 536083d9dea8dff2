//! Turn the numeric pipeline results into human-readable insight lines.

use crate::forecast::GoalEta;

const OVERSPENDING: &str =
    "You're currently overspending. Consider cutting back in one category.";
const UNREACHABLE: &str = "At your current spending rate, you won't reach your goal.";
const NUDGE: &str = "Cutting $50 from dining out saves ~1 week toward your goal.";

/// Generate the insight list: always exactly 3 lines, in fixed order —
/// savings status, goal progress, then a static nudge.
pub fn generate_insights(
    goal_amount: f64,
    savings: f64,
    _monthly_savings: f64,
    months_eta: GoalEta,
) -> Vec<String> {
    let mut insights = Vec::with_capacity(3);

    if savings <= 0.0 {
        insights.push(OVERSPENDING.to_string());
    } else {
        insights.push(format!("You saved ${savings:.2} this month."));
    }

    match months_eta {
        GoalEta::Unreachable => insights.push(UNREACHABLE.to_string()),
        GoalEta::Reachable(months) => insights.push(format!(
            "At this rate, you'll reach your ${goal_amount} goal in about {months:.1} months."
        )),
    }

    insights.push(NUDGE.to_string());
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_savings_lines() {
        let lines = generate_insights(3000.0, 2500.0, 2500.0, GoalEta::Reachable(1.0));
        assert_eq!(
            lines,
            vec![
                "You saved $2500.00 this month.".to_string(),
                "At this rate, you'll reach your $3000 goal in about 1.0 months.".to_string(),
                NUDGE.to_string(),
            ]
        );
    }

    #[test]
    fn test_overspending_lines() {
        let lines = generate_insights(3000.0, 0.0, 0.0, GoalEta::Unreachable);
        assert_eq!(lines[0], OVERSPENDING);
        assert_eq!(lines[1], UNREACHABLE);
        assert_eq!(lines[2], NUDGE);
    }

    #[test]
    fn test_always_three_lines_fixed_order() {
        let cases = [
            (3000.0, 2500.0, GoalEta::Reachable(1.0)),
            (3000.0, 0.0, GoalEta::Unreachable),
            (3000.0, 10.0, GoalEta::Reachable(250.0)),
            (0.0, 0.0, GoalEta::Unreachable),
        ];
        for (goal, savings, eta) in cases {
            let lines = generate_insights(goal, savings, savings, eta);
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[2], NUDGE);
        }
    }

    #[test]
    fn test_eta_formats_one_decimal() {
        let lines = generate_insights(3000.0, 1800.0, 1800.0, GoalEta::Reachable(1.4));
        assert!(lines[1].contains("about 1.4 months"));
    }

    #[test]
    fn test_goal_already_met_reports_zero_months() {
        let lines = generate_insights(3000.0, 500.0, 500.0, GoalEta::Reachable(0.0));
        assert!(lines[1].contains("about 0.0 months"));
    }
}
