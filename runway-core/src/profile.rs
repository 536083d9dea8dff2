//! Financial profile: the static income/bills/goal figures the pipeline
//! runs against. Always passed explicitly, never ambient state.

use serde::{Deserialize, Serialize};

/// Monthly financial profile, all amounts non-negative dollars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Monthly income
    pub income: f64,
    /// Fixed monthly bills (rent, subscriptions, insurance)
    pub recurring_bills: f64,
    /// Savings target
    pub goal_amount: f64,
    /// Balance already saved toward the goal
    pub current_savings: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            income: 4000.0,
            recurring_bills: 500.0,
            goal_amount: 3000.0,
            current_savings: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let p = Profile::default();
        assert_eq!(p.income, 4000.0);
        assert_eq!(p.recurring_bills, 500.0);
        assert_eq!(p.goal_amount, 3000.0);
        assert_eq!(p.current_savings, 500.0);
    }

    #[test]
    fn test_profile_toml_roundtrip_via_serde() {
        let p = Profile::default();
        let json = serde_json::to_string(&p).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
