//! runway-core: the savings/forecast pipeline — aggregation, net savings,
//! goal ETA projection, and insight generation. Every function here is a
//! pure function of its inputs.

pub mod analysis;
pub mod forecast;
pub mod insights;
pub mod profile;
pub mod report;

pub use analysis::{CategoryTotals, calc_savings, categorize_spending, total_spent};
pub use forecast::{GoalEta, predict_goal_eta};
pub use insights::generate_insights;
pub use profile::Profile;
pub use report::{Report, run_report};
