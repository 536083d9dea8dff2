use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One ledger entry. Positive amount means expense/spend; negative means
/// credit/refund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }
}
