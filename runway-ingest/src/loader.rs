//! Parse a ledger CSV export into typed transactions.
//!
//! Expected layout, header row required:
//! date,category,amount
//! 2026-07-03,dining,42.50

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use std::path::Path;

use crate::types::Transaction;

fn parse_date(s: &str) -> Option<NaiveDate> {
    // ISO first; bank exports sometimes use US-style dates
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// Load a transaction ledger from a CSV file.
///
/// Rows with an unparseable date are skipped; an unparseable amount is an
/// error, since silently dropping a spend would corrupt every downstream
/// total.
pub fn load_transactions(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut txns = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result?;

        let date_str = record.get(0).unwrap_or("").trim();
        if date_str.is_empty() {
            continue;
        }
        let date = match parse_date(date_str) {
            Some(d) => d,
            None => continue, // skip unparseable rows
        };

        let category = record.get(1).unwrap_or("").trim().to_string();

        let amount_str = record.get(2).unwrap_or("").trim();
        let amount: f64 = match amount_str.replace(",", "").parse() {
            Ok(a) => a,
            Err(_) => bail!(
                "row {}: bad amount {:?} in {}",
                idx + 2, // 1-based, after the header
                amount_str,
                path.as_ref().display()
            ),
        };

        txns.push(Transaction {
            date,
            category,
            amount,
        });
    }

    Ok(txns)
}
