//! Profile configuration: a small TOML file holding the four financial
//! constants. Absent file or absent keys fall back to the built-in
//! defaults, so a fresh checkout runs without setup.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use runway_core::Profile;

#[derive(Debug, Default, Deserialize)]
struct ProfileFile {
    income: Option<f64>,
    recurring_bills: Option<f64>,
    goal_amount: Option<f64>,
    current_savings: Option<f64>,
}

/// Load the profile from a TOML file, defaulting missing fields.
/// A missing file is not an error; a malformed one is.
pub fn load_profile(path: &Path) -> Result<Profile> {
    if !path.exists() {
        return Ok(Profile::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file: ProfileFile = toml::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;

    let defaults = Profile::default();
    Ok(Profile {
        income: file.income.unwrap_or(defaults.income),
        recurring_bills: file.recurring_bills.unwrap_or(defaults.recurring_bills),
        goal_amount: file.goal_amount.unwrap_or(defaults.goal_amount),
        current_savings: file.current_savings.unwrap_or(defaults.current_savings),
    })
}
