use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use runway_core::{GoalEta, Report, predict_goal_eta, run_report};
use runway_ingest::load_transactions;
use std::path::PathBuf;

mod config;

#[derive(Parser, Debug)]
#[command(name = "runway", version, about = "Personal savings forecaster")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline: spending breakdown, savings, goal ETA, insights
    Report {
        /// Path to the transaction ledger CSV
        #[arg(long, default_value = "data/transactions.csv")]
        csv: PathBuf,

        /// Path to the profile TOML (built-in defaults if absent)
        #[arg(long, default_value = "profile.toml")]
        profile: PathBuf,

        /// Dump the report as JSON instead of the rendered sections
        #[arg(long)]
        json: bool,
    },

    /// Project months-to-goal for an explicit rate, without a ledger
    Forecast {
        /// Savings target
        #[arg(long)]
        goal: f64,

        /// Balance already saved
        #[arg(long, default_value_t = 0.0)]
        current: f64,

        /// Monthly savings rate
        #[arg(long)]
        monthly: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Report { csv, profile, json } => {
            if !csv.exists() {
                bail!("ledger not found: {} (pass --csv <path>)", csv.display());
            }

            let profile = config::load_profile(&profile)?;
            let txns = load_transactions(&csv)
                .with_context(|| format!("loading {}", csv.display()))?;
            let report = run_report(&profile, &txns);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Command::Forecast {
            goal,
            current,
            monthly,
        } => match predict_goal_eta(goal, current, monthly) {
            GoalEta::Reachable(months) => println!(
                "At this rate, you'll reach your ${goal} goal in about {months:.1} months."
            ),
            GoalEta::Unreachable => {
                println!("At your current spending rate, you won't reach your goal.")
            }
        },
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("\nSpending by Category:");
    for (cat, amt) in &report.category_totals {
        println!("  {cat}: ${amt:.2}");
    }

    println!("\nInsights:");
    for tip in &report.insights {
        println!(" - {tip}");
    }
}
