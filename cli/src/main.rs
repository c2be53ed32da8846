mod render;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use settlement_planner_core_rs::{Planner, Scenario};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "settle-plan",
    version,
    about = "Find the fewest transfers that settle a group's debts."
)]
struct Cli {
    /// Scenario JSON (config + people). Uses the built-in demo group if omitted.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Balances below this magnitude count as settled (minor units).
    #[arg(long)]
    epsilon: Option<i64>,

    /// Wall-clock search budget in seconds.
    #[arg(long)]
    time_budget_secs: Option<f64>,

    /// Search without a time budget.
    #[arg(long, default_value_t = false, conflicts_with = "time_budget_secs")]
    no_time_limit: bool,

    /// Disable the branch-and-bound cutoff (exhaustive search).
    #[arg(long, default_value_t = false)]
    no_pruning: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

/// Returns whether a complete settlement was found
fn real_main() -> anyhow::Result<bool> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scenario = load_scenario(&cli)?;
    debug!(people = scenario.people.len(), "Scenario loaded");

    let planner = Planner::new(scenario.config).context("invalid planner config")?;
    let plan = planner
        .plan(&scenario.people)
        .context("refusing to search")?;
    let report = plan.report();

    match cli.format {
        OutputFormat::Text => print!("{}", render::render_text(&report)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing plan report")?
        ),
    }

    Ok(report.found)
}

fn load_scenario(cli: &Cli) -> anyhow::Result<Scenario> {
    let mut scenario = match &cli.scenario {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading scenario {}", path.display()))?;
            Scenario::from_json(&json)
                .with_context(|| format!("parsing scenario {}", path.display()))?
        }
        None => Scenario::demo(),
    };

    if let Some(epsilon) = cli.epsilon {
        scenario.config.epsilon = epsilon;
    }
    if let Some(secs) = cli.time_budget_secs {
        scenario.config.time_budget_secs = Some(secs);
    }
    if cli.no_time_limit {
        scenario.config.time_budget_secs = None;
    }
    if cli.no_pruning {
        scenario.config.pruning = false;
    }

    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_demo_config() {
        let cli = Cli::parse_from([
            "settle-plan",
            "--epsilon",
            "1",
            "--time-budget-secs",
            "0.5",
            "--no-pruning",
        ]);

        let scenario = load_scenario(&cli).unwrap();

        assert_eq!(scenario.people.len(), 12);
        assert_eq!(scenario.config.epsilon, 1);
        assert_eq!(scenario.config.time_budget_secs, Some(0.5));
        assert!(!scenario.config.pruning);
    }

    #[test]
    fn test_no_time_limit_clears_budget() {
        let cli = Cli::parse_from(["settle-plan", "--no-time-limit", "--format", "json"]);

        let scenario = load_scenario(&cli).unwrap();

        assert_eq!(scenario.config.time_budget_secs, None);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_scenario_file_is_an_error() {
        let cli = Cli::parse_from(["settle-plan", "--scenario", "/nonexistent/scenario.json"]);
        assert!(load_scenario(&cli).is_err());
    }
}
