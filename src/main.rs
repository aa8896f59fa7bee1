use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use finance_visualizer::aggregation::build_dashboard;
use finance_visualizer::config::EngineConfig;
use finance_visualizer::operations::add::create_transaction;
use finance_visualizer::operations::{import, report};
use finance_visualizer::store::{BudgetStore, TransactionStore, sample};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Parser)]
#[command(name = "finviz", version, about = "Summarize spending against category budgets")]
struct Cli {
    /// CSV of `date,description,amount[,category]` rows
    #[arg(long, global = true, value_name = "FILE")]
    transactions: Option<PathBuf>,

    /// CSV of `category,amount` rows
    #[arg(long, global = true, value_name = "FILE")]
    budgets: Option<PathBuf>,

    /// Use the built-in demo transactions and budgets
    #[arg(long, global = true, conflicts_with_all = ["transactions", "budgets"])]
    demo: bool,

    /// Extra transaction as `date, description, amount[, category]`
    #[arg(long = "add", global = true, value_name = "ENTRY")]
    add: Vec<String>,

    /// Reference date for the recent-spending window (defaults to today)
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    now: Option<NaiveDate>,

    /// JSON file with engine settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the computed views as JSON
    #[arg(long, global = true)]
    json: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Lifetime and recent totals, top category and latest transaction
    Summary,
    /// Spending per month
    Monthly,
    /// Spending per category
    Categories,
    /// Budget versus actual spending
    Budgets,
    /// Overspend and near-limit warnings
    Insights,
    /// Everything above
    Report,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose, which wins over the default
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_log_level(cli.verbose))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display()))?,
        None => EngineConfig::default(),
    };

    let (transactions, budgets) = load_snapshot(&cli, &config)?;
    let now = cli.now.unwrap_or_else(|| chrono::Local::now().date_naive());
    let dashboard = build_dashboard(transactions.snapshot(), budgets.snapshot(), now, &config);

    if cli.json {
        let value = match cli.command {
            Command::Summary => serde_json::to_value(&dashboard.summary)?,
            Command::Monthly => serde_json::to_value(&dashboard.monthly)?,
            Command::Categories => serde_json::to_value(&dashboard.categories)?,
            Command::Budgets => serde_json::to_value(&dashboard.utilization)?,
            Command::Insights => serde_json::to_value(&dashboard.insights)?,
            Command::Report => serde_json::to_value(&dashboard)?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let output = match cli.command {
        Command::Summary => report::render_summary(&dashboard.summary, config.recent_window_days),
        Command::Monthly => report::render_monthly(&dashboard.monthly),
        Command::Categories => report::render_categories(&dashboard.categories, &dashboard.category_shares),
        Command::Budgets => report::render_budgets(&dashboard.utilization, &dashboard.budget_totals),
        Command::Insights => report::render_insights(&dashboard.insights),
        Command::Report => [
            ("Summary", report::render_summary(&dashboard.summary, config.recent_window_days)),
            ("Monthly Expenses", report::render_monthly(&dashboard.monthly)),
            (
                "Expenses by Category",
                report::render_categories(&dashboard.categories, &dashboard.category_shares),
            ),
            (
                "Budget vs. Actual",
                report::render_budgets(&dashboard.utilization, &dashboard.budget_totals),
            ),
            ("Spending Insights", report::render_insights(&dashboard.insights)),
        ]
        .iter()
        .map(|(title, body)| format!("== {} ==\n{}", title, body))
        .collect::<Vec<_>>()
        .join("\n"),
    };
    print!("{}", output);
    Ok(())
}

fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

fn load_snapshot(cli: &Cli, config: &EngineConfig) -> Result<(TransactionStore, BudgetStore)> {
    let mut transactions = if cli.demo {
        TransactionStore::from_transactions(sample::transactions())?
    } else if let Some(path) = &cli.transactions {
        import::import_transactions(path, config)?
    } else {
        TransactionStore::new()
    };

    for entry in &cli.add {
        let transaction =
            create_transaction(entry, config).with_context(|| format!("Invalid transaction '{}'", entry))?;
        transactions = transactions.insert(transaction)?;
    }

    let budgets = if cli.demo {
        BudgetStore::from_budgets(sample::budgets())?
    } else if let Some(path) = &cli.budgets {
        import::import_budgets(path)?
    } else {
        BudgetStore::new()
    };

    tracing::debug!(
        transactions = transactions.len(),
        budgets = budgets.snapshot().len(),
        "loaded snapshot"
    );
    Ok((transactions, budgets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert_eq!(default_log_level(false), "info");
        assert_eq!(default_log_level(true), "debug");
    }

    #[test]
    fn test_cli_parses_demo_report() {
        let cli = Cli::try_parse_from(["finviz", "report", "--demo", "--now", "2025-03-15"]).unwrap();
        assert!(cli.demo);
        assert_eq!(cli.now, NaiveDate::from_ymd_opt(2025, 3, 15));
        assert!(matches!(cli.command, Command::Report));
    }
}
