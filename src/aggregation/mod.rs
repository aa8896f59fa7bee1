//! Pure functions that derive every dashboard view from a snapshot of
//! transactions and budgets. Nothing here keeps state between calls.

pub mod category;
pub mod insights;
pub mod monthly;
pub mod summary;
pub mod utilization;

pub use category::{CategoryShare, CategoryTotal, compute_category_shares, compute_category_totals};
pub use insights::{Insight, compute_insights};
pub use monthly::{MonthlySeriesPoint, compute_monthly_series};
pub use summary::{SummaryMetrics, TopCategory, compute_summary};
pub use utilization::{BudgetTotals, BudgetUtilization, compute_budget_utilization};

use crate::config::EngineConfig;
use crate::models::budget::Budget;
use crate::models::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Rounds to whole cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `$1234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = round_cents(amount);
    rounded.rescale(2);
    format!("${}", rounded)
}

/// Every view the dashboard renders, computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: SummaryMetrics,
    pub monthly: Vec<MonthlySeriesPoint>,
    pub categories: Vec<CategoryTotal>,
    pub category_shares: Vec<CategoryShare>,
    pub utilization: Vec<BudgetUtilization>,
    pub budget_totals: BudgetTotals,
    pub insights: Vec<Insight>,
}

pub fn build_dashboard(
    transactions: &[Transaction],
    budgets: &[Budget],
    now: NaiveDate,
    config: &EngineConfig,
) -> Dashboard {
    let summary = compute_summary(transactions, now, config);
    let monthly = compute_monthly_series(transactions);
    let categories = compute_category_totals(transactions, config);
    let category_shares = compute_category_shares(&categories);
    let utilization = compute_budget_utilization(transactions, budgets);
    let budget_totals = BudgetTotals::from_utilization(&utilization);
    let insights = compute_insights(&utilization, config);

    tracing::debug!(
        transactions = transactions.len(),
        budgets = budgets.len(),
        months = monthly.len(),
        insights = insights.len(),
        "built dashboard"
    );

    Dashboard {
        summary,
        monthly,
        categories,
        category_shares,
        utilization,
        budget_totals,
        insights,
    }
}
