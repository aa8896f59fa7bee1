use super::format_currency;
use super::utilization::BudgetUtilization;
use crate::config::EngineConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// A readable observation about spending against budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    Overspent { category: String, overage: Decimal },
    NearLimit { category: String, percent_used: Decimal },
    HighestSpending { category: String, actual: Decimal },
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insight::Overspent { category, overage } => write!(
                f,
                "You've exceeded your {} budget by {}.",
                category,
                format_currency(*overage)
            ),
            Insight::NearLimit { category, percent_used } => {
                let whole = percent_used.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                write!(
                    f,
                    "You're at {}% of your {} budget. Consider reducing spending.",
                    whole.normalize(),
                    category
                )
            }
            Insight::HighestSpending { category, actual } => write!(
                f,
                "Your highest spending category is {} at {}.",
                category,
                format_currency(*actual)
            ),
        }
    }
}

/// Per-budget warnings in budget order, followed by the single highest
/// spending category. Ties for highest keep the earliest budget.
pub fn compute_insights(utilization: &[BudgetUtilization], config: &EngineConfig) -> Vec<Insight> {
    let mut insights = Vec::new();
    let mut highest: Option<&BudgetUtilization> = None;

    for entry in utilization {
        if entry.actual > highest.map_or(Decimal::ZERO, |h| h.actual) {
            highest = Some(entry);
        }

        if entry.is_overspent() {
            insights.push(Insight::Overspent {
                category: entry.category.clone(),
                overage: entry.overspend(),
            });
        } else if entry.budget > Decimal::ZERO && entry.percent_used >= config.near_limit_percent {
            insights.push(Insight::NearLimit {
                category: entry.category.clone(),
                percent_used: entry.percent_used,
            });
        }
    }

    if let Some(entry) = highest {
        insights.push(Insight::HighestSpending {
            category: entry.category.clone(),
            actual: entry.actual,
        });
    }

    tracing::trace!(count = insights.len(), "computed insights");
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::compute_budget_utilization;
    use crate::models::budget::Budget;
    use crate::models::transaction::Transaction;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tx(id: &str, amount: &str, category: &str) -> Transaction {
        Transaction::new(
            id.to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            "Test Description".to_string(),
            dec(amount),
            category.to_string(),
        )
    }

    fn messages(transactions: &[Transaction], budgets: &[Budget]) -> Vec<String> {
        let utilization = compute_budget_utilization(transactions, budgets);
        compute_insights(&utilization, &EngineConfig::default())
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn test_overspend_message() {
        let insights = messages(&[tx("4", "127.30", "Utilities")], &[Budget::new("Utilities", dec("100"))]);
        assert_eq!(
            insights,
            vec![
                "You've exceeded your Utilities budget by $27.30.".to_string(),
                "Your highest spending category is Utilities at $127.30.".to_string(),
            ]
        );
    }

    #[test]
    fn test_below_threshold_only_reports_highest() {
        let transactions = vec![tx("1", "50.75", "Food"), tx("2", "9.99", "Entertainment")];
        let insights = messages(&transactions, &[Budget::new("Food", dec("400"))]);
        assert_eq!(
            insights,
            vec!["Your highest spending category is Food at $50.75.".to_string()]
        );
    }

    #[test]
    fn test_near_limit_message_rounds_percent() {
        // 170.5 / 200 = 85.25%
        let insights = messages(&[tx("1", "170.50", "Food")], &[Budget::new("Food", dec("200"))]);
        assert_eq!(insights[0], "You're at 85% of your Food budget. Consider reducing spending.");
    }

    #[test]
    fn test_near_limit_fires_at_exact_threshold() {
        let insights = messages(&[tx("1", "80", "Food")], &[Budget::new("Food", dec("100"))]);
        assert_eq!(insights[0], "You're at 80% of your Food budget. Consider reducing spending.");
    }

    #[test]
    fn test_fully_spent_budget_is_near_limit_not_overspent() {
        let insights = messages(&[tx("1", "100", "Food")], &[Budget::new("Food", dec("100"))]);
        assert_eq!(insights[0], "You're at 100% of your Food budget. Consider reducing spending.");
    }

    #[test]
    fn test_zero_budget_never_warns() {
        let insights = messages(&[tx("1", "10", "Other")], &[Budget::new("Other", Decimal::ZERO)]);
        assert_eq!(insights, vec!["Your highest spending category is Other at $10.00.".to_string()]);
    }

    #[test]
    fn test_no_spending_no_insights() {
        let budgets = vec![Budget::new("Food", dec("400")), Budget::new("Housing", dec("1200"))];
        assert!(messages(&[], &budgets).is_empty());
        assert!(messages(&[tx("1", "10", "Unbudgeted")], &budgets).is_empty());
    }

    #[test]
    fn test_ordering_warnings_then_highest() {
        let transactions = vec![
            tx("1", "90", "Food"),
            tx("2", "300", "Rent"),
            tx("3", "10", "Fun"),
        ];
        let budgets = vec![
            Budget::new("Fun", dec("100")),
            Budget::new("Food", dec("100")),
            Budget::new("Rent", dec("250")),
        ];

        let insights = messages(&transactions, &budgets);
        assert_eq!(
            insights,
            vec![
                "You're at 90% of your Food budget. Consider reducing spending.".to_string(),
                "You've exceeded your Rent budget by $50.00.".to_string(),
                "Your highest spending category is Rent at $300.00.".to_string(),
            ]
        );
    }

    #[test]
    fn test_highest_tie_keeps_first_budget() {
        let transactions = vec![tx("1", "20", "B"), tx("2", "20", "A")];
        let budgets = vec![Budget::new("A", dec("1000")), Budget::new("B", dec("1000"))];

        let insights = messages(&transactions, &budgets);
        assert_eq!(insights, vec!["Your highest spending category is A at $20.00.".to_string()]);
    }

    #[test]
    fn test_threshold_follows_config() {
        let utilization = compute_budget_utilization(&[tx("1", "50", "Food")], &[Budget::new("Food", dec("100"))]);
        let config = EngineConfig {
            near_limit_percent: dec("50"),
            ..EngineConfig::default()
        };

        let insights = compute_insights(&utilization, &config);
        assert!(matches!(insights[0], Insight::NearLimit { .. }));
    }
}
