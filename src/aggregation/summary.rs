use crate::config::EngineConfig;
use crate::models::transaction::Transaction;
use chrono::{NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopCategory {
    pub name: String,
    pub amount: Decimal,
}

/// Headline numbers for the summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub total_expenses: Decimal,
    pub recent_total: Decimal,
    pub top_category: Option<TopCategory>,
    pub most_recent: Option<Transaction>,
}

/// Computes the summary cards for `transactions` as seen on `now`.
///
/// `recent_total` covers transactions dated on or after
/// `now - config.recent_window_days`. The boundary day itself counts, unlike
/// a time-of-day cutoff which would drop it. A negative window is treated as
/// zero and a window reaching past the earliest representable date covers
/// everything. On ties, the first category (in order
/// of first appearance) and the first transaction carrying the latest date win.
pub fn compute_summary(transactions: &[Transaction], now: NaiveDate, config: &EngineConfig) -> SummaryMetrics {
    let total_expenses = transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc + t.amount);

    let window_start = TimeDelta::try_days(config.recent_window_days.max(0))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN);
    let recent_total = transactions
        .iter()
        .filter(|t| t.date >= window_start)
        .fold(Decimal::ZERO, |acc, t| acc + t.amount);

    SummaryMetrics {
        total_expenses,
        recent_total,
        top_category: top_category(transactions, &config.fallback_category),
        most_recent: most_recent(transactions).cloned(),
    }
}

fn top_category(transactions: &[Transaction], fallback: &str) -> Option<TopCategory> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for transaction in transactions {
        let category = transaction.category_or(fallback);
        let entry = totals.entry(category).or_insert_with(|| {
            order.push(category);
            Decimal::ZERO
        });
        *entry += transaction.amount;
    }

    let mut top: Option<TopCategory> = None;
    for category in order {
        let amount = totals[category];
        // strict comparison keeps the earliest category on ties
        if top.as_ref().is_none_or(|t| amount > t.amount) {
            top = Some(TopCategory {
                name: category.to_string(),
                amount,
            });
        }
    }
    top
}

fn most_recent(transactions: &[Transaction]) -> Option<&Transaction> {
    let mut latest: Option<&Transaction> = None;
    for transaction in transactions {
        if latest.is_none_or(|l| transaction.date > l.date) {
            latest = Some(transaction);
        }
    }
    latest
}
