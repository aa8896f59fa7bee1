use super::round_cents;
use crate::config::EngineConfig;
use crate::models::transaction::Transaction;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// A category's slice of overall spending, in whole percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub percent: Decimal,
}

/// Totals spending per category, in order of first appearance.
pub fn compute_category_totals(transactions: &[Transaction], config: &EngineConfig) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let category = transaction.category_or(&config.fallback_category);
        let idx = *index.entry(category).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: category.to_string(),
                total: Decimal::ZERO,
            });
            totals.len() - 1
        });
        totals[idx].total += transaction.amount;
    }

    for entry in &mut totals {
        entry.total = round_cents(entry.total);
    }
    totals
}

pub fn compute_category_shares(totals: &[CategoryTotal]) -> Vec<CategoryShare> {
    let grand_total = totals.iter().fold(Decimal::ZERO, |acc, t| acc + t.total);
    if grand_total <= Decimal::ZERO {
        return Vec::new();
    }

    totals
        .iter()
        .map(|t| CategoryShare {
            category: t.category.clone(),
            percent: (t.total / grand_total * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect()
}
