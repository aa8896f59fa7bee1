use super::round_cents;
use crate::models::transaction::Transaction;
use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySeriesPoint {
    /// `YYYY-MM`, which sorts chronologically as a plain string.
    pub month_key: String,
    pub total: Decimal,
}

impl MonthlySeriesPoint {
    /// Axis label in `MM/YYYY` form.
    pub fn label(&self) -> String {
        match self.month_key.split_once('-') {
            Some((year, month)) => format!("{}/{}", month, year),
            None => self.month_key.clone(),
        }
    }
}

pub fn month_key(transaction: &Transaction) -> String {
    format!("{:04}-{:02}", transaction.date.year(), transaction.date.month())
}

/// Totals spending per calendar month, oldest month first.
pub fn compute_monthly_series(transactions: &[Transaction]) -> Vec<MonthlySeriesPoint> {
    let mut months: BTreeMap<String, Decimal> = BTreeMap::new();
    for transaction in transactions {
        *months.entry(month_key(transaction)).or_insert(Decimal::ZERO) += transaction.amount;
    }

    months
        .into_iter()
        .map(|(month_key, total)| MonthlySeriesPoint {
            month_key,
            total: round_cents(total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn tx(amount: &str, year: i32, month: u32, day: u32) -> Transaction {
        Transaction::new(
            format!("{}-{}-{}", year, month, day),
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            "Test Description".to_string(),
            Decimal::from_str(amount).unwrap(),
            "Food".to_string(),
        )
    }

    #[test]
    fn test_empty_series() {
        assert!(compute_monthly_series(&[]).is_empty());
    }

    #[test]
    fn test_groups_and_sorts_months() {
        let transactions = vec![
            tx("50.75", 2025, 3, 10),
            tx("20.00", 2025, 2, 28),
            tx("9.99", 2025, 3, 8),
            tx("12.00", 2024, 12, 31),
        ];

        let series = compute_monthly_series(&transactions);
        let keys: Vec<&str> = series.iter().map(|p| p.month_key.as_str()).collect();
        assert_eq!(keys, vec!["2024-12", "2025-02", "2025-03"]);
        assert_eq!(series[2].total, Decimal::from_str("60.74").unwrap());
    }

    #[test]
    fn test_one_point_per_distinct_month() {
        let transactions: Vec<Transaction> = (1..=28).map(|day| tx("1.00", 2025, 2, day)).collect();

        let series = compute_monthly_series(&transactions);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].total, Decimal::from(28));
    }

    #[test]
    fn test_totals_are_rounded_to_cents() {
        let transactions = vec![tx("0.333", 2025, 1, 1), tx("0.333", 2025, 1, 2)];
        let series = compute_monthly_series(&transactions);
        assert_eq!(series[0].total, Decimal::from_str("0.67").unwrap());
    }

    #[test]
    fn test_label_format() {
        let point = MonthlySeriesPoint {
            month_key: "2025-03".to_string(),
            total: Decimal::ZERO,
        };
        assert_eq!(point.label(), "03/2025");
    }
}
