//! Demo dataset used by `finviz --demo`.

use crate::models::budget::Budget;
use crate::models::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn transaction(id: &str, cents: i64, (y, m, d): (i32, u32, u32), description: &str, category: &str) -> Transaction {
    Transaction::new(
        id.to_string(),
        NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        description.to_string(),
        Decimal::new(cents, 2),
        category.to_string(),
    )
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction("1", 5075, (2025, 3, 10), "Grocery shopping", "Food"),
        transaction("2", 999, (2025, 3, 8), "Spotify subscription", "Entertainment"),
        transaction("3", 3500, (2025, 3, 5), "Gas station", "Transportation"),
        transaction("4", 12730, (2025, 3, 1), "Electricity bill", "Utilities"),
        transaction("5", 2000, (2025, 2, 28), "Movie tickets", "Entertainment"),
    ]
}

pub fn budgets() -> Vec<Budget> {
    [
        ("Food", 400),
        ("Entertainment", 150),
        ("Transportation", 200),
        ("Utilities", 300),
        ("Housing", 1200),
        ("Healthcare", 200),
        ("Shopping", 150),
        ("Personal", 100),
        ("Other", 100),
    ]
    .into_iter()
    .map(|(category, amount)| Budget::new(category, Decimal::from(amount)))
    .collect()
}
