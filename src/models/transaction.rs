use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Category assigned when none was given or categorization is turned off.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single dated expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
}

impl Transaction {
    pub fn new(id: String, date: NaiveDate, description: String, amount: Decimal, category: String) -> Self {
        Self {
            id,
            date,
            description,
            amount,
            category,
        }
    }

    /// The category used for grouping. Blank categories fold to `fallback`.
    pub fn category_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let category = self.category.trim();
        if category.is_empty() { fallback } else { &self.category }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction_with_category(category: &str) -> Transaction {
        Transaction::new(
            "1".to_string(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            "Grocery shopping".to_string(),
            Decimal::new(5075, 2),
            category.to_string(),
        )
    }

    #[test]
    fn test_category_or_keeps_named_category() {
        let tx = transaction_with_category("Food");
        assert_eq!(tx.category_or(UNCATEGORIZED), "Food");
    }

    #[test]
    fn test_category_or_folds_blank_category() {
        assert_eq!(transaction_with_category("").category_or(UNCATEGORIZED), UNCATEGORIZED);
        assert_eq!(transaction_with_category("   ").category_or(UNCATEGORIZED), UNCATEGORIZED);
    }
}
