use rust_decimal::Decimal;
use serde::Serialize;

/// Spending ceiling for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Budget {
    pub category: String,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}
