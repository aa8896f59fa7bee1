use crate::config::EngineConfig;
use crate::error::InputError;
use crate::models::transaction::Transaction;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

const MAX_DESCRIPTION_LEN: usize = 255;
const MAX_CATEGORY_LEN: usize = 50;

/// Raw, unvalidated transaction fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Set when editing an existing record; new records get a fresh id.
    pub id: Option<String>,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl TransactionDraft {
    pub fn validate(&self, config: &EngineConfig) -> Result<Transaction, InputError> {
        let amount = parse_amount(&self.amount)?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| InputError::InvalidDate(self.date.trim().to_string()))?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(InputError::EmptyDescription);
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(InputError::DescriptionTooLong);
        }

        let category = if config.categories_enabled {
            let category = self.category.trim();
            if category.is_empty() {
                return Err(InputError::MissingCategory);
            }
            if category.chars().count() > MAX_CATEGORY_LEN {
                return Err(InputError::CategoryTooLong);
            }
            category.to_string()
        } else {
            config.fallback_category.clone()
        };

        let id = match &self.id {
            Some(id) => id.clone(),
            None => Uuid::new_v4().to_string(),
        };

        Ok(Transaction::new(id, date, description.to_string(), amount, category))
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, InputError> {
    let raw = raw.trim();
    match raw.parse::<Decimal>() {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(InputError::InvalidAmount(raw.to_string())),
    }
}

/// Parses `date, description, amount[, category]` into a validated transaction.
pub fn create_transaction(raw_input: &str, config: &EngineConfig) -> Result<Transaction, InputError> {
    let parts: Vec<&str> = raw_input.split(',').map(|s| s.trim()).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(InputError::WrongFieldCount {
            expected: "3 or 4 details separated by commas",
            actual: parts.len(),
        });
    }

    let draft = TransactionDraft {
        id: None,
        date: parts[0].to_string(),
        description: parts[1].to_string(),
        amount: parts[2].to_string(),
        category: parts.get(3).map(|c| c.to_string()).unwrap_or_default(),
    };
    draft.validate(config)
}
