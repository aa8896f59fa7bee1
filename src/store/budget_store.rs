use crate::error::StoreError;
use crate::models::budget::Budget;
use rust_decimal::Decimal;

/// Ordered budgets, at most one per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetStore {
    budgets: Vec<Budget>,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing budgets. A later entry for the same
    /// category replaces the earlier one in place.
    pub fn from_budgets(budgets: Vec<Budget>) -> Result<Self, StoreError> {
        budgets
            .into_iter()
            .try_fold(Self::new(), |store, budget| store.upsert(&budget.category, budget.amount))
    }

    pub fn snapshot(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn get(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Changes the amount of an existing budget.
    pub fn update_amount(&self, category: &str, amount: Decimal) -> Result<Self, StoreError> {
        check_amount(category, amount)?;
        let pos = self
            .position(category)
            .ok_or_else(|| StoreError::BudgetNotFound(category.to_string()))?;
        tracing::debug!(category, %amount, "updating budget");
        let mut budgets = self.budgets.clone();
        budgets[pos].amount = amount;
        Ok(Self { budgets })
    }

    /// Applies a batch of amount edits. Either every edit applies or none do.
    pub fn apply_edits(&self, edits: &[(String, Decimal)]) -> Result<Self, StoreError> {
        edits
            .iter()
            .try_fold(self.clone(), |store, (category, amount)| store.update_amount(category, *amount))
    }

    /// Sets a budget, appending it when the category is new.
    pub fn upsert(&self, category: &str, amount: Decimal) -> Result<Self, StoreError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(StoreError::EmptyCategory);
        }
        check_amount(category, amount)?;
        let mut budgets = self.budgets.clone();
        match self.position(category) {
            Some(pos) => budgets[pos].amount = amount,
            None => budgets.push(Budget::new(category, amount)),
        }
        Ok(Self { budgets })
    }

    pub fn remove(&self, category: &str) -> Result<Self, StoreError> {
        if self.position(category).is_none() {
            return Err(StoreError::BudgetNotFound(category.to_string()));
        }
        tracing::debug!(category, "removing budget");
        let budgets = self.budgets.iter().filter(|b| b.category != category).cloned().collect();
        Ok(Self { budgets })
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.budgets.iter().position(|b| b.category == category)
    }
}

fn check_amount(category: &str, amount: Decimal) -> Result<(), StoreError> {
    if amount < Decimal::ZERO {
        return Err(StoreError::NegativeBudget {
            category: category.to_string(),
            amount,
        });
    }
    Ok(())
}
