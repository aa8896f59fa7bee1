use crate::models::budget::Budget;
use crate::models::transaction::Transaction;
use rust_decimal::Decimal;
use serde::Serialize;

/// How much of one budget has been spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetUtilization {
    pub category: String,
    pub budget: Decimal,
    pub actual: Decimal,
    /// Never negative; overspend shows up as `actual > budget`.
    pub remaining: Decimal,
    /// Clamped to `0..=100`, and zero for a zero budget.
    pub percent_used: Decimal,
}

impl BudgetUtilization {
    pub fn is_overspent(&self) -> bool {
        self.budget > Decimal::ZERO && self.actual > self.budget
    }

    pub fn overspend(&self) -> Decimal {
        (self.actual - self.budget).max(Decimal::ZERO)
    }
}

/// Budget, actual and remaining summed over every budget entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct BudgetTotals {
    pub budget: Decimal,
    pub actual: Decimal,
    pub remaining: Decimal,
}

impl BudgetTotals {
    pub fn from_utilization(utilization: &[BudgetUtilization]) -> Self {
        utilization.iter().fold(Self::default(), |acc, u| Self {
            budget: acc.budget + u.budget,
            actual: acc.actual + u.actual,
            remaining: acc.remaining + u.remaining,
        })
    }
}

/// One entry per budget, in budget order. Transactions match a budget by
/// exact, case-sensitive category name.
pub fn compute_budget_utilization(transactions: &[Transaction], budgets: &[Budget]) -> Vec<BudgetUtilization> {
    budgets
        .iter()
        .map(|budget| {
            let actual = transactions
                .iter()
                .filter(|t| t.category == budget.category)
                .fold(Decimal::ZERO, |acc, t| acc + t.amount);

            let remaining = (budget.amount - actual).max(Decimal::ZERO);
            let percent_used = percent_used(actual, budget.amount);

            BudgetUtilization {
                category: budget.category.clone(),
                budget: budget.amount,
                actual,
                remaining,
                percent_used,
            }
        })
        .collect()
}

fn percent_used(actual: Decimal, budget: Decimal) -> Decimal {
    if budget <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if actual >= budget {
        return Decimal::ONE_HUNDRED;
    }
    actual
        .checked_div(budget)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map_or(Decimal::ONE_HUNDRED, |percent| percent.min(Decimal::ONE_HUNDRED))
}
