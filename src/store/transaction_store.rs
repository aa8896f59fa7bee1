use crate::config::EngineConfig;
use crate::error::StoreError;
use crate::models::transaction::Transaction;
use crate::operations::add::TransactionDraft;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records, rejecting duplicate ids.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self, StoreError> {
        transactions
            .into_iter()
            .try_fold(Self::new(), |store, transaction| store.insert(transaction))
    }

    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Validates `draft` and appends it under a freshly generated id.
    pub fn add(&self, draft: &TransactionDraft, config: &EngineConfig) -> Result<Self, StoreError> {
        let draft = TransactionDraft {
            id: None,
            ..draft.clone()
        };
        self.insert(draft.validate(config)?)
    }

    /// Appends a record whose id must not already be present.
    pub fn insert(&self, transaction: Transaction) -> Result<Self, StoreError> {
        if self.get(&transaction.id).is_some() {
            return Err(StoreError::DuplicateTransactionId(transaction.id));
        }
        tracing::debug!(id = %transaction.id, "adding transaction");
        let mut transactions = self.transactions.clone();
        transactions.push(transaction);
        Ok(Self { transactions })
    }

    /// Replaces the record that shares `transaction.id`, keeping its position.
    pub fn edit(&self, transaction: Transaction) -> Result<Self, StoreError> {
        let pos = self
            .transactions
            .iter()
            .position(|t| t.id == transaction.id)
            .ok_or_else(|| StoreError::TransactionNotFound(transaction.id.clone()))?;
        tracing::debug!(id = %transaction.id, "editing transaction");
        let mut transactions = self.transactions.clone();
        transactions[pos] = transaction;
        Ok(Self { transactions })
    }

    pub fn delete(&self, id: &str) -> Result<Self, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::TransactionNotFound(id.to_string()));
        }
        tracing::debug!(id, "deleting transaction");
        let transactions = self.transactions.iter().filter(|t| t.id != id).cloned().collect();
        Ok(Self { transactions })
    }

    /// Records sorted by date, newest first. Same-day records keep insertion order.
    pub fn newest_first(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    pub fn search_by_category(&self, category: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.category.eq_ignore_ascii_case(category))
            .collect()
    }
}
