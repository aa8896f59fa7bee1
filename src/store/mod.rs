//! Immutable snapshots of the caller's transactions and budgets. Every
//! mutation returns a new store; the receiver is left untouched so earlier
//! snapshots stay valid for the aggregation engine.

pub mod budget_store;
pub mod sample;
pub mod transaction_store;

pub use budget_store::BudgetStore;
pub use transaction_store::TransactionStore;
