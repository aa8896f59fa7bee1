//! Spending summaries, budget utilization and insights computed from
//! in-memory snapshots of expense transactions and category budgets.

pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
pub mod operations;
pub mod store;

pub use aggregation::{Dashboard, build_dashboard};
pub use config::EngineConfig;
pub use models::budget::Budget;
pub use models::transaction::{Transaction, UNCATEGORIZED};
