use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections raised while turning raw user input into a transaction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid amount '{0}'. Please enter a valid amount")]
    InvalidAmount(String),
    #[error("Invalid date '{0}'. Please use YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Please enter a description")]
    EmptyDescription,
    #[error("Description too long")]
    DescriptionTooLong,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Category too long")]
    CategoryTooLong,
    #[error("Invalid number of details provided. Expected {expected} but got {actual}")]
    WrongFieldCount { expected: &'static str, actual: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Transaction with ID {0} not found")]
    TransactionNotFound(String),
    #[error("Transaction with ID {0} already exists")]
    DuplicateTransactionId(String),
    #[error("Budget for category '{0}' not found")]
    BudgetNotFound(String),
    #[error("Budget for category '{category}' cannot be negative ({amount})")]
    NegativeBudget { category: String, amount: Decimal },
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to open file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV parse error on line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Line {line}: {source}")]
    Input {
        line: usize,
        #[source]
        source: InputError,
    },
    #[error("Line {line}: {source}")]
    Store {
        line: usize,
        #[source]
        source: StoreError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("recent_window_days must be between 0 and {max}, got {0}", max = crate::config::MAX_RECENT_WINDOW_DAYS)]
    RecentWindowOutOfRange(i64),
}
