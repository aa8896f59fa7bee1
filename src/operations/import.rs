use super::add::TransactionDraft;
use crate::config::EngineConfig;
use crate::error::{ImportError, InputError};
use crate::store::{BudgetStore, TransactionStore};
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;

fn open_reader(path: &Path) -> Result<csv::Reader<File>, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;

    Ok(csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

/// One-based line in the file where a record starts. Skipped blank lines
/// still count.
fn physical_line(position: &csv::Position) -> usize {
    position.line() as usize
}

/// Reads `date,description,amount[,category]` rows. Rows without an id get a
/// freshly generated one.
pub fn import_transactions(path: &Path, config: &EngineConfig) -> Result<TransactionStore, ImportError> {
    let mut reader = open_reader(path)?;
    let mut store = TransactionStore::new();

    for (record_index, result) in reader.records().enumerate() {
        let fallback = record_index + 1;
        let record = result.map_err(|source| ImportError::Csv {
            line: source.position().map_or(fallback, physical_line),
            source,
        })?;
        let line = record.position().map_or(fallback, physical_line);

        if record.len() != 3 && record.len() != 4 {
            return Err(ImportError::Input {
                line,
                source: InputError::WrongFieldCount {
                    expected: "3 or 4 columns",
                    actual: record.len(),
                },
            });
        }

        let draft = TransactionDraft {
            id: None,
            date: record.get(0).unwrap_or("").to_string(),
            description: record.get(1).unwrap_or("").to_string(),
            amount: record.get(2).unwrap_or("").to_string(),
            category: record.get(3).unwrap_or("").to_string(),
        };
        let transaction = draft
            .validate(config)
            .map_err(|source| ImportError::Input { line, source })?;
        store = store
            .insert(transaction)
            .map_err(|source| ImportError::Store { line, source })?;
    }

    tracing::info!(path = %path.display(), count = store.len(), "imported transactions");
    Ok(store)
}

/// Reads `category,amount` rows.
pub fn import_budgets(path: &Path) -> Result<BudgetStore, ImportError> {
    let mut reader = open_reader(path)?;
    let mut store = BudgetStore::new();

    for (record_index, result) in reader.records().enumerate() {
        let fallback = record_index + 1;
        let record = result.map_err(|source| ImportError::Csv {
            line: source.position().map_or(fallback, physical_line),
            source,
        })?;
        let line = record.position().map_or(fallback, physical_line);

        if record.len() != 2 {
            return Err(ImportError::Input {
                line,
                source: InputError::WrongFieldCount {
                    expected: "2 columns",
                    actual: record.len(),
                },
            });
        }

        let category = record.get(0).unwrap_or("");
        let raw_amount = record.get(1).unwrap_or("");
        let amount = raw_amount
            .parse::<Decimal>()
            .map_err(|_| ImportError::Input {
                line,
                source: InputError::InvalidAmount(raw_amount.to_string()),
            })?;
        store = store
            .upsert(category, amount)
            .map_err(|source| ImportError::Store { line, source })?;
    }

    tracing::info!(path = %path.display(), count = store.snapshot().len(), "imported budgets");
    Ok(store)
}
