//! Storage layer for the finance tracker
//!
//! Provides the transaction and budget stores on top of pluggable record
//! backends: CSV files with atomic rewrites, or an in-memory map.

pub mod backend;
pub mod budgets;
pub mod file_io;
pub mod init;
pub mod records;
pub mod transactions;

pub use backend::{CsvBackend, MemoryBackend, RecordBackend};
pub use budgets::BudgetStore;
pub use init::initialize_storage;
pub use records::{BudgetRecord, Record, TransactionRecord};
pub use transactions::TransactionStore;

use crate::config::paths::FinancePaths;

/// The two ledger stores, opened against the same data directory
pub struct Storage {
    pub transactions: TransactionStore,
    pub budgets: BudgetStore,
}

impl Storage {
    /// CSV-backed stores under the configured data directory
    pub fn open(paths: &FinancePaths) -> Self {
        Self {
            transactions: TransactionStore::csv(paths.transactions_file()),
            budgets: BudgetStore::csv(paths.budgets_file()),
        }
    }

    /// Stores that live only in memory
    pub fn in_memory() -> Self {
        Self {
            transactions: TransactionStore::new(MemoryBackend::<TransactionRecord>::new()),
            budgets: BudgetStore::new(MemoryBackend::<BudgetRecord>::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_uses_configured_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths);

        storage.budgets.set("Food", "100").unwrap();
        storage
            .transactions
            .add("2024-01-01", "5", "Food", "expense", None)
            .unwrap();

        assert!(paths.budgets_file().exists());
        assert!(paths.transactions_file().exists());
    }
}
