//! Storage initialization
//!
//! Handles first-run setup: directories and header-only store files.

use crate::config::paths::FinancePaths;
use crate::error::LedgerError;

use super::file_io::write_csv_atomic;
use super::records::{BudgetRecord, Record, TransactionRecord};

/// Initialize storage for a fresh installation
///
/// Existing store files are left untouched.
pub fn initialize_storage(paths: &FinancePaths) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    if !paths.transactions_file().exists() {
        write_csv_atomic::<TransactionRecord, _>(
            paths.transactions_file(),
            TransactionRecord::HEADERS,
            &[],
        )?;
    }

    if !paths.budgets_file().exists() {
        write_csv_atomic::<BudgetRecord, _>(paths.budgets_file(), BudgetRecord::HEADERS, &[])?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinancePaths) -> bool {
    !paths.transactions_file().exists() || !paths.budgets_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_header_only_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.reports_dir().exists());
        assert_eq!(
            fs::read_to_string(paths.transactions_file()).unwrap(),
            "id,date,amount,category,type,description\n"
        );
        assert_eq!(
            fs::read_to_string(paths.budgets_file()).unwrap(),
            "category,limit\n"
        );
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        fs::write(paths.budgets_file(), "category,limit\nFood,100.00\n").unwrap();

        initialize_storage(&paths).unwrap();

        assert_eq!(
            fs::read_to_string(paths.budgets_file()).unwrap(),
            "category,limit\nFood,100.00\n"
        );
    }
}
