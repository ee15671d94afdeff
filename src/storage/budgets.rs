//! Budget store
//!
//! Budgets are keyed by category; every mutation rewrites the whole store,
//! which keeps at most one budget per category.

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::Budget;

use super::backend::{CsvBackend, RecordBackend};
use super::records::BudgetRecord;

/// Store owning the canonical list of budgets
pub struct BudgetStore {
    backend: Box<dyn RecordBackend<BudgetRecord>>,
}

impl BudgetStore {
    /// Create a store over any backend
    pub fn new(backend: impl RecordBackend<BudgetRecord> + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a store backed by a CSV file
    pub fn csv(path: PathBuf) -> Self {
        Self::new(CsvBackend::<BudgetRecord>::new(path))
    }

    /// Load every valid budget, skipping invalid records with a warning
    pub fn load_all(&self) -> LedgerResult<Vec<Budget>> {
        let records = match self.backend.read_all() {
            Ok(records) => records,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let budgets = records
            .into_iter()
            .filter_map(|record| {
                let raw = format!("{:?}", record);
                match record.into_budget() {
                    Ok(budget) => Some(budget),
                    Err(e) => {
                        tracing::warn!("Skipping invalid budget: {}. Error: {}", raw, e);
                        None
                    }
                }
            })
            .collect();

        Ok(budgets)
    }

    /// Create or replace the budget for a category
    pub fn set(&self, category: &str, limit: &str) -> LedgerResult<Budget> {
        let budget = Budget::new(category, limit)?;

        let mut budgets = by_category(self.load_all()?);
        match budgets.iter_mut().find(|b| b.category() == category) {
            Some(existing) => *existing = budget.clone(),
            None => budgets.push(budget.clone()),
        }

        self.write(&budgets)
            .inspect_err(|e| tracing::error!("Failed to set budget: {}", e))?;

        Ok(budget)
    }

    /// Remove the budget for a category
    ///
    /// Returns true once the rewrite succeeds, whether or not the category
    /// had a budget.
    pub fn delete(&self, category: &str) -> LedgerResult<bool> {
        let remaining: Vec<Budget> = self
            .load_all()?
            .into_iter()
            .filter(|b| b.category() != category)
            .collect();

        self.write(&remaining)
            .inspect_err(|e| tracing::error!("Failed to delete budget: {}", e))?;

        Ok(true)
    }

    fn write(&self, budgets: &[Budget]) -> LedgerResult<()> {
        let records: Vec<BudgetRecord> = budgets.iter().map(BudgetRecord::from).collect();
        self.backend.write_all(&records)
    }
}

/// Collapse duplicate categories, keeping the last limit at the first position
fn by_category(budgets: Vec<Budget>) -> Vec<Budget> {
    let mut unique: Vec<Budget> = Vec::with_capacity(budgets.len());
    for budget in budgets {
        match unique.iter_mut().find(|b| b.category() == budget.category()) {
            Some(existing) => *existing = budget,
            None => unique.push(budget),
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::models::Money;
    use crate::storage::backend::MemoryBackend;
    use crate::test_support::capture_logs;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, PathBuf, BudgetStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.csv");
        let store = BudgetStore::csv(path.clone());
        (temp_dir, path, store)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, _path, store) = create_test_store();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_set_twice_keeps_one_budget() {
        let (_temp_dir, _path, store) = create_test_store();

        store.set("Food", "100").unwrap();
        store.set("Rent", "900").unwrap();
        let latest = store.set("Food", "150").unwrap();

        let budgets = store.load_all().unwrap();
        let food: Vec<_> = budgets.iter().filter(|b| b.category() == "Food").collect();
        assert_eq!(food.len(), 1);
        assert_eq!(food[0], &latest);
        assert_eq!(food[0].limit(), Money::from_cents(15_000));
        assert_eq!(budgets.len(), 2);
    }

    #[test]
    fn test_set_invalid_limit_does_not_write() {
        let (_temp_dir, path, store) = create_test_store();
        assert!(store.set("Food", "0").unwrap_err().is_validation());
        assert!(store.set("Food", "-3").unwrap_err().is_validation());
        assert!(!path.exists());
    }

    #[test]
    fn test_categories_are_case_sensitive_keys() {
        let (_temp_dir, _path, store) = create_test_store();
        store.set("Food", "100").unwrap();
        store.set("food", "50").unwrap();
        assert_eq!(store.load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (_temp_dir, path, store) = create_test_store();
        store.set("Food", "100").unwrap();
        store.set("Rent", "900").unwrap();

        assert!(store.delete("Food").unwrap());
        let after_first = fs::read_to_string(&path).unwrap();
        assert!(store.delete("Food").unwrap());

        assert_eq!(after_first, fs::read_to_string(&path).unwrap());
        let remaining = store.load_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].category(), "Rent");
    }

    #[test]
    fn test_set_collapses_duplicates_from_disk() {
        let (_temp_dir, path, store) = create_test_store();
        fs::write(&path, "category,limit\nFood,10\nRent,900\nFood,20\n").unwrap();

        store.set("Fun", "30").unwrap();

        let budgets = store.load_all().unwrap();
        let categories: Vec<_> = budgets.iter().map(Budget::category).collect();
        assert_eq!(categories, vec!["Food", "Rent", "Fun"]);
        assert_eq!(budgets[0].limit(), Money::from_cents(2_000));
    }

    #[test]
    fn test_invalid_records_are_skipped_with_warning() {
        let (_temp_dir, path, store) = create_test_store();
        fs::write(&path, "category,limit\nFood,abc\nRent,900\n").unwrap();

        let (budgets, logs) = capture_logs(|| store.load_all().unwrap());

        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].category(), "Rent");
        assert!(logs.contains("Skipping invalid budget"));
    }

    #[test]
    fn test_memory_backend_store() {
        let store = BudgetStore::new(MemoryBackend::<BudgetRecord>::new());
        store.set("Food", "10").unwrap();
        store.set("Food", "12").unwrap();
        let budgets = store.load_all().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].limit(), Money::from_cents(1_200));
    }

    #[test]
    fn test_unreadable_store_is_an_error() {
        let (_temp_dir, path, store) = create_test_store();
        fs::create_dir_all(&path).unwrap();

        let err = store.load_all().unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)), "unexpected error: {err:?}");
        assert!(store.set("Food", "10").is_err());
    }

    #[test]
    fn test_failed_rewrite_leaves_store_intact() {
        let (temp_dir, path, store) = create_test_store();
        store.set("Food", "100").unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let temp_path = temp_dir.path().join("budgets.csv.tmp");
        fs::create_dir(&temp_path).unwrap();

        assert!(store.set("Food", "250").is_err());
        assert!(store.delete("Food").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert!(temp_path.is_dir());
        assert_eq!(store.load_all().unwrap()[0].limit(), Money::from_cents(10_000));
    }
}
