//! Tracker facade
//!
//! The single entry point used by the CLI. It owns the two stores, hands out
//! an [`Analyzer`] bound to them, and logs every operation it runs.

use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::config::paths::FinancePaths;
use crate::error::LedgerResult;
use crate::export::write_report_file;
use crate::models::{Budget, Transaction};
use crate::reports::{
    Analyzer, BudgetStatus, CategoryReport, ChartData, FinancialSummary, MonthlyReport,
};
use crate::storage::Storage;

/// Facade over the transaction and budget stores
pub struct Tracker {
    storage: Storage,
}

impl Tracker {
    /// Create a tracker over existing stores
    pub fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }

    /// Open the CSV-backed ledger under the configured data directory
    pub fn open(paths: &FinancePaths) -> Self {
        Self::with_storage(Storage::open(paths))
    }

    /// A tracker whose ledger lives only in memory
    pub fn in_memory() -> Self {
        Self::with_storage(Storage::in_memory())
    }

    /// Read-only views over the current stores
    pub fn analyzer(&self) -> Analyzer<'_> {
        Analyzer::new(&self.storage.transactions, &self.storage.budgets)
    }

    pub fn add_transaction(
        &self,
        date: &str,
        amount: &str,
        category: &str,
        kind: &str,
        description: Option<&str>,
    ) -> LedgerResult<Transaction> {
        logged(
            "add_transaction",
            (date, amount, category, kind, description),
            || {
                self.storage
                    .transactions
                    .add(date, amount, category, kind, description)
            },
        )
    }

    pub fn get_transactions(&self) -> LedgerResult<Vec<Transaction>> {
        logged("get_transactions", (), || self.storage.transactions.load_all())
    }

    pub fn delete_transaction(&self, id: &str) -> LedgerResult<bool> {
        logged("delete_transaction", id, || self.storage.transactions.delete(id))
    }

    pub fn set_budget(&self, category: &str, limit: &str) -> LedgerResult<Budget> {
        logged("set_budget", (category, limit), || {
            self.storage.budgets.set(category, limit)
        })
    }

    pub fn get_budgets(&self) -> LedgerResult<Vec<Budget>> {
        logged("get_budgets", (), || self.storage.budgets.load_all())
    }

    pub fn delete_budget(&self, category: &str) -> LedgerResult<bool> {
        logged("delete_budget", category, || self.storage.budgets.delete(category))
    }

    pub fn financial_summary(&self) -> LedgerResult<Option<FinancialSummary>> {
        logged("financial_summary", (), || self.analyzer().financial_summary())
    }

    pub fn monthly_report(&self) -> LedgerResult<Option<MonthlyReport>> {
        logged("monthly_report", (), || self.analyzer().monthly_report())
    }

    pub fn category_report(&self) -> LedgerResult<Option<CategoryReport>> {
        logged("category_report", (), || self.analyzer().category_report())
    }

    pub fn budget_status(&self) -> LedgerResult<Vec<BudgetStatus>> {
        logged("budget_status", (), || self.analyzer().budget_status())
    }

    pub fn chart_data(&self) -> LedgerResult<Option<ChartData>> {
        logged("chart_data", (), || self.analyzer().chart_data())
    }

    /// Write the monthly report to a timestamped CSV in `dir`
    ///
    /// Returns None, writing nothing, when the ledger is empty.
    pub fn export_monthly_report(&self, dir: &Path) -> LedgerResult<Option<PathBuf>> {
        logged("export_monthly_report", dir, || {
            self.analyzer()
                .monthly_report()?
                .map(|report| {
                    write_report_file(dir, "monthly_report", |w| report.export_csv(w))
                })
                .transpose()
        })
    }

    /// Write the category report to a timestamped CSV in `dir`
    ///
    /// Returns None, writing nothing, when the ledger is empty.
    pub fn export_category_report(&self, dir: &Path) -> LedgerResult<Option<PathBuf>> {
        logged("export_category_report", dir, || {
            self.analyzer()
                .category_report()?
                .map(|report| {
                    write_report_file(dir, "category_report", |w| report.export_csv(w))
                })
                .transpose()
        })
    }
}

/// Run one facade operation, logging its name and arguments
///
/// Emits `info` on success and `error` on failure; the result passes
/// through untouched.
fn logged<T, A, F>(operation: &str, args: A, f: F) -> LedgerResult<T>
where
    A: Debug,
    F: FnOnce() -> LedgerResult<T>,
{
    let result = f();
    match &result {
        Ok(_) => tracing::info!(operation, args = ?args, "Operation completed"),
        Err(e) => tracing::error!(operation, args = ?args, error = %e, "Operation failed"),
    }
    result
}
