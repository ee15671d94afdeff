//! Analyzer
//!
//! Read-only aggregations over the stores. Every call reloads from storage,
//! so results always reflect the latest writes.

use crate::error::LedgerResult;
use crate::storage::{BudgetStore, TransactionStore};

use super::budget_status::BudgetStatus;
use super::category::CategoryReport;
use super::charts::ChartData;
use super::monthly::MonthlyReport;
use super::summary::FinancialSummary;

/// Computes summaries and reports from the stored ledger
pub struct Analyzer<'a> {
    transactions: &'a TransactionStore,
    budgets: &'a BudgetStore,
}

impl<'a> Analyzer<'a> {
    /// Create a new analyzer over the given stores
    pub fn new(transactions: &'a TransactionStore, budgets: &'a BudgetStore) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    /// Totals across the whole ledger, or None when it is empty
    pub fn financial_summary(&self) -> LedgerResult<Option<FinancialSummary>> {
        let transactions = self.transactions.load_all()?;
        FinancialSummary::from_transactions(&transactions)
    }

    /// Per-month totals, or None when the ledger is empty
    pub fn monthly_report(&self) -> LedgerResult<Option<MonthlyReport>> {
        let transactions = self.transactions.load_all()?;
        MonthlyReport::from_transactions(&transactions)
    }

    /// Per-category totals, or None when the ledger is empty
    pub fn category_report(&self) -> LedgerResult<Option<CategoryReport>> {
        let transactions = self.transactions.load_all()?;
        CategoryReport::from_transactions(&transactions)
    }

    /// Spending against every budget, in budget order
    pub fn budget_status(&self) -> LedgerResult<Vec<BudgetStatus>> {
        let budgets = self.budgets.load_all()?;
        if budgets.is_empty() {
            return Ok(Vec::new());
        }
        let transactions = self.transactions.load_all()?;
        BudgetStatus::for_budgets(&budgets, &transactions)
    }

    /// Chart datasets, or None when the ledger is empty
    pub fn chart_data(&self) -> LedgerResult<Option<ChartData>> {
        let transactions = self.transactions.load_all()?;
        if transactions.is_empty() {
            return Ok(None);
        }
        let budgets = self.budgets.load_all()?;
        ChartData::build(&transactions, &budgets)
    }
}
