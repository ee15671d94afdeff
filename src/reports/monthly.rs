//! Monthly Report
//!
//! Income, expense and savings per calendar month.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display::report::separator;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Month, Transaction, TransactionType};

/// Totals for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyRow {
    pub month: Month,
    pub income: Money,
    pub expense: Money,
    /// Income minus expense for the month
    pub savings: Money,
}

/// Monthly Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    /// One row per month with transactions, oldest first
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyReport {
    /// Group transactions by month, or None when there are none
    pub fn from_transactions(transactions: &[Transaction]) -> LedgerResult<Option<Self>> {
        if transactions.is_empty() {
            return Ok(None);
        }

        let mut totals: BTreeMap<Month, (Money, Money)> = BTreeMap::new();
        for txn in transactions {
            let (income, expense) = totals.entry(Month::of(txn.date())).or_default();
            let column = match txn.kind() {
                TransactionType::Income => income,
                TransactionType::Expense => expense,
            };
            *column = column
                .checked_add(txn.amount())
                .ok_or_else(LedgerError::amount_overflow)?;
        }

        let rows = totals
            .into_iter()
            .map(|(month, (income, expense))| MonthlyRow {
                month,
                income,
                expense,
                savings: income - expense,
            })
            .collect();

        Ok(Some(Self { rows }))
    }

    /// Get the row for a month, if it had any transactions
    pub fn row(&self, month: Month) -> Option<&MonthlyRow> {
        self.rows.iter().find(|r| r.month == month)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<10} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expense", "Savings"
        ));
        output.push_str(&separator(55));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:>14} {:>14} {:>14}\n",
                row.month.to_string(),
                row.income.format_with_symbol(symbol),
                row.expense.format_with_symbol(symbol),
                row.savings.format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the report as CSV: a header row and one row per month
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        out.write_record(["month", "income", "expense", "savings"])
            .map_err(export_err)?;

        for row in &self.rows {
            out.write_record([
                row.month.to_string(),
                row.income.to_decimal_string(),
                row.expense.to_decimal_string(),
                row.savings.to_decimal_string(),
            ])
            .map_err(export_err)?;
        }

        out.flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}
