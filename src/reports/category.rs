//! Category Report
//!
//! Income, expense and net totals per category.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::display::report::{separator, truncate};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionType};

/// Totals for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub income: Money,
    pub expense: Money,
    /// Income minus expense for the category
    pub net: Money,
}

/// Category Report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// One row per category, sorted by name
    pub rows: Vec<CategoryRow>,
}

impl CategoryReport {
    /// Group transactions by category, or None when there are none
    pub fn from_transactions(transactions: &[Transaction]) -> LedgerResult<Option<Self>> {
        if transactions.is_empty() {
            return Ok(None);
        }

        let mut totals: BTreeMap<&str, (Money, Money)> = BTreeMap::new();
        for txn in transactions {
            let (income, expense) = totals.entry(txn.category()).or_default();
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
            .map(|(category, (income, expense))| CategoryRow {
                category: category.to_string(),
                income,
                expense,
                net: income - expense,
            })
            .collect();

        Ok(Some(Self { rows }))
    }

    /// Get the row for a category (exact match)
    pub fn row(&self, category: &str) -> Option<&CategoryRow> {
        self.rows.iter().find(|r| r.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{:<20} {:>14} {:>14} {:>14}\n",
            "Category", "Income", "Expense", "Net"
        ));
        output.push_str(&separator(65));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>14} {:>14} {:>14}\n",
                truncate(&row.category, 20),
                row.income.format_with_symbol(symbol),
                row.expense.format_with_symbol(symbol),
                row.net.format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the report as CSV: a header row and one row per category
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut out = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        out.write_record(["category", "income", "expense", "net"])
            .map_err(export_err)?;

        for row in &self.rows {
            out.write_record([
                row.category.clone(),
                row.income.to_decimal_string(),
                row.expense.to_decimal_string(),
                row.net.to_decimal_string(),
            ])
            .map_err(export_err)?;
        }

        out.flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        Ok(())
    }
}
