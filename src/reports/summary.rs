//! Financial Summary
//!
//! Totals income and expenses across the whole ledger.

use serde::Serialize;

use crate::display::report::format_percentage;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionType};

/// Ledger-wide income, expense and savings totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense; negative when spending exceeds income
    pub net_savings: Money,
    /// Net savings as a percentage of income, 0 when there is no income
    pub savings_rate: f64,
}

impl FinancialSummary {
    /// Summarize the given transactions, or None when there are none
    pub fn from_transactions(transactions: &[Transaction]) -> LedgerResult<Option<Self>> {
        if transactions.is_empty() {
            return Ok(None);
        }

        let total_of = |kind: TransactionType| -> LedgerResult<Money> {
            Money::checked_sum(
                transactions
                    .iter()
                    .filter(|t| t.kind() == kind)
                    .map(Transaction::amount),
            )
            .ok_or_else(LedgerError::amount_overflow)
        };

        let total_income = total_of(TransactionType::Income)?;
        let total_expense = total_of(TransactionType::Expense)?;
        let net_savings = total_income - total_expense;

        Ok(Some(Self {
            total_income,
            total_expense,
            net_savings,
            savings_rate: net_savings.percent_of(total_income),
        }))
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Financial Summary\n");
        output.push_str(&"=".repeat(36));
        output.push('\n');
        output.push_str(&format!(
            "{:<16}{:>20}\n",
            "Total Income",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16}{:>20}\n",
            "Total Expenses",
            self.total_expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16}{:>20}\n",
            "Net Savings",
            self.net_savings.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "{:<16}{:>20}\n",
            "Savings Rate",
            format_percentage(self.savings_rate)
        ));
        output
    }
}
