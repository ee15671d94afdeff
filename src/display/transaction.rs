//! Transaction display formatting
//!
//! Register-style listing of ledger transactions.

use super::report::truncate;
use crate::models::{Transaction, DATE_FORMAT};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:<36} {} {:<7} {:<16} {:>12}  {}",
        txn.id().as_str(),
        txn.date().format(DATE_FORMAT),
        txn.kind().as_str(),
        truncate(txn.category(), 16),
        txn.amount().format_with_symbol(symbol),
        txn.description()
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<36} {:<10} {:<7} {:<16} {:>12}  {}\n",
        "ID", "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id()));
    output.push_str(&format!("Date:        {}\n", txn.date().format(DATE_FORMAT)));
    output.push_str(&format!("Type:        {}\n", txn.kind()));
    output.push_str(&format!("Category:    {}\n", txn.category()));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount().format_with_symbol(symbol)
    ));

    if !txn.description().is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description()));
    }

    output
}
