//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::format_budget_list;
pub use transaction::{format_transaction_details, format_transaction_register, format_transaction_row};
