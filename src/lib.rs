//! finance-tracker - personal finance ledger
//!
//! Records income and expense transactions, enforces per-category monthly
//! budget limits, and derives summaries, monthly and category reports, and
//! chart datasets from the recorded data.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, budgets, money and months
//! - `storage`: Transaction and budget stores over pluggable record backends
//! - `reports`: Read-only aggregations over the stores
//! - `tracker`: The facade the CLI talks to
//! - `export`: Report files and chart JSON
//! - `logging`: Log file setup for the binary
//!
//! # Example
//!
//! ```rust
//! use finance_tracker::Tracker;
//!
//! let tracker = Tracker::in_memory();
//! tracker.add_transaction("2024-01-15", "1000", "Salary", "income", None)?;
//! tracker.add_transaction("2024-01-20", "400", "Rent", "expense", None)?;
//!
//! let summary = tracker.financial_summary()?.expect("ledger has transactions");
//! assert_eq!(summary.savings_rate, 60.0);
//! # Ok::<(), finance_tracker::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tracker;

#[cfg(test)]
mod test_support;

pub use error::{LedgerError, LedgerResult};
pub use tracker::Tracker;
