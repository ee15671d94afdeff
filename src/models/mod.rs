//! Core data models for the finance tracker
//!
//! This module contains the value objects that make up the ledger:
//! transactions, category budgets, and the money and month types they use.

pub mod budget;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, LimitCheck};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use transaction::{Transaction, TransactionType, DATE_FORMAT};
