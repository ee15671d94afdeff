//! Raw record shapes as they are persisted
//!
//! Records hold every field as plain text so that a row with a bad amount or
//! date still decodes; validation happens when a record is turned back into
//! a [`Transaction`] or [`Budget`].

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::models::{Budget, Transaction, TransactionId, DATE_FORMAT};

/// A record kind with a fixed column layout
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Column names, in field order
    const HEADERS: &'static [&'static str];
}

/// One row of the transactions store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    pub date: String,
    pub amount: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

impl Record for TransactionRecord {
    const HEADERS: &'static [&'static str] =
        &["id", "date", "amount", "category", "type", "description"];
}

impl TransactionRecord {
    /// Validate the record into a transaction
    pub fn into_transaction(self) -> LedgerResult<Transaction> {
        Transaction::new(
            TransactionId::from_string(self.id),
            &self.date,
            &self.amount,
            self.category,
            &self.kind,
            Some(&self.description),
        )
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id().to_string(),
            date: txn.date().format(DATE_FORMAT).to_string(),
            amount: txn.amount().to_decimal_string(),
            category: txn.category().to_string(),
            kind: txn.kind().to_string(),
            description: txn.description().to_string(),
        }
    }
}

/// One row of the budgets store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub category: String,
    pub limit: String,
}

impl Record for BudgetRecord {
    const HEADERS: &'static [&'static str] = &["category", "limit"];
}

impl BudgetRecord {
    /// Validate the record into a budget
    pub fn into_budget(self) -> LedgerResult<Budget> {
        Budget::new(self.category, &self.limit)
    }
}

impl From<&Budget> for BudgetRecord {
    fn from(budget: &Budget) -> Self {
        Self {
            category: budget.category().to_string(),
            limit: budget.limit().to_decimal_string(),
        }
    }
}
