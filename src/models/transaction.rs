//! Transaction model
//!
//! Represents a single income or expense entry in the ledger. Transactions
//! are validated on construction and immutable afterwards; an edit is a
//! delete followed by a new add.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for transaction dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Lowercase name as stored in the ledger
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(LedgerError::validation(
                "Transaction type must be 'income' or 'expense'",
            )),
        }
    }
}

/// A validated ledger transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: TransactionId,
    date: NaiveDate,
    amount: Money,
    category: String,
    #[serde(rename = "type")]
    kind: TransactionType,
    description: String,
}

impl Transaction {
    /// Create a transaction from user-supplied fields
    ///
    /// Checks the date, then the amount, then the type, and reports the
    /// first failure as a validation error.
    ///
    /// The amount is a plain decimal with an optional sign ("12.50", "+5").
    /// Currency symbols, digit separators and exponent notation ("$10",
    /// "1,000", "1e3") are rejected. Digits past cents are truncated.
    pub fn new(
        id: TransactionId,
        date: &str,
        amount: &str,
        category: impl Into<String>,
        kind: &str,
        description: Option<&str>,
    ) -> LedgerResult<Self> {
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| LedgerError::validation("Date must be in YYYY-MM-DD format"))?;

        let amount = Money::parse(amount)
            .ok()
            .filter(Money::is_positive)
            .ok_or_else(|| LedgerError::validation("Amount must be a positive number"))?;

        let kind: TransactionType = kind.parse()?;

        Ok(Self {
            id,
            date,
            amount,
            category: category.into(),
            kind,
            description: description.unwrap_or_default().to_string(),
        })
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    /// Description text, empty when none was given
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Date: {}, Amount: {}, Category: {}, Type: {}, Description: {}",
            self.id,
            self.date.format(DATE_FORMAT),
            self.amount,
            self.category,
            self.kind,
            self.description
        )
    }
}
