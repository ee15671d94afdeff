//! Transaction store
//!
//! Loads, appends and deletes transactions through a record backend.
//! Deletes rewrite the whole store.

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::models::{Transaction, TransactionId};

use super::backend::{CsvBackend, RecordBackend};
use super::records::TransactionRecord;

/// Store owning the canonical list of transactions
pub struct TransactionStore {
    backend: Box<dyn RecordBackend<TransactionRecord>>,
}

impl TransactionStore {
    /// Create a store over any backend
    pub fn new(backend: impl RecordBackend<TransactionRecord> + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Create a store backed by a CSV file
    pub fn csv(path: PathBuf) -> Self {
        Self::new(CsvBackend::<TransactionRecord>::new(path))
    }

    /// Load every valid transaction
    ///
    /// Invalid records are skipped with a warning. A missing store loads as
    /// an empty ledger.
    pub fn load_all(&self) -> LedgerResult<Vec<Transaction>> {
        let records = match self.backend.read_all() {
            Ok(records) => records,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let transactions = records
            .into_iter()
            .filter_map(|record| {
                let raw = format!("{:?}", record);
                match record.into_transaction() {
                    Ok(txn) => Some(txn),
                    Err(e) => {
                        tracing::warn!("Skipping invalid transaction: {}. Error: {}", raw, e);
                        None
                    }
                }
            })
            .collect();

        Ok(transactions)
    }

    /// Validate and append a new transaction with a fresh ID
    pub fn add(
        &self,
        date: &str,
        amount: &str,
        category: &str,
        kind: &str,
        description: Option<&str>,
    ) -> LedgerResult<Transaction> {
        let txn = Transaction::new(TransactionId::new(), date, amount, category, kind, description)?;

        self.backend
            .append_one(&TransactionRecord::from(&txn))
            .inspect_err(|e| tracing::error!("Failed to add transaction: {}", e))?;

        Ok(txn)
    }

    /// Remove the transaction with the given ID
    ///
    /// Rewrites the store with every other transaction. Returns true once
    /// the rewrite succeeds, whether or not the ID existed.
    pub fn delete(&self, id: &str) -> LedgerResult<bool> {
        let remaining: Vec<TransactionRecord> = self
            .load_all()?
            .iter()
            .filter(|t| t.id() != id)
            .map(TransactionRecord::from)
            .collect();

        self.backend
            .write_all(&remaining)
            .inspect_err(|e| tracing::error!("Failed to delete transaction: {}", e))?;

        Ok(true)
    }
}
