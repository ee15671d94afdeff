//! Persistence backends
//!
//! A backend stores raw records of one kind. Stores validate records on the
//! way in and out; the backend only moves rows.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{append_csv, read_csv, write_csv_atomic};
use super::records::Record;

/// Raw record persistence for one record kind
pub trait RecordBackend<R> {
    /// Read every record; fails with `NotFound` if the store doesn't exist
    fn read_all(&self) -> LedgerResult<Vec<R>>;

    /// Replace the whole store with `records`
    fn write_all(&self, records: &[R]) -> LedgerResult<()>;

    /// Add one record at the end of the store
    fn append_one(&self, record: &R) -> LedgerResult<()>;
}

/// CSV file backend with a header row
pub struct CsvBackend<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> CsvBackend<R> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<R: Record> RecordBackend<R> for CsvBackend<R> {
    fn read_all(&self) -> LedgerResult<Vec<R>> {
        read_csv(&self.path)
    }

    fn write_all(&self, records: &[R]) -> LedgerResult<()> {
        tracing::debug!(path = %self.path.display(), count = records.len(), "Rewriting store");
        write_csv_atomic(&self.path, R::HEADERS, records)
    }

    fn append_one(&self, record: &R) -> LedgerResult<()> {
        tracing::debug!(path = %self.path.display(), "Appending record");
        append_csv(&self.path, R::HEADERS, record)
    }
}

/// In-memory backend; `None` models a store that was never created
pub struct MemoryBackend<R> {
    records: RwLock<Option<Vec<R>>>,
}

impl<R: Clone> MemoryBackend<R> {
    /// A backend with no store yet
    pub fn new() -> Self {
        Self {
            records: RwLock::new(None),
        }
    }

    /// Copy of the current records, or None if nothing was ever written
    pub fn snapshot(&self) -> LedgerResult<Option<Vec<R>>> {
        let records = self.records.read().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(records.clone())
    }
}

impl<R: Clone> Default for MemoryBackend<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Clone> RecordBackend<R> for MemoryBackend<R> {
    fn read_all(&self) -> LedgerResult<Vec<R>> {
        self.snapshot()?
            .ok_or_else(|| LedgerError::store_not_found("in-memory store"))
    }

    fn write_all(&self, records: &[R]) -> LedgerResult<()> {
        let mut data = self.records.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = Some(records.to_vec());
        Ok(())
    }

    fn append_one(&self, record: &R) -> LedgerResult<()> {
        let mut data = self.records.write().map_err(|e| {
            LedgerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.get_or_insert_with(Vec::new).push(record.clone());
        Ok(())
    }
}
