//! CSV file I/O with atomic rewrites
//!
//! Every function opens its file for the duration of the call only; the
//! handle is dropped on every return path. Full rewrites go through a temp
//! file and a rename so a failed write never leaves a truncated store.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::LedgerError;

/// Read every decodable row of a CSV file
///
/// Fails with `NotFound` if the file doesn't exist. Rows that cannot be
/// decoded are skipped with a warning.
pub fn read_csv<R, P>(path: P) -> Result<Vec<R>, LedgerError>
where
    R: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(LedgerError::store_not_found(path.display().to_string()));
        }
        Err(e) => {
            tracing::error!("File operation failed for {}: {}", path.display(), e);
            return Err(LedgerError::Io(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )));
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in reader.deserialize::<R>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => {
                return Err(LedgerError::Io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                tracing::warn!(
                    path = %path.display(),
                    line,
                    "Skipping undecodable record: {}",
                    e
                );
            }
        }
    }

    Ok(records)
}

/// Write a CSV file atomically (write to temp, then rename)
pub fn write_csv_atomic<R, P>(path: P, headers: &[&str], records: &[R]) -> Result<(), LedgerError>
where
    R: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    // Same directory as the target so the rename stays atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    let written = write_rows(&mut writer, headers, records).and_then(|_| {
        let file = writer
            .into_inner()
            .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e.error())))?;
        file.sync_all()
            .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))
    });

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single row, writing the header first if the file is new or empty
///
/// The row is written at the current end of the file. If the last existing
/// line has no trailing newline, the new row is joined onto it.
pub fn append_csv<R, P>(path: P, headers: &[&str], record: &R) -> Result<(), LedgerError>
where
    R: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    ensure_parent(path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            tracing::error!("File operation failed for {}: {}", path.display(), e);
            LedgerError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;

    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if needs_header {
        writer.write_record(headers)?;
    }
    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

fn write_rows<W, R>(
    writer: &mut csv::Writer<W>,
    headers: &[&str],
    records: &[R],
) -> Result<(), LedgerError>
where
    W: io::Write,
    R: Serialize,
{
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        value: String,
    }

    const HEADERS: &[&str] = &["name", "value"];

    fn row(name: &str, value: &str) -> Row {
        Row {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_read_nonexistent_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        let err = read_csv::<Row, _>(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        let rows = vec![row("a", "1"), row("b, with comma", "2")];

        write_csv_atomic(&path, HEADERS, &rows).unwrap();

        let loaded: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_empty_write_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        write_csv_atomic::<Row, _>(&path, HEADERS, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value\n");
        assert!(read_csv::<Row, _>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        write_csv_atomic(&path, HEADERS, &[row("a", "1")]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("rows.csv.tmp").exists());
    }

    #[test]
    fn test_append_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("rows.csv");

        append_csv(&path, HEADERS, &row("a", "1")).unwrap();
        append_csv(&path, HEADERS, &row("b", "2")).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "name,value\na,1\nb,2\n"
        );
    }

    #[test]
    fn test_undecodable_rows_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "name,value\na,1\nonly-one-field\nc,3\n").unwrap();

        let loaded: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(loaded, vec![row("a", "1"), row("c", "3")]);
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_csv_atomic(&path, HEADERS, &[row("a", "1")]).unwrap_err();

        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(!temp_dir.path().join("rows.csv.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_csv::<Row, _>(temp_dir.path()).unwrap_err();
        assert!(matches!(err, LedgerError::Io(_)));
    }

    #[test]
    fn test_append_after_missing_newline_joins_last_row() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "name,value
a,1").unwrap();

        append_csv(&path, HEADERS, &row("b", "2")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,value
a,1b,2
");
    }
}
