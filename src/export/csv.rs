//! CSV report files
//!
//! Writes a report into a directory under a timestamped file name.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{LedgerError, LedgerResult};

/// Timestamp format used in report file names
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for a report generated at `at`, e.g. `monthly_report_20240131_235959.csv`
pub fn report_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.csv", prefix, at.format(REPORT_TIMESTAMP_FORMAT))
}

/// Create `<dir>/<prefix>_<timestamp>.csv` and fill it with `write`
///
/// The directory is created when missing. On failure the partial file is
/// removed.
pub fn write_report_file<F>(dir: &Path, prefix: &str, write: F) -> LedgerResult<PathBuf>
where
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    fs::create_dir_all(dir).map_err(|e| {
        LedgerError::Export(format!(
            "Failed to create report directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(report_file_name(prefix, Local::now().naive_local()));
    let file = File::create(&path).map_err(|e| {
        LedgerError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    let result = write(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))
    });

    if let Err(e) = result {
        drop(writer);
        let _ = fs::remove_file(&path);
        return Err(e);
    }

    tracing::debug!("Wrote report {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_report_file_name() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 5)
            .unwrap();
        assert_eq!(
            report_file_name("monthly_report", at),
            "monthly_report_20240131_235905.csv"
        );
    }

    #[test]
    fn test_write_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("reports").join("nested");

        let path = write_report_file(&dir, "category_report", |w| {
            w.write_all(b"category,income,expense,net\n")?;
            Ok(())
        })
        .unwrap();

        assert!(path.starts_with(&dir));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("category_report_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "category,income,expense,net\n"
        );
    }

    #[test]
    fn test_failed_write_removes_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = write_report_file(temp_dir.path(), "monthly_report", |_| {
            Err(LedgerError::Export("boom".into()))
        });

        assert!(result.is_err());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
