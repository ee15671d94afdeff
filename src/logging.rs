//! Log file setup for the `finance` binary
//!
//! The library only emits `tracing` events. The binary installs one
//! subscriber that appends them to `finance.log` in the base directory.

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::LedgerError;

/// Environment variable overriding the configured log filter
pub const LOG_ENV: &str = "FINANCE_TRACKER_LOG";

/// Filter directive: `FINANCE_TRACKER_LOG` when set, else the configured level
pub fn filter_directive(settings: &Settings) -> String {
    env::var(LOG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| format!("finance_tracker={}", settings.log_level))
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &FinancePaths, settings: &Settings) -> Result<(), LedgerError> {
    paths.ensure_directories()?;

    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| {
            LedgerError::Config(format!(
                "Failed to open log file {}: {}",
                log_path.display(),
                e
            ))
        })?;

    let filter = EnvFilter::try_new(filter_directive(settings))
        .map_err(|e| LedgerError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LedgerError::Config(format!("Failed to initialize logging: {}", e)))
}
