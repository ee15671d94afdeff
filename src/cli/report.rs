//! CLI commands for reports
//!
//! Provides commands for printing and exporting the ledger reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::paths::FinancePaths;
use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::export_chart_json;
use crate::tracker::Tracker;

const NO_DATA: &str = "No transactions recorded yet.";

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total income, expenses and savings rate
    Summary,

    /// Income, expense and savings per month
    Monthly {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income, expense and net per category
    Category {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Chart datasets as JSON
    Charts {
        /// Write JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the monthly and category reports as timestamped CSV files
    Export {
        /// Target directory, defaults to the reports directory
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    tracker: &Tracker,
    paths: &FinancePaths,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => match tracker.financial_summary()? {
            Some(summary) => print!("{}", summary.format_terminal(symbol)),
            None => println!("{}", NO_DATA),
        },

        ReportCommands::Monthly { output } => match tracker.monthly_report()? {
            Some(report) => match output {
                Some(path) => {
                    write_to_file(&path, |w| report.export_csv(w))?;
                    println!("Monthly report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            },
            None => println!("{}", NO_DATA),
        },

        ReportCommands::Category { output } => match tracker.category_report()? {
            Some(report) => match output {
                Some(path) => {
                    write_to_file(&path, |w| report.export_csv(w))?;
                    println!("Category report exported to: {}", path.display());
                }
                None => print!("{}", report.format_terminal(symbol)),
            },
            None => println!("{}", NO_DATA),
        },

        ReportCommands::Charts { output } => match tracker.chart_data()? {
            Some(data) => match output {
                Some(path) => {
                    write_to_file(&path, |w| export_chart_json(&data, w))?;
                    println!("Chart data exported to: {}", path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    export_chart_json(&data, &mut stdout.lock())?;
                }
            },
            None => println!("{}", NO_DATA),
        },

        ReportCommands::Export { dir } => {
            let dir = dir.unwrap_or_else(|| paths.reports_dir());
            match tracker.export_monthly_report(&dir)? {
                Some(path) => println!("Monthly report:  {}", path.display()),
                None => {
                    println!("{}", NO_DATA);
                    return Ok(());
                }
            }
            if let Some(path) = tracker.export_category_report(&dir)? {
                println!("Category report: {}", path.display());
            }
        }
    }

    Ok(())
}

/// Create `path` and fill it with `write`
fn write_to_file<F>(path: &Path, write: F) -> LedgerResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    write(&mut writer)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}
