use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use finance_tracker::config::paths::{FinancePaths, DATA_DIR_ENV};
use finance_tracker::config::settings::Settings;
use finance_tracker::storage::init::{initialize_storage, needs_initialization};
use finance_tracker::{logging, Tracker};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Personal finance ledger",
    long_about = "Record income and expenses, set monthly limits per category, \
                  and see where the money goes from the command line."
)]
struct Cli {
    /// Directory holding the ledger, settings and log
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and empty ledger files
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Summaries, reports and chart data
    #[command(subcommand)]
    Report(ReportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    logging::init(&paths, &settings)?;

    let tracker = Tracker::open(&paths);

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing ledger at: {}", paths.data_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'finance transaction add expense 12.50 Food' to record a transaction.");
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Budgets file:      {}", paths.budgets_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Log file:          {}", paths.log_file().display());
            if needs_initialization(&paths) {
                println!("(not initialized; run 'finance init')");
            }
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Log level:       {}", settings.log_level);
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&tracker, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&tracker, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&tracker, &paths, &settings, cmd)?;
        }
        None => {
            println!("finance - personal finance ledger");
            println!();
            println!("Run 'finance --help' for usage information.");
        }
    }

    Ok(())
}
