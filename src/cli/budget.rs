//! Budget CLI commands
//!
//! Implements CLI commands for per-category monthly limits and how spending
//! compares to them.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::LedgerResult;
use crate::reports::format_budget_status;
use crate::tracker::Tracker;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set (or replace) the limit for a category
    Set {
        /// Category name (case-sensitive)
        category: String,
        /// Limit amount (e.g., "300" or "300.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List all budgets
    #[command(alias = "ls")]
    List,

    /// Remove the budget for a category
    #[command(alias = "rm")]
    Delete {
        /// Category name
        category: String,
    },

    /// Show spending against each budget
    Status,
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &Tracker,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let budget = tracker.set_budget(&category, &limit)?;
            println!(
                "Budget for '{}' set to {}",
                budget.category(),
                budget.limit().format_with_symbol(symbol)
            );
        }

        BudgetCommands::List => {
            let budgets = tracker.get_budgets()?;
            print!("{}", format_budget_list(&budgets, symbol));
        }

        BudgetCommands::Delete { category } => {
            tracker.delete_budget(&category)?;
            println!("Budget for '{}' removed", category);
        }

        BudgetCommands::Status => {
            let statuses = tracker.budget_status()?;
            print!("{}", format_budget_status(&statuses, symbol));

            let exceeded: Vec<&str> = statuses
                .iter()
                .filter(|s| s.exceeded)
                .map(|s| s.category.as_str())
                .collect();
            if !exceeded.is_empty() {
                println!();
                println!("Over budget: {}", exceeded.join(", "));
            }
        }
    }

    Ok(())
}
