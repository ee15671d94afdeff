//! Transaction CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Month, Transaction, TransactionType, DATE_FORMAT};
use crate::tracker::Tracker;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List recorded transactions
    #[command(alias = "ls")]
    List {
        /// Only transactions in this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        /// Only transactions in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only income or only expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Delete a transaction by ID
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID as shown by `transaction list`
        id: String,
    },
}

/// Filters applied when listing transactions
#[derive(Debug, Default)]
struct ListFilter {
    month: Option<Month>,
    category: Option<String>,
    kind: Option<TransactionType>,
}

impl ListFilter {
    fn parse(
        month: Option<String>,
        category: Option<String>,
        kind: Option<String>,
    ) -> LedgerResult<Self> {
        let month = month
            .map(|m| {
                m.parse::<Month>()
                    .map_err(|e| LedgerError::validation(e.to_string()))
            })
            .transpose()?;
        let kind = kind.map(|k| k.parse::<TransactionType>()).transpose()?;
        Ok(Self {
            month,
            category,
            kind,
        })
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.month.map_or(true, |m| m.contains(txn.date()))
            && self.category.as_deref().map_or(true, |c| txn.category() == c)
            && self.kind.map_or(true, |k| txn.kind() == k)
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(
    tracker: &Tracker,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            description,
        } => {
            let date = date.unwrap_or_else(|| {
                chrono::Local::now()
                    .date_naive()
                    .format(DATE_FORMAT)
                    .to_string()
            });
            let txn = tracker.add_transaction(
                &date,
                &amount,
                &category,
                &kind,
                description.as_deref(),
            )?;

            println!("Transaction recorded.");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            month,
            category,
            kind,
        } => {
            let filter = ListFilter::parse(month, category, kind)?;
            let mut transactions: Vec<Transaction> = tracker
                .get_transactions()?
                .into_iter()
                .filter(|t| filter.matches(t))
                .collect();
            transactions.sort_by_key(|t| t.date());

            print!("{}", format_transaction_register(&transactions, symbol));
        }

        TransactionCommands::Delete { id } => {
            let exists = tracker
                .get_transactions()?
                .iter()
                .any(|t| t.id().as_str() == id);
            tracker.delete_transaction(&id)?;

            if exists {
                println!("Deleted transaction {}", id);
            } else {
                println!("No transaction with ID {}; ledger unchanged.", id);
            }
        }
    }

    Ok(())
}
