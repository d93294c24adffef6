//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger, query, and report layers.
//! Each subcommand maps 1:1 to one ledger or query operation.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::{format_balance, format_categories, format_entry_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryKind, Money, Period};
use crate::query::{self, EntryFilter};
use crate::report::PeriodReport;
use crate::storage::Ledger;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new transaction
    Add {
        /// Transaction amount
        amount: String,
        /// Transaction type: income or expense
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Transaction category
        category: String,
        /// Transaction description
        description: String,
        /// Transaction date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List transactions
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Filter by type (income or expense)
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<String>,
        /// Number of transactions to show
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID to delete
        id: u64,
    },

    /// Show balance
    Balance {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,
    },

    /// Generate financial report
    Report {
        /// Report period (week, month, or year; anything else means all)
        #[arg(long, default_value = "month")]
        period: String,
    },

    /// List available categories
    Categories,
}

/// Dispatch a parsed command against the ledger
pub fn run(ledger: &mut Ledger, command: Commands) -> LedgerResult<()> {
    match command {
        Commands::Add {
            amount,
            kind,
            category,
            description,
            date,
        } => handle_add(ledger, &amount, &kind, &category, &description, date),

        Commands::List {
            start,
            end,
            category,
            kind,
            limit,
        } => handle_list(ledger, start, end, category, kind, limit),

        Commands::Delete { id } => {
            if ledger.delete(id)? {
                println!("Transaction {} deleted successfully.", id);
            } else {
                println!("Transaction {} not found.", id);
            }
            Ok(())
        }

        Commands::Balance { start, end } => handle_balance(ledger, start, end),

        Commands::Report { period } => {
            let report = PeriodReport::generate(
                ledger.entries(),
                Period::from(period.as_str()),
                Local::now().date_naive(),
            );
            println!("{}", report.render());
            Ok(())
        }

        Commands::Categories => {
            print!("{}", format_categories(ledger.categories()));
            Ok(())
        }
    }
}

fn handle_add(
    ledger: &mut Ledger,
    amount: &str,
    kind: &str,
    category: &str,
    description: &str,
    date: Option<String>,
) -> LedgerResult<()> {
    let amount = parse_amount(amount)?;
    let date = date.as_deref().map(parse_date).transpose()?;

    let entry = ledger.add(amount, category, description, kind, date)?;
    println!(
        "Added {}: {} - {} (ID: {})",
        entry.kind, entry.amount, entry.description, entry.id
    );
    Ok(())
}

fn handle_list(
    ledger: &Ledger,
    start: Option<String>,
    end: Option<String>,
    category: Option<String>,
    kind: Option<String>,
    limit: usize,
) -> LedgerResult<()> {
    let criteria = EntryFilter {
        start: start.as_deref().map(parse_date).transpose()?,
        end: end.as_deref().map(parse_date).transpose()?,
        category,
        kind: kind
            .as_deref()
            .map(|s| s.parse::<EntryKind>())
            .transpose()?,
    };

    let entries = query::filter(ledger.entries(), &criteria);
    print!("{}", format_entry_table(&entries, limit));
    Ok(())
}

fn handle_balance(
    ledger: &Ledger,
    start: Option<String>,
    end: Option<String>,
) -> LedgerResult<()> {
    let criteria = EntryFilter {
        start: start.as_deref().map(parse_date).transpose()?,
        end: end.as_deref().map(parse_date).transpose()?,
        ..EntryFilter::default()
    };

    let entries = query::filter(ledger.entries(), &criteria);
    print!("{}", format_balance(&query::balance(&entries)));
    Ok(())
}

fn parse_amount(s: &str) -> LedgerResult<Money> {
    Money::parse(s).map_err(|e| LedgerError::Validation(e.to_string()))
}

fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| LedgerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}
