use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use tally_cli::cli::{self, Commands};
use tally_cli::storage::{Ledger, DEFAULT_DATA_FILE};

#[derive(Parser)]
#[command(
    name = "tally",
    author = "Kaylee Beyene",
    version,
    about = "Command-line personal ledger",
    long_about = "Tally is a command-line personal ledger. It records dated \
                  income and expense entries in a single JSON data file and \
                  answers balance, listing, and report queries over them."
)]
struct Cli {
    /// Data file to use
    #[arg(short, long, global = true, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut ledger = Ledger::open(&cli.file);

    // Dispatch errors are reported but deliberately do not change the exit
    // code; the command surface treats them as user messages.
    if let Err(e) = cli::run(&mut ledger, command) {
        println!("Error: {}", e);
    }

    Ok(())
}
