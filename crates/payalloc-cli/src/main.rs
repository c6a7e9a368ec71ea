//! Payalloc CLI - Command-line interface for payment allocation rules.
//!
//! # Usage
//!
//! ```bash
//! # Compile the payment allocation section of a loan product command
//! payalloc compile product.json --policy strategies.toml
//!
//! # Preview the due-state expansion of a base ordering
//! payalloc expand --topology HORIZONTAL 1:PENALTY 2:PRINCIPAL 3:INTEREST
//!
//! # List the allocation vocabularies
//! payalloc vocabulary allocation
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let format = cli.format;

    match cli.command {
        Commands::Compile(args) => commands::compile::execute(args, format)?,
        Commands::Expand(args) => commands::expand::execute(args, format)?,
        Commands::Vocabulary(args) => commands::vocabulary::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
