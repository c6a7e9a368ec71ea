//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CompileArgs, ExpandArgs, VocabularyArgs};

/// Payalloc - Payment allocation rule compiler for lending products
#[derive(Parser)]
#[command(name = "payalloc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Expand, assemble and validate the payment allocation of a loan product command
    Compile(CompileArgs),

    /// Show the due-state expansion of a base allocation order
    Expand(ExpandArgs),

    /// List allocation vocabularies
    Vocabulary(VocabularyArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
