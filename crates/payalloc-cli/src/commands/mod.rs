//! CLI command implementations.

pub mod compile;
pub mod expand;
pub mod vocabulary;

pub use compile::CompileArgs;
pub use expand::ExpandArgs;
pub use vocabulary::VocabularyArgs;

use payalloc_config::AllocationOrderEntry;
use payalloc_core::types::{PaymentAllocationType, Resolution};

use crate::error::{CliError, CliResult};

/// Parses an `ORDER:NAME` base entry.
pub fn parse_entry(s: &str) -> CliResult<AllocationOrderEntry> {
    AllocationOrderEntry::parse_shorthand(s).ok_or_else(|| CliError::InvalidEntry(s.to_string()))
}

/// Display label for a qualified slot name, or a marker when it does not resolve.
pub fn slot_label(name: &str) -> &'static str {
    Resolution::<PaymentAllocationType>::resolve(name)
        .found()
        .map_or("<unknown>", |t| t.label())
}
