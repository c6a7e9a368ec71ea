//! Vocabulary command implementation.
//!
//! Lists the names accepted in a payment allocation configuration.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use payalloc_core::types::{
    AllocationType, DueType, FutureInstallmentAllocationRule, LoanScheduleProcessingType,
    PaymentAllocationTransactionType, PaymentAllocationType,
};

use crate::cli::OutputFormat;
use crate::output::print_output;

/// Arguments for the vocabulary command.
#[derive(Args, Debug)]
pub struct VocabularyArgs {
    /// Vocabulary to list (all when omitted)
    #[arg(value_enum)]
    pub kind: Option<VocabularyKind>,
}

/// Vocabularies that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VocabularyKind {
    /// Allocation components offered for configuration
    Allocation,
    /// Due-states
    Due,
    /// Due-state qualified allocation slots
    Payment,
    /// Future installment allocation rules
    Future,
    /// Transaction types
    Transaction,
    /// Loan schedule processing types
    Processing,
}

impl VocabularyKind {
    const ALL: [VocabularyKind; 6] = [
        VocabularyKind::Allocation,
        VocabularyKind::Due,
        VocabularyKind::Payment,
        VocabularyKind::Future,
        VocabularyKind::Transaction,
        VocabularyKind::Processing,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Allocation => "allocation",
            Self::Due => "due",
            Self::Payment => "payment",
            Self::Future => "future",
            Self::Transaction => "transaction",
            Self::Processing => "processing",
        }
    }

    fn terms(&self) -> Vec<TermRow> {
        let vocabulary = self.as_str();
        let row = |name, label| TermRow {
            vocabulary,
            name,
            label,
        };
        match self {
            Self::Allocation => AllocationType::selectable()
                .iter()
                .map(|t| row(t.name(), t.label()))
                .collect(),
            Self::Due => DueType::ALL.iter().map(|t| row(t.name(), t.label())).collect(),
            Self::Payment => PaymentAllocationType::ALL
                .iter()
                .map(|t| row(t.name(), t.label()))
                .collect(),
            Self::Future => FutureInstallmentAllocationRule::ALL
                .iter()
                .map(|t| row(t.name(), t.label()))
                .collect(),
            Self::Transaction => PaymentAllocationTransactionType::ALL
                .iter()
                .map(|t| row(t.name(), t.label()))
                .collect(),
            Self::Processing => LoanScheduleProcessingType::ALL
                .iter()
                .map(|t| row(t.name(), t.label()))
                .collect(),
        }
    }
}

/// One vocabulary term.
#[derive(Debug, Serialize, Tabled)]
pub struct TermRow {
    #[tabled(rename = "Vocabulary")]
    pub vocabulary: &'static str,
    #[tabled(rename = "Name")]
    pub name: &'static str,
    #[tabled(rename = "Label")]
    pub label: &'static str,
}

/// Execute the vocabulary command.
pub fn execute(args: VocabularyArgs, format: OutputFormat) -> Result<()> {
    let rows: Vec<TermRow> = match args.kind {
        Some(kind) => kind.terms(),
        None => VocabularyKind::ALL.iter().flat_map(|k| k.terms()).collect(),
    };
    print_output(&rows, format)
}
