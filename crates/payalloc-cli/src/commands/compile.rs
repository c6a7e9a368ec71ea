//! Compile command implementation.
//!
//! Reads a loan product command body, runs the payment allocation through
//! expansion, assembly and validation, and prints the resulting rules or the
//! full list of validation errors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use payalloc_config::{
    CompiledAllocation, PaymentAllocationCompiler, StrategyPolicySet, ValidationError,
};
use payalloc_core::types::PaymentAllocationType;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_json, print_output, print_status, print_table, Status};

/// Arguments for the compile command.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Loan product command body (JSON)
    pub command: PathBuf,

    /// Strategy policy file (.toml or .json). Built-in policies when omitted.
    #[arg(short, long, env = "PAYALLOC_POLICY")]
    pub policy: Option<PathBuf>,
}

/// One slot of a compiled rule.
#[derive(Debug, Serialize, Tabled)]
pub struct SlotRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "Allocation Type")]
    pub name: &'static str,
    #[tabled(rename = "Label")]
    pub label: &'static str,
}

impl SlotRow {
    fn new(position: usize, allocation_type: PaymentAllocationType) -> Self {
        Self {
            position,
            name: allocation_type.name(),
            label: allocation_type.label(),
        }
    }
}

/// One validation error.
#[derive(Debug, Serialize, Tabled)]
pub struct ErrorRow {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Rule")]
    pub rule: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Message")]
    pub message: String,
}

impl From<&ValidationError> for ErrorRow {
    fn from(err: &ValidationError) -> Self {
        Self {
            field: err.field.clone(),
            rule: err.rule.clone().unwrap_or_default(),
            value: err.value.clone().unwrap_or_default(),
            message: err.message.clone(),
        }
    }
}

/// Execute the compile command.
pub fn execute(args: CompileArgs, format: OutputFormat) -> Result<()> {
    let body = std::fs::read_to_string(&args.command)
        .with_context(|| format!("Failed to read {}", args.command.display()))?;

    let policies = match &args.policy {
        Some(path) => StrategyPolicySet::load(path)
            .map_err(CliError::Config)
            .with_context(|| format!("Failed to load policies from {}", path.display()))?,
        None => StrategyPolicySet::standard(),
    };

    let compiler = PaymentAllocationCompiler::with_policies(policies);
    match compiler.compile_json(&body) {
        Ok(compiled) => print_compiled(&compiled, format),
        Err(err) if !err.validation_errors().is_empty() => {
            let errors = err.validation_errors();
            print_rejection(errors, format)?;
            Err(CliError::Rejected(errors.len()).into())
        }
        Err(err) => Err(CliError::Config(err).into()),
    }
}

fn print_compiled(compiled: &CompiledAllocation, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&compiled.rules);
    }

    if let Some(expansion) = &compiled.expansion {
        for name in expansion.suppressed() {
            print_status(Status::Notice, &format!("Duplicate slot {name} suppressed"));
        }
    }

    if compiled.rules.is_empty() {
        print_status(Status::Empty, "No payment allocation configured.");
        return Ok(());
    }

    for rule in &compiled.rules {
        let title = format!(
            "{} ({})",
            rule.transaction_type.name(),
            rule.future_installment_allocation_rule.label()
        );
        let rows: Vec<SlotRow> = rule
            .allocation_types
            .iter()
            .zip(1..)
            .map(|(t, position)| SlotRow::new(position, *t))
            .collect();
        print_table(Some(title.as_str()), &rows);
    }

    print_status(
        Status::Compiled,
        &format!(
            "Compiled {} payment allocation rule(s)",
            compiled.rules.len()
        ),
    );
    Ok(())
}

fn print_rejection(errors: &[ValidationError], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Table {
        print_status(Status::Rejected, "Payment allocation rejected");
    }
    let rows: Vec<ErrorRow> = errors.iter().map(ErrorRow::from).collect();
    print_output(&rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_row_from_validation_error() {
        let err = ValidationError::with_rule("paymentAllocation[0].transactionType", "Missing", "required")
            .with_value("X");
        let row = ErrorRow::from(&err);
        assert_eq!(row.rule, "required");
        assert_eq!(row.value, "X");

        let bare = ErrorRow::from(&ValidationError::new("paymentAllocation", "rejected"));
        assert!(bare.rule.is_empty());
    }

    #[test]
    fn test_slot_row() {
        let row = SlotRow::new(3, PaymentAllocationType::DuePenalty);
        assert_eq!(row.name, "DUE_PENALTY");
        assert_eq!(row.label, "Due penalty");
    }
}
