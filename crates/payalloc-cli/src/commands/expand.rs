//! Expand command implementation.
//!
//! Previews how a base allocation order is expanded across due-states,
//! without assembling or validating the result.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use tabled::Tabled;

use payalloc_config::{ExpansionReport, RuleExpander};
use payalloc_core::types::{LoanScheduleProcessingType, Resolution};

use crate::cli::OutputFormat;
use crate::commands::{parse_entry, slot_label};
use crate::output::{print_json, print_status, print_table, Status};

/// Arguments for the expand command.
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Loan schedule processing type (HORIZONTAL, VERTICAL)
    #[arg(short, long, default_value = "HORIZONTAL")]
    pub topology: String,

    /// Base entries as ORDER:NAME (e.g. 1:PENALTY 2:PRINCIPAL)
    #[arg(required = true)]
    pub entries: Vec<String>,
}

/// One emitted entry.
#[derive(Debug, Serialize, Tabled)]
pub struct ExpandedRow {
    #[tabled(rename = "Order")]
    pub order: i64,
    #[tabled(rename = "Allocation Rule")]
    pub rule: String,
    #[tabled(rename = "Label")]
    pub label: &'static str,
}

/// One line of the expansion summary.
#[derive(Debug, Serialize, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Step")]
    pub step: &'static str,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl SummaryRow {
    fn new(step: &'static str, value: impl ToString) -> Self {
        Self {
            step,
            value: value.to_string(),
        }
    }
}

/// Execute the expand command.
pub fn execute(args: ExpandArgs, format: OutputFormat) -> Result<()> {
    let base = args
        .entries
        .iter()
        .map(|s| parse_entry(s))
        .collect::<Result<Vec<_>, _>>()?;

    let topology = Resolution::<LoanScheduleProcessingType>::resolve(&args.topology);
    let report = RuleExpander::new().expand(&base, &topology);

    match format {
        OutputFormat::Json => print_json(&json!({
            "processingType": report.processing_type.text(),
            "expanded": report.is_expanded(),
            "entries": report.entries,
            "suppressed": report.suppressed(),
        })),
        OutputFormat::Table => {
            print_report(&report);
            Ok(())
        }
    }
}

fn summary(report: &ExpansionReport) -> Vec<SummaryRow> {
    vec![
        SummaryRow::new("Processing type", report.processing_type.text()),
        SummaryRow::new("Base entries", report.base.len()),
        SummaryRow::new("Emitted slots", report.raw.len()),
        SummaryRow::new("Kept entries", report.entries.len()),
    ]
}

fn print_report(report: &ExpansionReport) {
    if !report.is_expanded() {
        print_status(
            Status::Notice,
            &format!(
            "Unknown processing type '{}'; entries passed through unchanged",
                report.processing_type.text()
            ),
        );
    }
    for name in report.suppressed() {
        print_status(Status::Notice, &format!("Duplicate slot {name} suppressed"));
    }

    print_table(Some("Expansion"), &summary(report));

    let rows: Vec<ExpandedRow> = report
        .entries
        .iter()
        .map(|entry| ExpandedRow {
            order: entry.order,
            rule: entry.payment_allocation_rule.clone(),
            label: slot_label(&entry.payment_allocation_rule),
        })
        .collect();
    print_table(Some("Allocation Order"), &rows);
}
