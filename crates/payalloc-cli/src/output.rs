//! Output formatting utilities.
//!
//! Tables and JSON go to stdout. Status lines about the run go to stdout when
//! they report an outcome and to stderr when they flag a problem, so piping
//! `--format json` output stays parseable.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Kind of status line printed around a command's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Rules compiled.
    Compiled,
    /// Validation rejected the payment allocation.
    Rejected,
    /// A slot was suppressed or the topology was not recognised.
    Notice,
    /// Nothing to report.
    Empty,
}

impl Status {
    fn glyph(self) -> ColoredString {
        match self {
            Status::Compiled => "✓".green(),
            Status::Rejected => "✗".red(),
            Status::Notice => "⚠".yellow(),
            Status::Empty => "ℹ".blue(),
        }
    }

    /// True when the line belongs on stderr.
    pub fn is_diagnostic(self) -> bool {
        matches!(self, Status::Rejected | Status::Notice)
    }

    /// Renders the status line.
    pub fn line(self, message: &str) -> String {
        format!("{} {}", self.glyph(), message)
    }
}

/// Prints a status line to the stream its kind belongs on.
pub fn print_status(status: Status, message: &str) {
    if status.is_diagnostic() {
        eprintln!("{}", status.line(message));
    } else {
        println!("{}", status.line(message));
    }
}

/// Prints rows as a table or a JSON array.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print_table(None, data);
            Ok(())
        }
        OutputFormat::Json => print_json(data),
    }
}

/// Prints rows as a table, under an underlined title when one is given.
pub fn print_table<T: Tabled>(title: Option<&str>, data: &[T]) {
    if let Some(title) = title {
        println!("\n{}", title.bold().underline());
    }
    match render_table(data) {
        Some(table) => println!("{table}"),
        None => println!("(none)"),
    }
}

/// Renders rows with the first column left-aligned; `None` when empty.
fn render_table<T: Tabled>(data: &[T]) -> Option<String> {
    if data.is_empty() {
        return None;
    }
    Some(
        Table::new(data)
            .with(Style::rounded())
            .with(Modify::new(Columns::first()).with(Alignment::left()))
            .to_string(),
    )
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Slot")]
        slot: &'static str,
    }

    #[test]
    fn test_problems_go_to_stderr() {
        assert!(Status::Rejected.is_diagnostic());
        assert!(Status::Notice.is_diagnostic());
        assert!(!Status::Compiled.is_diagnostic());
        assert!(!Status::Empty.is_diagnostic());
    }

    #[test]
    fn test_status_line_keeps_message() {
        colored::control::set_override(false);
        assert_eq!(Status::Compiled.line("Compiled 1 rule(s)"), "✓ Compiled 1 rule(s)");
        assert_eq!(Status::Notice.line("Duplicate slot"), "⚠ Duplicate slot");
    }

    #[test]
    fn test_render_table() {
        assert!(render_table::<Row>(&[]).is_none());
        let table = render_table(&[Row { slot: "DUE_PRINCIPAL" }]).unwrap();
        assert!(table.contains("Slot"));
        assert!(table.contains("DUE_PRINCIPAL"));
    }
}
