//! Output formatting for CLI commands.
//!
//! This module renders a difference report for the terminal or as JSON.

use colored::Colorize;
use serde_json::Value;
use std::fmt::Write;

use crate::diff::{Change, DifferenceReport};

use super::commands::OutputFormat;

/// Message printed when the templates match.
pub const EQUAL_MESSAGE: &str = "Resource templates are equal";

/// Maximum rendered length of a single value in text output.
const MAX_VALUE_LEN: usize = 120;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a difference report for display.
    #[must_use]
    pub fn format_report(&self, report: &DifferenceReport) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_default(),
            OutputFormat::Text => Self::format_report_text(report),
        }
    }

    /// Formats a report as text.
    fn format_report_text(report: &DifferenceReport) -> String {
        if report.is_empty() {
            return format!("{EQUAL_MESSAGE}\n");
        }

        let mut output = String::new();

        for entry in report.entries() {
            let path = entry.path.to_string();
            let line = match &entry.change {
                Change::Added { value } => {
                    format!("+ {path}: {}", Self::render_value(value)).green()
                }
                Change::Removed { value } => {
                    format!("- {path}: {}", Self::render_value(value)).red()
                }
                Change::Changed { from, to } => format!(
                    "~ {path}: {} => {}",
                    Self::render_value(from),
                    Self::render_value(to)
                )
                .yellow(),
            };
            let _ = writeln!(output, "{line}");
        }

        let _ = write!(
            output,
            "\n{} added, {} removed, {} changed\n",
            report.added_count().to_string().green(),
            report.removed_count().to_string().red(),
            report.changed_count().to_string().yellow()
        );

        output
    }

    /// Renders a value on a single line.
    fn render_value(value: &Value) -> String {
        Self::truncate(&value.to_string(), MAX_VALUE_LEN)
    }

    /// Truncates a string to a maximum number of characters.
    fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
            format!("{head}...")
        }
    }
}
