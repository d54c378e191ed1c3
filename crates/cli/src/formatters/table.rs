//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format cards, suggestions, exports and health as aligned text.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use pokedex_client::{HealthStatus, SearchReport};

use crate::formatters::{ExportOutput, Formatter};

pub(crate) mod cards;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_report(&self, report: &SearchReport) -> Result<String> {
        Ok(cards::format_report(report))
    }

    fn format_suggestions(&self, names: &[String]) -> Result<String> {
        if names.is_empty() {
            return Ok("No suggestions.\n".to_string());
        }
        let mut output = String::new();
        for name in names {
            output.push_str(name);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_export(&self, export: &ExportOutput) -> Result<String> {
        Ok(format!(
            "Saved {} sprite to {}\n",
            export.name,
            export.path.display()
        ))
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        Ok(format!("Status: {}\n", health.status))
    }
}
