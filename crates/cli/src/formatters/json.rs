//! JSON formatter implementation.

use anyhow::Result;
use pokedex_client::{HealthStatus, SearchReport};

use crate::formatters::{ExportOutput, Formatter};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_report(&self, report: &SearchReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)? + "\n")
    }

    fn format_suggestions(&self, names: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(names)? + "\n")
    }

    fn format_export(&self, export: &ExportOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(export)? + "\n")
    }

    fn format_health(&self, health: &HealthStatus) -> Result<String> {
        Ok(serde_json::to_string_pretty(health)? + "\n")
    }
}
