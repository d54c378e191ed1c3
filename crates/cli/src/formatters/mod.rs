//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table and JSON output formats.
//! - Implement the `Formatter` trait for every command's output.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `{"cards": [], "failed": [...]}` |
//! | Table | Human message | `Creature not found. Try another name or ID.` |

use std::path::PathBuf;

use anyhow::Result;
use pokedex_client::{HealthStatus, SearchReport};
use serde::Serialize;

mod common;
mod json;
mod table;

pub use common::{DEFAULT_MISSING_VALUE, write_to_file};
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Result of a sprite export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportOutput {
    pub name: String,
    pub path: PathBuf,
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a search report (cards and failed identifiers).
    fn format_report(&self, report: &SearchReport) -> Result<String>;

    /// Format suggestion names.
    fn format_suggestions(&self, names: &[String]) -> Result<String>;

    /// Format an export result.
    fn format_export(&self, export: &ExportOutput) -> Result<String>;

    /// Format service health.
    fn format_health(&self, health: &HealthStatus) -> Result<String>;
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

#[cfg(test)]
mod tests;
