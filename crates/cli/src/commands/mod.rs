//! CLI command implementations.

pub mod export;
pub mod health;
pub mod search;
pub mod suggest;

use std::path::Path;

use anyhow::{Context, Result};
use pokedex_client::{MetricsCollector, PokedexClient};
use pokedex_config::Config;

use crate::formatters::write_to_file;

/// Settings shared by every command that talks to the API.
pub struct CommandContext {
    pub config: Config,
    pub no_cache: bool,
    pub metrics_enabled: bool,
}

/// Build a client from the resolved configuration.
pub fn build_client(ctx: &CommandContext) -> Result<PokedexClient> {
    let mut builder = PokedexClient::builder().from_config(&ctx.config);
    if ctx.no_cache {
        builder = builder.no_cache();
    }
    if ctx.metrics_enabled {
        builder = builder.metrics(MetricsCollector::new());
    }
    builder.build().context("Failed to build API client")
}

/// Print formatted output or write it to `output_file`.
pub fn emit(output: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            write_to_file(output, path)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            eprintln!("Results written to {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}
