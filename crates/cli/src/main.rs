//! Pokedex CLI - Command-line interface for the creature API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run lookups, suggestions, exports and health checks via the shared client library.
//! - Format and display results as tables or JSON.
//!
//! Does NOT handle:
//! - HTTP or derivation logic (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Flags override environment variables, which override the config file.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use commands::CommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use pokedex_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match pokedex_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let ctx = CommandContext {
        config,
        no_cache: cli.no_cache,
        metrics_enabled: cli.metrics_bind.is_some(),
    };

    let exit_code = match run_command(cli, ctx, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Resolve configuration: defaults, then config file, then environment, then flags.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank values fall back to the env var or default path
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader.from_file()?.from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.no_cache {
        loader = loader.with_cache_enabled(false);
    }

    loader.build()
}
