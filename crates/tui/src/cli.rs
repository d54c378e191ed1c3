//! Command-line argument parsing for pokedex-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (handled by `pokedex_config`).
//! - Terminal state management (see `runtime::terminal`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for pokedex-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url)
/// 2. Environment variables (e.g., POKEDEX_BASE_URL)
/// 3. Configuration file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "pokedex-tui",
    about = "Terminal user interface for browsing creature data",
    version,
    after_help = "Examples:\n  pokedex-tui\n  pokedex-tui --base-url http://localhost:8080/api/pokemon\n  pokedex-tui --export-dir ~/Pictures --no-mouse\n  pokedex-tui --log-dir /var/log/pokedex-tui\n"
)]
pub struct Cli {
    /// Base URL of the creature API
    #[arg(long, short = 'b', env = "POKEDEX_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to a custom configuration file
    #[arg(long, env = "POKEDEX_CONFIG_PATH")]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Directory exported sprites are written to
    #[arg(long, default_value = pokedex_config::constants::DEFAULT_EXPORT_DIR)]
    pub export_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Disable the in-memory record cache
    #[arg(long)]
    pub no_cache: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "127.0.0.1:9090")
    ///
    /// When enabled, exposes /metrics endpoint for Prometheus scraping.
    #[arg(long, env = "POKEDEX_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}
