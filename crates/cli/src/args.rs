//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not build configuration (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pokedex-cli")]
#[command(about = "Pokedex CLI - Look up creatures from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pokedex-cli search pikachu\n  pokedex-cli search 'pikachu, 1, dragonite' -o json\n  pokedex-cli suggest char\n  pokedex-cli export 25 --dir ./sprites\n  pokedex-cli health\n"
)]
pub struct Cli {
    /// Base URL of the creature API (e.g., http://localhost:8080/api/pokemon)
    #[arg(short, long, global = true, env = "POKEDEX_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "POKEDEX_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Disable the in-memory record cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via POKEDEX_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "POKEDEX_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9000)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one or more creatures by name or ID (comma-separated)
    Search {
        /// Identifiers to look up (e.g., 'pikachu, 1, dragonite')
        query: String,
    },

    /// List names matching a keyword
    Suggest {
        /// Partial name to complete
        keyword: String,
    },

    /// Save a creature's sprite as {name}.png
    Export {
        /// Name or ID of the creature
        identifier: String,

        /// Directory to write the image into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Check that the creature API is reachable
    Health,
}
