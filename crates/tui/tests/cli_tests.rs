//! Tests for pokedex-tui argument parsing and --help output.
//!
//! Invariants:
//! - Tests run with DOTENV_DISABLED=1 so a local `.env` cannot leak in.
//! - Tests touching process environment are serialized.

use std::process::Command;

use clap::Parser;
use pokedex_tui::cli::Cli;
use serial_test::serial;

fn pokedex_tui_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pokedex-tui")
}

fn help_output() -> String {
    let output = Command::new(pokedex_tui_bin())
        .arg("--help")
        .env("DOTENV_DISABLED", "1")
        .output()
        .expect("Failed to run pokedex-tui --help");
    assert!(output.status.success(), "--help should exit successfully");
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
#[serial]
fn test_help_lists_options() {
    let stdout = help_output();
    for option in [
        "--base-url",
        "--config-path",
        "--log-dir",
        "--export-dir",
        "--no-mouse",
        "--no-cache",
        "--metrics-bind",
    ] {
        assert!(stdout.contains(option), "Help should mention {option}");
    }
}

#[test]
#[serial]
fn test_help_contains_examples() {
    let stdout = help_output();
    assert!(stdout.contains("Examples:"));
    assert!(stdout.contains("pokedex-tui --export-dir"));
}

#[test]
#[serial]
fn test_version_flag() {
    let output = Command::new(pokedex_tui_bin())
        .arg("--version")
        .env("DOTENV_DISABLED", "1")
        .output()
        .expect("Failed to run pokedex-tui --version");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("pokedex-tui"));
}

#[test]
#[serial]
fn test_base_url_from_environment() {
    temp_env::with_var(
        "POKEDEX_BASE_URL",
        Some("http://env.test/api/pokemon"),
        || {
            let cli = Cli::parse_from(["pokedex-tui"]);
            assert_eq!(cli.base_url.as_deref(), Some("http://env.test/api/pokemon"));
        },
    );
}

#[test]
#[serial]
fn test_flag_overrides_environment() {
    temp_env::with_var("POKEDEX_BASE_URL", Some("http://env.test"), || {
        let cli = Cli::parse_from(["pokedex-tui", "--base-url", "http://flag.test"]);
        assert_eq!(cli.base_url.as_deref(), Some("http://flag.test"));
    });
}

#[test]
#[serial]
fn test_metrics_bind_from_environment() {
    temp_env::with_vars(
        [
            ("POKEDEX_METRICS_BIND", Some("127.0.0.1:9464")),
            ("POKEDEX_BASE_URL", None),
        ],
        || {
            let cli = Cli::parse_from(["pokedex-tui"]);
            assert_eq!(cli.metrics_bind.as_deref(), Some("127.0.0.1:9464"));
            assert!(cli.base_url.is_none());
        },
    );
}
