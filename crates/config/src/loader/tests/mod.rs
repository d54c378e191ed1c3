//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Environment variables read by the loader, cleared by tests that need a clean slate.
pub const POKEDEX_VARS: [&str; 9] = [
    "POKEDEX_BASE_URL",
    "POKEDEX_TIMEOUT",
    "POKEDEX_CACHE_ENABLED",
    "POKEDEX_CACHE_MAX_ENTRIES",
    "POKEDEX_CACHE_TTL_SECS",
    "POKEDEX_SUGGEST_DEBOUNCE_MS",
    "POKEDEX_MAX_SUGGESTIONS",
    "POKEDEX_THEME",
    "POKEDEX_CONFIG_PATH",
];

/// Build `temp_env` overrides that unset every loader variable.
pub fn cleared_vars() -> Vec<(&'static str, Option<&'static str>)> {
    POKEDEX_VARS.iter().map(|var| (*var, None)).collect()
}
