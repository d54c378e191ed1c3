//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `POKEDEX_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ColorTheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Parse an environment variable into `T`, mapping failures to `InvalidValue`.
fn parse_env<T: FromStr>(var: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: expected.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("POKEDEX_BASE_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(secs) = parse_env::<u64>("POKEDEX_TIMEOUT", "must be a number")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(enabled) = parse_env::<bool>("POKEDEX_CACHE_ENABLED", "must be true or false")? {
        loader.set_cache_enabled(Some(enabled));
    }
    if let Some(entries) =
        parse_env::<u64>("POKEDEX_CACHE_MAX_ENTRIES", "must be a positive number")?
    {
        loader.set_cache_max_entries(Some(entries));
    }
    if let Some(secs) = parse_env::<u64>("POKEDEX_CACHE_TTL_SECS", "must be a number")? {
        loader.set_cache_ttl(Some(Duration::from_secs(secs)));
    }
    if let Some(ms) = parse_env::<u64>("POKEDEX_SUGGEST_DEBOUNCE_MS", "must be a number")? {
        loader.set_suggest_debounce(Some(Duration::from_millis(ms)));
    }
    if let Some(max) = parse_env::<usize>("POKEDEX_MAX_SUGGESTIONS", "must be a positive number")?
    {
        loader.set_max_suggestions(Some(max));
    }
    if let Some(raw) = env_var_or_none("POKEDEX_THEME") {
        let theme = raw
            .parse::<ColorTheme>()
            .map_err(|message| ConfigError::InvalidValue {
                var: "POKEDEX_THEME".to_string(),
                message,
            })?;
        loader.set_theme(Some(theme));
    }

    Ok(())
}

/// Resolve the config file path from the environment (only if not already set via CLI).
pub fn apply_env_config_path(loader: &mut ConfigLoader) {
    if loader.config_path().is_none()
        && let Some(config_path) = env_var_or_none("POKEDEX_CONFIG_PATH")
    {
        loader.set_config_path(Some(std::path::PathBuf::from(config_path)));
    }
}
