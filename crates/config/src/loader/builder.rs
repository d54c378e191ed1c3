//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables, a config file, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - Builder methods take precedence over environment variables when called after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::{apply_env, apply_env_config_path};
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_SUGGEST_DEBOUNCE_MS, DEFAULT_TIMEOUT_SECS, MAX_CACHE_TTL_SECS,
    MAX_SUGGEST_DEBOUNCE_MS, MAX_TIMEOUT_SECS,
};
use crate::types::{CacheConfig, ColorTheme, Config, ConnectionConfig, SuggestConfig};

/// Configuration loader that builds config from environment variables and a config file.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout: Option<Duration>,
    cache_enabled: Option<bool>,
    cache_max_entries: Option<u64>,
    cache_ttl: Option<Duration>,
    suggest_debounce: Option<Duration>,
    max_suggestions: Option<usize>,
    theme: Option<ColorTheme>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the JSON config file.
    ///
    /// Uses the path from `with_config_path`, then `POKEDEX_CONFIG_PATH`, then the
    /// platform default. A missing file at the default location is skipped.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_env_config_path(&mut self);
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable the response cache.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = Some(enabled);
        self
    }

    /// Set the suggestion debounce window.
    pub fn with_suggest_debounce(mut self, debounce: Duration) -> Self {
        self.suggest_debounce = Some(debounce);
        self
    }

    /// Set the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_base_url(
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };
        let cache = CacheConfig {
            enabled: self.cache_enabled.unwrap_or(true),
            max_entries: self.cache_max_entries.unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            ttl: self
                .cache_ttl
                .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        };
        let suggest = SuggestConfig {
            debounce: self
                .suggest_debounce
                .unwrap_or(Duration::from_millis(DEFAULT_SUGGEST_DEBOUNCE_MS)),
            max_suggestions: self.max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS),
        };

        Self::validate_timeout(&connection)?;
        Self::validate_cache(&cache)?;
        Self::validate_suggest(&suggest)?;

        Ok(Config {
            connection,
            cache,
            suggest,
            theme: self.theme.unwrap_or_default(),
        })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    fn validate_cache(cache: &CacheConfig) -> Result<(), ConfigError> {
        if !cache.enabled {
            return Ok(());
        }

        if cache.max_entries == 0 {
            return Err(ConfigError::InvalidCache {
                message: "max_entries must be greater than 0 (disable the cache instead)"
                    .to_string(),
            });
        }

        let ttl_secs = cache.ttl.as_secs();
        if ttl_secs == 0 || ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::InvalidCache {
                message: format!(
                    "ttl must be between 1 and {} seconds (got {})",
                    MAX_CACHE_TTL_SECS, ttl_secs
                ),
            });
        }

        Ok(())
    }

    fn validate_suggest(suggest: &SuggestConfig) -> Result<(), ConfigError> {
        let debounce_ms = suggest.debounce.as_millis() as u64;
        if debounce_ms > MAX_SUGGEST_DEBOUNCE_MS {
            return Err(ConfigError::InvalidSuggest {
                message: format!(
                    "debounce exceeds maximum allowed value of {} ms (got {})",
                    MAX_SUGGEST_DEBOUNCE_MS, debounce_ms
                ),
            });
        }

        if suggest.max_suggestions == 0 {
            return Err(ConfigError::InvalidSuggest {
                message: "max_suggestions must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_cache_enabled(&mut self, enabled: Option<bool>) {
        self.cache_enabled = enabled;
    }

    pub(crate) fn set_cache_max_entries(&mut self, entries: Option<u64>) {
        self.cache_max_entries = entries;
    }

    pub(crate) fn set_cache_ttl(&mut self, ttl: Option<Duration>) {
        self.cache_ttl = ttl;
    }

    pub(crate) fn set_suggest_debounce(&mut self, debounce: Option<Duration>) {
        self.suggest_debounce = debounce;
    }

    pub(crate) fn set_max_suggestions(&mut self, max: Option<usize>) {
        self.max_suggestions = max;
    }

    pub(crate) fn set_theme(&mut self, theme: Option<ColorTheme>) {
        self.theme = theme;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank/whitespace-only as missing (returns Err(ConfigError::MissingBaseUrl))
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slash
pub(crate) fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:8080/api/pokemon): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:8080/api/pokemon), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. http://localhost:8080/api/pokemon)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
