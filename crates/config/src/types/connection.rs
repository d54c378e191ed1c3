//! Connection configuration types for the Pokedex client.
//!
//! Responsibilities:
//! - Define connection settings (base URL, timeout).
//! - Define response cache and suggestion settings.
//! - Define the main `Config` structure combining them.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values come from `constants`, not magic numbers.
//! - `Config::default()` targets the local development API (localhost:8080).

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_SUGGEST_DEBOUNCE_MS, DEFAULT_TIMEOUT_SECS,
};
use crate::types::ColorTheme;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing Duration as milliseconds (integer).
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Connection configuration for the creature API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the creature API (e.g., http://localhost:8080/api/pokemon)
    pub base_url: String,
    /// Per-request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// In-process response cache settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Whether successful lookups are cached at all.
    pub enabled: bool,
    /// Maximum number of cached records before least-recently-used eviction.
    pub max_entries: u64,
    /// Time-to-live for each cached record (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

/// Search suggestion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Quiet period after the last keystroke (serialized as milliseconds)
    #[serde(with = "duration_millis")]
    pub debounce: Duration,
    /// Maximum number of suggestions displayed.
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_SUGGEST_DEBOUNCE_MS),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Response cache settings
    pub cache: CacheConfig,
    /// Suggestion dropdown settings
    pub suggest: SuggestConfig,
    /// Selected color theme
    pub theme: ColorTheme,
}

impl Config {
    /// Create a config pointing at `base_url` with every other value defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
            ..Self::default()
        }
    }
}
