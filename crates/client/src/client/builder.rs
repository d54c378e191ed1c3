//! Client builder for constructing [`PokedexClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout) and the record cache
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::client::PokedexClient;
use crate::client::cache::RecordCache;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use pokedex_config::{
    Config,
    constants::{DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_CACHE_TTL_SECS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`PokedexClient`].
pub struct PokedexClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    cache: Option<(u64, Duration)>,
    metrics: Option<MetricsCollector>,
}

impl Default for PokedexClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            cache: Some((
                DEFAULT_CACHE_MAX_ENTRIES,
                Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            )),
            metrics: None,
        }
    }
}

impl PokedexClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `http://localhost:8080/api/pokemon`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Cache up to `max_entries` records for `ttl` each.
    pub fn cache(mut self, max_entries: u64, ttl: Duration) -> Self {
        self.cache = Some((max_entries, ttl));
        self
    }

    /// Disable the record cache.
    pub fn no_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// Set the metrics collector for API call tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types so the CLI and
    /// TUI build identical clients.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.timeout = config.connection.timeout;
        self.cache = config
            .cache
            .enabled
            .then_some((config.cache.max_entries, config.cache.ttl));
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`PokedexClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is blank.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PokedexClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("base_url is blank".to_string()));
        }

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        let cache = self.cache.map(|(max_entries, ttl)| {
            let cache = RecordCache::new(max_entries, ttl);
            match &self.metrics {
                Some(m) => cache.with_metrics(m.clone()),
                None => cache,
            }
        });

        Ok(PokedexClient {
            http,
            base_url,
            cache,
            metrics: self.metrics,
        })
    }
}
