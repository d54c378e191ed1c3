//! Main creature API client.
//!
//! This module provides [`PokedexClient`], shared by the CLI and the TUI.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`cache`]: Record cache
//! - `lookup`: Identifier lookups and the all-settle fan-out
//! - `suggest`: Name suggestions
//! - `sprite`: Sprite downloads
//! - `health`: Service health
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Display derivations (see [`crate::profile`])
//!
//! # Invariants
//! - All methods take `&self`, so one client behind an `Arc` serves concurrent lookups.
//! - Requests are never retried.

pub mod builder;
pub mod cache;

mod health;
mod lookup;
mod sprite;
mod suggest;

use crate::metrics::MetricsCollector;
use cache::RecordCache;

/// Creature API client.
///
/// Use [`PokedexClient::builder()`] to create one:
///
/// ```rust,ignore
/// use pokedex_client::PokedexClient;
///
/// let client = PokedexClient::builder()
///     .base_url("http://localhost:8080/api/pokemon".to_string())
///     .build()?;
/// let report = client.search("pikachu, 1").await?;
/// ```
#[derive(Debug)]
pub struct PokedexClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) cache: Option<RecordCache>,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl PokedexClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PokedexClientBuilder {
        builder::PokedexClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether successful lookups are cached.
    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Drop every cached record.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}
