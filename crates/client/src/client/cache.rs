//! In-memory cache of creature records.
//!
//! An LRU cache with a per-entry TTL keyed by the identifier exactly as
//! requested, so `"25"` and `"pikachu"` are separate entries. Only
//! successful lookups are stored.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::metrics::MetricsCollector;
use crate::models::CreatureRecord;

/// Cache of successfully fetched creature records.
#[derive(Debug, Clone)]
pub struct RecordCache {
    inner: MokaCache<String, CreatureRecord>,
    metrics: Option<MetricsCollector>,
}

impl RecordCache {
    /// Create a cache holding at most `max_entries` records for `ttl` each.
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        Self {
            inner: MokaCache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build(),
            metrics: None,
        }
    }

    /// Attach a metrics collector for hit/miss counters.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Look up a record, counting the hit or miss.
    pub async fn get(&self, identifier: &str) -> Option<CreatureRecord> {
        let found = self.inner.get(identifier).await;

        match (&found, &self.metrics) {
            (Some(_), Some(m)) => m.record_cache_hit(),
            (None, Some(m)) => m.record_cache_miss(),
            _ => {}
        }
        trace!(identifier, hit = found.is_some(), "Record cache lookup");

        found
    }

    /// Store a successfully fetched record.
    pub async fn insert(&self, identifier: &str, record: CreatureRecord) {
        self.inner.insert(identifier.to_string(), record).await;
    }

    /// Drop every cached record.
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }

    /// Approximate number of cached records.
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
