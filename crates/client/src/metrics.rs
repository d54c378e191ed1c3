//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for creature API calls, including:
//! - Request latency histograms
//! - Request and error counters
//! - Cache hit/miss counters
//! - Sprite export counters
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "pokedex_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "pokedex_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "pokedex_api_errors_total";

/// Metric name for cache hit counter.
pub const METRIC_CACHE_HITS: &str = "pokedex_api_cache_hits_total";

/// Metric name for cache miss counter.
pub const METRIC_CACHE_MISSES: &str = "pokedex_api_cache_misses_total";

/// Metric name for the identifiers-per-search histogram.
pub const METRIC_LOOKUP_BATCH_SIZE: &str = "pokedex_lookup_batch_size";

/// Metric name for sprite export counter.
pub const METRIC_SPRITE_EXPORTS: &str = "pokedex_sprite_exports_total";

/// Metric name for TUI frame render duration histogram.
pub const METRIC_TUI_FRAME_RENDER_DURATION: &str = "pokedex_tui_frame_render_duration_seconds";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level errors (connection refused, DNS, timeout, etc.)
    Transport,
    /// Creature does not exist
    NotFound,
    /// Other HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Body could not be parsed
    Parse,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Parse => "parse",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        if error.is_not_found() {
            return ErrorCategory::NotFound;
        }
        match error {
            ClientError::ApiError { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::ApiError { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::InvalidResponse(_) => ErrorCategory::Parse,
            ClientError::HttpError(e) if e.is_decode() => ErrorCategory::Parse,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() || e.is_request() => {
                ErrorCategory::Transport
            }
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for creature API calls.
///
/// Thin wrapper around the `metrics` crate macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is None if the request failed before receiving a response.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => ErrorCategory::from(error).as_str(),
        )
        .increment(1);
    }

    /// Record a cache hit.
    pub fn record_cache_hit(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_HITS).increment(1);
    }

    /// Record a cache miss.
    pub fn record_cache_miss(&self) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_CACHE_MISSES).increment(1);
    }

    /// Record how many identifiers one search fanned out to.
    pub fn record_lookup_batch(&self, size: usize) {
        if !self.enabled {
            return;
        }
        metrics::histogram!(METRIC_LOOKUP_BATCH_SIZE).record(size as f64);
    }

    /// Record a sprite export attempt and whether it succeeded.
    pub fn record_sprite_export(&self, success: bool) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_SPRITE_EXPORTS,
            "result" => if success { "ok" } else { "error" },
        )
        .increment(1);
    }

    /// Record TUI frame render duration.
    pub fn record_tui_frame_render_duration(&self, duration: Duration) {
        if !self.enabled {
            return;
        }
        metrics::histogram!(METRIC_TUI_FRAME_RENDER_DURATION).record(duration.as_secs_f64());
    }
}
