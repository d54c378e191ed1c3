//! Centralized constants for the Pokedex workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default creature API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/pokemon";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Cache Defaults
// =============================================================================

/// Default maximum number of creature records held in the response cache.
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 256;

/// Default time-to-live for cached creature records in seconds (10 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Maximum allowed cache TTL in seconds (24 hours).
pub const MAX_CACHE_TTL_SECS: u64 = 86400;

// =============================================================================
// Suggestion Defaults
// =============================================================================

/// Quiet period after the last keystroke before a suggestion request fires.
pub const DEFAULT_SUGGEST_DEBOUNCE_MS: u64 = 200;

/// Maximum allowed suggestion debounce in milliseconds.
pub const MAX_SUGGEST_DEBOUNCE_MS: u64 = 5000;

/// Default maximum number of suggestions shown in the dropdown.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

// =============================================================================
// Card Rendering
// =============================================================================

/// Base stat value that fills a stat bar completely.
pub const STAT_BAR_MAX: f64 = 180.0;

/// Total base stat threshold for the "Pseudo-legendary vibes" tag.
pub const PSEUDO_LEGENDARY_TOTAL: u32 = 600;

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
///
/// Also the resolution of the suggestion debounce deadline check.
pub const DEFAULT_UI_TICK_MS: u64 = 50;

/// Default toast lifetime in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 4;

/// Default directory for exported sprite images.
pub const DEFAULT_EXPORT_DIR: &str = ".";
