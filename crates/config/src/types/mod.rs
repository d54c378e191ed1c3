//! Configuration type definitions for the Pokedex client.
//!
//! Responsibilities:
//! - Define connection, cache and suggestion settings.
//! - Define the runtime color theme consumed by the TUI.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as integers (seconds or milliseconds as named).
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.

pub(crate) mod connection;
mod theme;

pub use connection::{CacheConfig, Config, ConnectionConfig, SuggestConfig};
pub use theme::{ColorTheme, Theme};
