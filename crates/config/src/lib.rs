//! Configuration management for the Pokedex client.
//!
//! This crate provides types and loaders for managing the creature API
//! connection, response cache and suggestion settings from environment
//! variables and an optional JSON config file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{CacheConfig, ColorTheme, Config, ConnectionConfig, SuggestConfig, Theme};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
