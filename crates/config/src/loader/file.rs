//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve the default config file location via `directories`.
//! - Parse the optional config file and apply its values to a `ConfigLoader`.
//!
//! Invariants:
//! - File values are applied before environment variables (env vars take precedence).
//! - A missing file at the default location is not an error; a missing file at an
//!   explicitly requested path is.
//! - Every field in the file is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ColorTheme;

/// On-disk config file shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub cache_enabled: Option<bool>,
    pub cache_max_entries: Option<u64>,
    pub cache_ttl_seconds: Option<u64>,
    pub suggest_debounce_ms: Option<u64>,
    pub max_suggestions: Option<usize>,
    pub theme: Option<ColorTheme>,
}

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/pokedex/config.json`
/// - macOS: `~/Library/Application Support/pokedex/config.json`
/// - Windows: `%AppData%\pokedex\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "pokedex").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the config file (explicit path or default location) to the loader.
pub(crate) fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let (path, explicit) = match loader.config_path() {
        Some(path) => (path.clone(), true),
        None => match default_config_path() {
            Ok(path) => (path, false),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping config file lookup");
                return Ok(());
            }
        },
    };

    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "No config file found");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    tracing::debug!(path = %path.display(), "Loaded config file");
    apply_file_config(loader, file);
    Ok(())
}

fn apply_file_config(loader: &mut ConfigLoader, file: FileConfig) {
    if let Some(url) = file.base_url {
        loader.set_base_url(Some(url));
    }
    if let Some(secs) = file.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(enabled) = file.cache_enabled {
        loader.set_cache_enabled(Some(enabled));
    }
    if let Some(entries) = file.cache_max_entries {
        loader.set_cache_max_entries(Some(entries));
    }
    if let Some(secs) = file.cache_ttl_seconds {
        loader.set_cache_ttl(Some(Duration::from_secs(secs)));
    }
    if let Some(ms) = file.suggest_debounce_ms {
        loader.set_suggest_debounce(Some(Duration::from_millis(ms)));
    }
    if let Some(max) = file.max_suggestions {
        loader.set_max_suggestions(Some(max));
    }
    if let Some(theme) = file.theme {
        loader.set_theme(Some(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "pokedex")
            .unwrap()
            .config_dir()
            .join("config.json");

        assert_eq!(default_config_path().unwrap(), expected);
    }

    #[test]
    fn test_file_config_rejects_unknown_fields() {
        let err = serde_json::from_str::<FileConfig>(r#"{"base_ur": "http://x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_file_config_all_fields_optional() {
        let parsed: FileConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.base_url.is_none());
        assert!(parsed.theme.is_none());
    }
}
