//! Integration tests for configuration loading across CLI and TUI entrypoints.

use std::time::Duration;

use pokedex_config::{ColorTheme, Config, ConfigError, ConfigLoader, Theme, constants};

#[test]
fn test_config_loader_cli_overrides() {
    let config = ConfigLoader::new()
        .with_base_url("https://cli-override.example/api/pokemon".to_string())
        .with_timeout(Duration::from_secs(3))
        .build()
        .expect("should build with CLI overrides");

    assert_eq!(
        config.connection.base_url,
        "https://cli-override.example/api/pokemon"
    );
    assert_eq!(config.connection.timeout, Duration::from_secs(3));
}

#[test]
fn test_default_config_matches_loader_defaults() {
    let built = ConfigLoader::new().build().unwrap();
    assert_eq!(built, Config::default());
}

#[test]
fn test_constants_exposed() {
    assert_eq!(constants::DEFAULT_SUGGEST_DEBOUNCE_MS, 200);
    assert_eq!(constants::DEFAULT_MAX_SUGGESTIONS, 10);
    assert_eq!(constants::PSEUDO_LEGENDARY_TOTAL, 600);
}

#[test]
fn test_theme_expansion_from_config() {
    let config = ConfigLoader::new()
        .with_theme(ColorTheme::HighContrast)
        .build()
        .unwrap();
    let theme = Theme::from_color_theme(config.theme);
    assert_ne!(theme, Theme::default());
}

#[test]
fn test_invalid_url_error_is_descriptive() {
    let err = ConfigLoader::new()
        .with_base_url("not a url".to_string())
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("base_url"));
}
