//! Theme types for the Pokedex TUI.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//!
//! Invariants:
//! - `ColorTheme` is the configured representation; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
        }
    }

    /// Next theme in the cycle (bound to F2 in the TUI).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::HighContrast,
            Self::HighContrast => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "default" => Ok(Self::Default),
            "light" => Ok(Self::Light),
            "high_contrast" => Ok(Self::HighContrast),
            other => Err(format!(
                "unknown theme '{other}' (expected default, light or high_contrast)"
            )),
        }
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Cards
    pub stat_bar: Color,
    pub stat_bar_empty: Color,
    pub tag: Color,
}

impl Theme {
    /// Expand a configured `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Cyan,
                title: Color::Cyan,
                accent: Color::Yellow,

                highlight_fg: Color::Yellow,
                highlight_bg: Color::DarkGray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,
                disabled: Color::DarkGray,

                stat_bar: Color::Green,
                stat_bar_empty: Color::DarkGray,
                tag: Color::Magenta,
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,

                stat_bar: Color::Blue,
                stat_bar_empty: Color::Gray,
                tag: Color::Magenta,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::Yellow,
                accent: Color::Yellow,

                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,

                success: Color::LightGreen,
                warning: Color::LightYellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                disabled: Color::Gray,

                stat_bar: Color::LightGreen,
                stat_bar_empty: Color::Gray,
                tag: Color::LightMagenta,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
