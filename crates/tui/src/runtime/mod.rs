//! Runtime components for the TUI application.
//!
//! - Terminal management (`TerminalGuard`)
//! - Async side effect handlers for API calls
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `pokedex_tui::app` and `pokedex_tui::ui`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod side_effects;
pub mod terminal;
