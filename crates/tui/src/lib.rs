//! Pokedex TUI Library
//!
//! This library provides the application state, input handling and
//! rendering for the Pokedex terminal interface: a search field with a
//! debounced suggestion dropdown, a card list, an error banner and the
//! sprite export notice.
//!
//! # Example
//!
//! ```rust
//! use pokedex_tui::{App, AppSettings};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(AppSettings::default());
//! let follow_up = app.update(pokedex_tui::Action::Input(KeyEvent::from(KeyCode::Char('p'))));
//! assert!(follow_up.is_none());
//! assert_eq!(app.query(), "p");
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, AppSettings, FOOTER_HEIGHT, HEADER_HEIGHT, HealthState};
pub use ui::toast::{Toast, ToastLevel};
