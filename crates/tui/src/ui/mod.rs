//! UI rendering modules for the TUI.
//!
//! Each module draws one region of the screen from borrowed state; none of
//! them mutate the app.

pub mod banner;
pub mod cards;
pub mod dropdown;
pub mod footer;
pub mod header;
pub mod notice;
pub mod search_bar;
pub mod toast;

pub use toast::{Toast, ToastLevel};
