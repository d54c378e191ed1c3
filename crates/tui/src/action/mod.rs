//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and async API operation results.
//!
//! # Module Structure
//!
//! - `redaction`: Logging wrapper (`RedactedAction`)
//! - `variants`: Action enum definitions (`Action`)
//!
//! When logging Actions, use `RedactedAction(&action)` instead of `?action`
//! so typed queries are never written to log files.

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;
