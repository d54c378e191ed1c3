//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so that user-typed text never reaches
//! the log file. Always log `RedactedAction(&action)` instead of `?action`.
//!
//! # Invariants
//!
//! - Variants carrying typed text (queries, keywords, suggestion lists,
//!   notice messages) are handled explicitly.
//! - Key presses of printable characters are logged without the character.
//! - Variants without user text fall through to the default `Debug`.
//!
//! # Example
//!
//! ```ignore
//! let action = Action::Search { query: "pikachu, 25".to_string() };
//! tracing::info!("Handling action: {:?}", RedactedAction(&action));
//! // Logs: Handling action: Search(<11 chars, hash=...>)
//! ```

use crate::action::variants::Action;
use crossterm::event::KeyCode;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Redact typed text for logging, showing only length and a short hash.
/// Operators can still correlate repeated queries across log lines.
fn redact_text(text: &str) -> String {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    let hash = hasher.finish();
    format!("<{} chars, hash={:08x}>", text.len(), hash)
}

/// Redacted wrapper for Action that keeps typed text out of the logs.
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(key) => match key.code {
                KeyCode::Char(_) => write!(f, "Input(Char(<redacted>), {:?})", key.modifiers),
                code => write!(f, "Input({:?}, {:?})", code, key.modifiers),
            },
            Action::Search { query } => write!(f, "Search({})", redact_text(query)),
            Action::Suggest {
                keyword,
                request_id,
            } => write!(
                f,
                "Suggest({}, request_id={})",
                redact_text(keyword),
                request_id
            ),
            Action::SuggestionsLoaded { request_id, result } => match result {
                Ok(names) => write!(
                    f,
                    "SuggestionsLoaded(request_id={}, <{} names>)",
                    request_id,
                    names.len()
                ),
                Err(_) => write!(f, "SuggestionsLoaded(request_id={}, <error>)", request_id),
            },
            Action::SearchFinished(result) => match result {
                Ok(report) => write!(
                    f,
                    "SearchFinished(<{} cards, {} failed>)",
                    report.cards.len(),
                    report.failed.len()
                ),
                Err(_) => write!(f, "SearchFinished(<validation error>)"),
            },
            Action::ExportSprite { name, dir, .. } => {
                write!(f, "ExportSprite({}, {:?})", redact_text(name), dir)
            }
            Action::ExportFinished { name, result } => write!(
                f,
                "ExportFinished({}, ok={})",
                redact_text(name),
                result.is_ok()
            ),
            Action::Notify(level, message) => {
                write!(f, "Notify({:?}, <{} chars>)", level, message.len())
            }
            other => write!(f, "{:?}", other),
        }
    }
}
