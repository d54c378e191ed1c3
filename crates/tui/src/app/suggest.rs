//! Debounced, sequenced name suggestions.
//!
//! Every edit of the search field pushes the debounce deadline back; the
//! UI tick fires a request once the deadline passes, so a burst of
//! keystrokes yields one request for the final text. Each request carries
//! a fresh id and only the response to the newest one is applied.

use std::sync::Arc;
use std::time::Instant;

use crate::action::Action;
use crate::app::App;
use pokedex_client::ClientError;

impl App {
    /// Restart the debounce window after an edit.
    pub(crate) fn on_query_changed(&mut self, now: Instant) {
        self.suggestions.deadline = Some(now + self.settings.suggest_debounce);
    }

    /// Fire a suggestion request if the debounce deadline has passed.
    ///
    /// Called from the UI tick. A blank field hides the dropdown instead.
    pub fn poll_suggest_deadline(&mut self, now: Instant) -> Option<Action> {
        let deadline = self.suggestions.deadline?;
        if now < deadline {
            return None;
        }
        self.suggestions.deadline = None;

        let keyword = self.query().trim().to_string();
        if keyword.is_empty() {
            self.suggestions.reset();
            return None;
        }

        let request_id = self.suggestions.next_request();
        Some(Action::Suggest {
            keyword,
            request_id,
        })
    }

    /// Apply suggestions, unless a newer request has been issued since.
    pub(crate) fn apply_suggestions(
        &mut self,
        request_id: u64,
        result: Result<Vec<String>, Arc<ClientError>>,
    ) {
        if self.suggestions.pending != Some(request_id) {
            tracing::debug!(
                request_id,
                latest = self.suggestions.last_request_id,
                "Discarding stale suggestions"
            );
            return;
        }
        self.suggestions.pending = None;

        match result {
            Ok(mut names) if !names.is_empty() => {
                names.truncate(self.settings.max_suggestions);
                self.suggestions.items = names;
                self.suggestions.highlighted = None;
            }
            Ok(_) => self.suggestions.hide(),
            Err(e) => {
                tracing::warn!(error = %e, request_id, "Suggestion request failed");
                self.suggestions.hide();
            }
        }
    }

    /// Put the chosen suggestion in the field and search for it.
    pub(crate) fn select_suggestion(&mut self, index: usize) -> Option<Action> {
        // A pick must start a search, so it is refused while one is running
        // and the field and dropdown stay as they are.
        if self.loading {
            tracing::debug!(index, "Search in flight, ignoring suggestion pick");
            return None;
        }
        let name = self.suggestions.items.get(index)?.clone();
        self.set_query(name);
        self.suggestions.reset();
        self.submit_search()
    }
}
