//! Submitting searches and applying their reports.

use crate::action::Action;
use crate::app::App;
use pokedex_client::{SearchReport, ValidationError, parse_identifiers};

/// Placeholder shown before the first search.
pub const WELCOME_MESSAGE: &str = "Type names or IDs separated by commas and press Enter.";

impl App {
    /// Validate the input and start a search.
    ///
    /// Ignored while a search is in flight. A query without identifiers
    /// shows the validation message inline and issues no request.
    pub(crate) fn submit_search(&mut self) -> Option<Action> {
        if self.loading {
            tracing::debug!("Search already in flight, ignoring submit");
            return None;
        }
        self.suggestions.reset();

        let query = self.query().to_string();
        if let Err(e) = parse_identifiers(&query) {
            self.show_validation_error(&e);
            return None;
        }

        self.loading = true;
        self.cards.clear();
        self.selected = 0;
        self.card_offset = 0;
        self.banner = None;
        self.empty_message = None;

        Some(Action::Search { query })
    }

    /// Replace the cards and banner with a finished search.
    pub(crate) fn apply_search_result(&mut self, result: Result<SearchReport, ValidationError>) {
        match result {
            Ok(report) => {
                self.banner = report.error_banner();
                self.empty_message = report.empty_message().map(str::to_string);
                self.cards = report.cards;
                self.selected = 0;
                self.card_offset = 0;
            }
            Err(e) => self.show_validation_error(&e),
        }
    }

    fn show_validation_error(&mut self, error: &ValidationError) {
        self.cards.clear();
        self.selected = 0;
        self.card_offset = 0;
        self.banner = Some(error.to_string());
        self.empty_message = None;
    }

    pub(crate) fn select_next_card(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn select_previous_card(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}
