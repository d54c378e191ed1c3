//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Clicking a suggestion selects it
//! - Clicking the trigger submits a search
//! - Clicking anywhere outside the input and the dropdown hides the dropdown
//! - Scrolling moves the card selection
//!
//! Does NOT handle:
//! - Keyboard input
//! - Rendering (regions come from `AppLayout`, shared with the renderer)

use crate::action::Action;
use crate::app::App;
use crate::app::state::contains;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

impl App {
    /// Handle mouse input, returning an action to dispatch if any.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown if self.notice.is_none() => {
                self.select_next_card();
                None
            }
            MouseEventKind::ScrollUp if self.notice.is_none() => {
                self.select_previous_card();
                None
            }
            _ => None,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Option<Action> {
        if self.notice.is_some() {
            return Some(Action::DismissNotice);
        }

        let layout = self.layout();
        let count = self.suggestions.items.len();

        if self.suggestions.is_visible() {
            if let Some(index) = layout.dropdown_index(count, column, row) {
                return Some(Action::SelectSuggestion(index));
            }
            if contains(layout.dropdown(count), column, row) {
                // Border of the dropdown.
                return None;
            }
        }

        if contains(layout.button, column, row) {
            self.suggestions.reset();
            return (!self.loading).then_some(Action::SubmitSearch);
        }

        if contains(layout.input, column, row) {
            return None;
        }

        self.suggestions.is_visible().then_some(Action::HideSuggestions)
    }
}
