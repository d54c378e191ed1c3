//! Keyboard handling.
//!
//! Responsibilities:
//! - Global keys (quit, export, theme cycling)
//! - Editing the search field and restarting the suggestion debounce
//! - Dropdown navigation (Up/Down/Enter/Esc) and card selection
//!
//! Does NOT handle:
//! - Mouse input (see `mouse`)
//! - Any I/O (requests are returned as actions)

use crate::action::Action;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;
use tui_input::InputRequest;

impl App {
    /// Handle a key press, returning an action to dispatch if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        // The notice blocks everything until dismissed.
        if self.notice.is_some() {
            return Some(Action::DismissNotice);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(Action::Quit),
            KeyCode::Char('s') if ctrl => Some(Action::ExportSelected),
            KeyCode::F(2) => Some(Action::CycleTheme),
            KeyCode::Esc => self
                .suggestions
                .is_visible()
                .then_some(Action::HideSuggestions),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Down => {
                if self.suggestions.is_visible() {
                    self.suggestions.highlight_next();
                } else {
                    self.select_next_card();
                }
                None
            }
            KeyCode::Up => {
                if self.suggestions.is_visible() {
                    self.suggestions.highlight_previous();
                } else {
                    self.select_previous_card();
                }
                None
            }
            _ => {
                self.edit_query(key);
                None
            }
        }
    }

    fn handle_enter(&mut self) -> Option<Action> {
        if self.suggestions.is_visible()
            && let Some(index) = self.suggestions.highlighted
        {
            return Some(Action::SelectSuggestion(index));
        }
        if self.loading {
            return None;
        }
        Some(Action::SubmitSearch)
    }

    /// Apply an editing key to the search field.
    fn edit_query(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let request = match key.code {
            KeyCode::Left if ctrl => InputRequest::GoToPrevWord,
            KeyCode::Right if ctrl => InputRequest::GoToNextWord,
            KeyCode::Char('u') if ctrl => InputRequest::DeleteLine,
            KeyCode::Char('w') if ctrl => InputRequest::DeletePrevWord,
            KeyCode::Char('a') if ctrl => InputRequest::GoToStart,
            KeyCode::Char('e') if ctrl => InputRequest::GoToEnd,
            KeyCode::Char(_) if ctrl => return,
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return,
        };

        if let Some(changed) = self.input.handle(request)
            && changed.value
        {
            self.on_query_changed(Instant::now());
        }
    }
}
