//! Core state types for the TUI app.
//!
//! Responsibilities:
//! - Screen geometry shared by rendering and mouse hit-testing (`AppLayout`).
//! - Suggestion dropdown state (`SuggestState`).
//! - Service health and the blocking notice.
//!
//! Does NOT handle:
//! - Input handling or rendering (see sibling modules).

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::time::Instant;

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the footer bar in rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the bordered search bar.
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the search trigger, wide enough for its busy label.
pub const SEARCH_BUTTON_WIDTH: u16 = 17;

/// Idle label of the search trigger.
pub const SEARCH_LABEL: &str = "Search";

/// Label of the search trigger while lookups are in flight.
pub const SEARCHING_LABEL: &str = "Searching...";

/// Service health as reported by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthState {
    /// Not checked yet
    #[default]
    Unknown,
    /// Service reported UP
    Up,
    /// Service answered with another status
    Down(String),
    /// Service could not be reached
    Unreachable,
}

impl HealthState {
    /// Label shown in the header.
    pub fn label(&self) -> String {
        match self {
            HealthState::Unknown => "checking...".to_string(),
            HealthState::Up => "UP".to_string(),
            HealthState::Down(status) => status.clone(),
            HealthState::Unreachable => "unreachable".to_string(),
        }
    }
}

/// A blocking message that must be dismissed before anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Suggestion dropdown state.
///
/// `deadline` implements the debounce: every input change replaces it, and
/// the tick handler fires once it has passed. `pending` is the id of the only
/// request whose response will be accepted.
#[derive(Debug, Clone, Default)]
pub struct SuggestState {
    pub deadline: Option<Instant>,
    pub last_request_id: u64,
    pub pending: Option<u64>,
    pub items: Vec<String>,
    pub highlighted: Option<usize>,
}

impl SuggestState {
    /// Whether the dropdown is showing.
    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }

    /// Hide the dropdown and forget any highlight.
    pub fn hide(&mut self) {
        self.items.clear();
        self.highlighted = None;
    }

    /// Hide the dropdown, drop the debounce deadline and stop waiting for
    /// the in-flight response.
    pub fn reset(&mut self) {
        self.hide();
        self.deadline = None;
        self.pending = None;
    }

    /// Allocate the next request id and wait for it.
    pub fn next_request(&mut self) -> u64 {
        self.last_request_id += 1;
        self.pending = Some(self.last_request_id);
        self.last_request_id
    }

    pub fn highlight_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) if i + 1 < self.items.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = match self.highlighted {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }
}

/// Screen regions for one frame.
///
/// Computed from the terminal area by both the renderer and the mouse
/// handler so clicks land on what was drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    pub banner: Rect,
    pub cards: Rect,
    pub footer: Rect,
}

impl AppLayout {
    /// Split `area` into regions; the banner row collapses when unused.
    pub fn compute(area: Rect, show_banner: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Length(u16::from(show_banner)),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(SEARCH_BUTTON_WIDTH),
            ])
            .split(rows[1]);

        Self {
            header: rows[0],
            input: bar[0],
            button: bar[1],
            banner: rows[2],
            cards: rows[3],
            footer: rows[4],
        }
    }

    /// Region of the dropdown listing `items` suggestions, directly under
    /// the input and clipped above the footer.
    pub fn dropdown(&self, items: usize) -> Rect {
        if items == 0 {
            return Rect::default();
        }
        let top = self.input.bottom();
        let available = self.footer.y.saturating_sub(top);
        let wanted = u16::try_from(items).unwrap_or(u16::MAX).saturating_add(2);

        Rect {
            x: self.input.x,
            y: top,
            width: self.input.width,
            height: wanted.min(available),
        }
    }

    /// Index of the dropdown row at `row`, if that row shows a suggestion.
    pub fn dropdown_index(&self, items: usize, column: u16, row: u16) -> Option<usize> {
        let area = self.dropdown(items);
        if !contains(area, column, row) {
            return None;
        }
        let first = area.y + 1;
        let last = area.bottom().saturating_sub(1);
        if row < first || row >= last {
            return None;
        }
        let index = usize::from(row - first);
        (index < items).then_some(index)
    }
}

/// Whether the cell at (`column`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.input.y, 1);
        assert_eq!(layout.input.height, SEARCH_BAR_HEIGHT);
        assert_eq!(layout.button.width, SEARCH_BUTTON_WIDTH);
        assert_eq!(layout.banner.y, 4);
        assert_eq!(layout.banner.height, 1);
        assert_eq!(layout.cards.y, 5);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_banner_collapses() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.banner.height, 0);
        assert_eq!(layout.cards.y, 4);
    }

    #[test]
    fn test_dropdown_sits_under_input() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), false);
        let dropdown = layout.dropdown(3);
        assert_eq!(dropdown.y, layout.input.bottom());
        assert_eq!(dropdown.height, 5);
        assert_eq!(dropdown.width, layout.input.width);
        assert_eq!(layout.dropdown(0), Rect::default());
    }

    #[test]
    fn test_dropdown_is_clipped_above_footer() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 10), false);
        let dropdown = layout.dropdown(50);
        assert_eq!(dropdown.bottom(), layout.footer.y);
    }

    #[test]
    fn test_dropdown_index_hit_testing() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 24), false);
        let top = layout.input.bottom();
        // Border rows are not items.
        assert_eq!(layout.dropdown_index(3, 2, top), None);
        assert_eq!(layout.dropdown_index(3, 2, top + 1), Some(0));
        assert_eq!(layout.dropdown_index(3, 2, top + 3), Some(2));
        assert_eq!(layout.dropdown_index(3, 2, top + 4), None);
        // Outside horizontally.
        assert_eq!(layout.dropdown_index(3, 79, top + 1), None);
    }

    #[test]
    fn test_highlight_moves_within_bounds() {
        let mut state = SuggestState {
            items: vec!["pichu".into(), "pikachu".into()],
            ..Default::default()
        };
        state.highlight_previous();
        assert_eq!(state.highlighted, None);
        state.highlight_next();
        state.highlight_next();
        state.highlight_next();
        assert_eq!(state.highlighted, Some(1));
        state.highlight_previous();
        state.highlight_previous();
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_request_ids_increase() {
        let mut state = SuggestState::default();
        assert_eq!(state.next_request(), 1);
        assert_eq!(state.next_request(), 2);
        assert_eq!(state.pending, Some(2));
        state.reset();
        assert_eq!(state.pending, None);
        assert_eq!(state.last_request_id, 2);
    }

    #[test]
    fn test_health_labels() {
        assert_eq!(HealthState::Up.label(), "UP");
        assert_eq!(HealthState::Down("DOWN".into()).label(), "DOWN");
        assert_eq!(HealthState::Unreachable.label(), "unreachable");
    }
}
