//! Test helpers for TUI testing.
//!
//! Key and mouse event constructors plus small drivers for typing text.

#![allow(dead_code)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pokedex_tui::{Action, App};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Left click at (`column`, `row`).
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Scroll wheel event at the origin.
pub fn scroll(down: bool) -> MouseEvent {
    MouseEvent {
        kind: if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        },
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

/// Type `text` into the app one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        let follow_up = app.update(Action::Input(key(c)));
        assert!(follow_up.is_none(), "typing should not dispatch anything");
    }
}

/// Feed `action` to the app and keep feeding follow-ups until none is
/// left. Returns every action that was applied, in order.
pub fn dispatch(app: &mut App, action: Action) -> Vec<Action> {
    let mut applied = Vec::new();
    let mut next = Some(action);
    while let Some(action) = next.take() {
        next = app.update(action.clone());
        applied.push(action);
    }
    applied
}
