//! Terminal state cleanup.
//!
//! Invariants:
//! - Created right after raw mode and the alternate screen are entered.
//! - Lives for the whole TUI session; `Drop` must not panic.

use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};

/// Restores the terminal when dropped, including during panics.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// `no_mouse` must match whether mouse capture was enabled at setup.
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
