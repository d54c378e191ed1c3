//! Toast notifications for transient feedback.
//!
//! Toasts stack in the bottom-right corner above the footer and expire
//! after a per-level TTL. Blocking failures (sprite export) use the notice
//! popup instead; toasts only confirm things that went right or carry
//! non-blocking hints.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use pokedex_config::Theme;
use pokedex_config::constants::DEFAULT_TOAST_TTL_SECS;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => {
                Duration::from_secs(DEFAULT_TOAST_TTL_SECS)
            }
            Self::Error => Duration::from_secs(DEFAULT_TOAST_TTL_SECS * 2),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast
    pub id: Uuid,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    /// Time-to-live before auto-expiry
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true once the TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts to display at once.
pub const MAX_TOASTS: usize = 4;

const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 48;

/// Renders active toasts in the bottom-right corner, newest at the bottom.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let area = f.area();
    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height + 1
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 1),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TOAST_HEIGHT); active.len()])
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let max_chars = area.width.saturating_sub(4 + toast.level.label().len() as u16) as usize;
    let message: String = if toast.message.chars().count() > max_chars {
        let mut cut: String = toast
            .message
            .chars()
            .take(max_chars.saturating_sub(3))
            .collect();
        cut.push_str("...");
        cut
    } else {
        toast.message.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(theme.text)),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
