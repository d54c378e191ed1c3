//! Footer with key hints.

use pokedex_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const HINTS: &[(&str, &str)] = &[
    ("Enter", "search"),
    ("Up/Down", "select"),
    ("Esc", "close"),
    ("Ctrl+S", "save sprite"),
    ("F2", "theme"),
    ("Ctrl+Q", "quit"),
];

pub fn render_footer(f: &mut Frame, area: Rect, card_count: usize, theme: &Theme) {
    let mut spans = Vec::with_capacity(HINTS.len() * 2 + 1);
    for (key, label) in HINTS {
        spans.push(Span::styled(
            format!(" {key}"),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(" {label} "),
            Style::default().fg(theme.text_dim),
        ));
    }
    if card_count > 0 {
        spans.push(Span::styled(
            format!("| {card_count} shown"),
            Style::default().fg(theme.text_dim),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
