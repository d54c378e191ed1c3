//! Inline error banner above the cards.

use pokedex_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render_banner(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " ! ",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(theme.error)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
