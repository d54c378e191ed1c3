//! Header bar: title, API endpoint, service health and active theme.

use crate::app::HealthState;
use pokedex_config::{ColorTheme, Theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render_header(
    f: &mut Frame,
    area: Rect,
    base_url: &str,
    health: &HealthState,
    color_theme: ColorTheme,
    theme: &Theme,
) {
    let health_color = match health {
        HealthState::Up => theme.success,
        HealthState::Unknown => theme.text_dim,
        HealthState::Down(_) | HealthState::Unreachable => theme.error,
    };

    let mut spans = vec![Span::styled(
        " Pokedex ",
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )];
    if !base_url.is_empty() {
        spans.push(Span::styled(
            format!("{base_url} "),
            Style::default().fg(theme.text_dim),
        ));
    }
    spans.push(Span::raw("| API: "));
    spans.push(Span::styled(health.label(), Style::default().fg(health_color)));
    spans.push(Span::styled(
        format!(" | Theme: {color_theme}"),
        Style::default().fg(theme.text_dim),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
