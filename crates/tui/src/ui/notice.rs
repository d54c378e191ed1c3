//! Blocking notice popup.

use crate::app::Notice;
use pokedex_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const DISMISS_HINT: &str = "Press any key to dismiss";

pub fn render_notice(f: &mut Frame, notice: &Notice, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    let text = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        Line::styled(DISMISS_HINT, Style::default().fg(theme.text_dim)),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notice.title.as_str())
                .title_style(
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(theme.error)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of `percent_x` by `percent_y` of `r`, centered in it.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
