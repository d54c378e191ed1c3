//! Suggestion dropdown drawn over the content below the search field.

use pokedex_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

pub fn render_dropdown(
    f: &mut Frame,
    area: Rect,
    items: &[String],
    highlighted: Option<usize>,
    theme: &Theme,
) {
    if area.height < 3 {
        return;
    }

    let list = List::new(items.iter().map(|name| ListItem::new(name.as_str())))
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );

    let mut state = ListState::default().with_selected(highlighted);
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}
