//! Search field and its trigger.

use pokedex_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::Input;

const INPUT_TITLE: &str = "Names or IDs, comma separated";

/// Draw the input with its cursor, and the trigger labelled `label`.
///
/// The trigger is drawn dimmed while `busy`.
pub fn render_search_bar(
    f: &mut Frame,
    input_area: Rect,
    button_area: Rect,
    input: &Input,
    label: &str,
    busy: bool,
    theme: &Theme,
) {
    let inner_width = input_area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(inner_width.saturating_sub(1));

    let field = Paragraph::new(input.value())
        .style(Style::default().fg(theme.text))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(INPUT_TITLE)
                .border_style(Style::default().fg(theme.border))
                .title_style(Style::default().fg(theme.title)),
        );
    f.render_widget(field, input_area);

    if input_area.width > 2 && input_area.height > 2 {
        let cursor = input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((
            input_area.x + 1 + cursor.min(input_area.width.saturating_sub(3)),
            input_area.y + 1,
        ));
    }

    let button_style = if busy {
        Style::default().fg(theme.disabled)
    } else {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(button_style),
        );
    f.render_widget(button, button_area);
}
