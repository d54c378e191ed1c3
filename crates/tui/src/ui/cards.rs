//! Creature cards.
//!
//! Each card is a bordered panel: types and abilities, size and base
//! experience, tags, sprite, then one gauge per base stat. Cards stack
//! vertically; the selected one is outlined and kept in view.

use pokedex_client::CreatureCard;
use pokedex_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Rows of text above the stat gauges.
const INFO_LINES: u16 = 4;

/// Width of the stat label column.
const STAT_LABEL_WIDTH: u16 = 12;

/// Width of the stat value column.
const STAT_VALUE_WIDTH: u16 = 5;

/// Height of a card including its border.
pub fn card_height(card: &CreatureCard) -> u16 {
    let stats = u16::try_from(card.stats.len()).unwrap_or(u16::MAX);
    (2 + INFO_LINES).saturating_add(stats)
}

/// First card to draw so that `selected` is visible in `height` rows.
///
/// Keeps `current` when the selection is already in view.
pub fn scroll_offset(cards: &[CreatureCard], selected: usize, current: usize, height: u16) -> usize {
    if cards.is_empty() {
        return 0;
    }
    let selected = selected.min(cards.len() - 1);
    let mut offset = current.min(selected);

    while offset < selected {
        let needed: u32 = cards[offset..=selected]
            .iter()
            .map(|c| u32::from(card_height(c)))
            .sum();
        if needed <= u32::from(height) {
            break;
        }
        offset += 1;
    }
    offset
}

/// Draw the cards starting at `offset` until the area is full.
pub fn render_cards(
    f: &mut Frame,
    area: Rect,
    cards: &[CreatureCard],
    selected: usize,
    offset: usize,
    theme: &Theme,
) {
    let mut y = area.y;
    for (index, card) in cards.iter().enumerate().skip(offset) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }
        let height = card_height(card).min(remaining);
        let card_area = Rect::new(area.x, y, area.width, height);
        render_card(f, card_area, card, index == selected, theme);
        y += height;
    }
}

/// Draw a centered message in place of the cards.
pub fn render_placeholder(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text_dim))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(paragraph, area);
}

fn render_card(f: &mut Frame, area: Rect, card: &CreatureCard, selected: bool, theme: &Theme) {
    let border = if selected {
        Style::default()
            .fg(theme.highlight_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(vec![
            Span::styled(
                format!(" {} ", card.display_id),
                Style::default().fg(theme.text_dim),
            ),
            Span::styled(
                format!("{} ", card.name),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(INFO_LINES)];
    constraints.extend(card.stats.iter().map(|_| Constraint::Length(1)));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    f.render_widget(Paragraph::new(info_lines(card, theme)), rows[0]);

    for (stat, row) in card.stats.iter().zip(rows.iter().skip(1)) {
        if row.height == 0 {
            break;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(STAT_LABEL_WIDTH),
                Constraint::Length(STAT_VALUE_WIDTH),
                Constraint::Min(1),
            ])
            .split(*row);

        f.render_widget(
            Paragraph::new(stat.label.as_str()).style(Style::default().fg(theme.text_dim)),
            cols[0],
        );
        f.render_widget(
            Paragraph::new(format!("{:>3}", stat.value)).style(Style::default().fg(theme.text)),
            cols[1],
        );
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(theme.stat_bar)
                    .bg(theme.stat_bar_empty),
            )
            .ratio((stat.bar_percent / 100.0).clamp(0.0, 1.0))
            .label("");
        f.render_widget(gauge, cols[2]);
    }
}

fn info_lines<'a>(card: &'a CreatureCard, theme: &Theme) -> Vec<Line<'a>> {
    let dim = Style::default().fg(theme.text_dim);
    let text = Style::default().fg(theme.text);

    let mut tags = Vec::with_capacity(card.tags.len() * 2);
    for (i, tag) in card.tags.iter().enumerate() {
        if i > 0 {
            tags.push(Span::styled(" | ", dim));
        }
        tags.push(Span::styled(tag.as_str(), Style::default().fg(theme.tag)));
    }

    vec![
        Line::from(vec![
            Span::styled("Types: ", dim),
            Span::styled(card.types.join(", "), text),
            Span::styled("   Abilities: ", dim),
            Span::styled(card.abilities.join(", "), text),
        ]),
        Line::from(vec![
            Span::styled("Height: ", dim),
            Span::styled(card.height.as_str(), text),
            Span::styled("   Weight: ", dim),
            Span::styled(card.weight.as_str(), text),
            Span::styled("   Base exp: ", dim),
            Span::styled(card.base_experience.as_str(), text),
        ]),
        Line::from(tags),
        Line::from(vec![
            Span::styled("Sprite: ", dim),
            Span::styled(card.sprite_url.as_deref().unwrap_or("none"), text),
        ]),
    ]
}
