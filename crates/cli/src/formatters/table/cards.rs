//! Creature card table layout.

use pokedex_client::{CreatureCard, NOT_FOUND_MESSAGE, SearchReport};

use crate::formatters::DEFAULT_MISSING_VALUE;

/// Width of a full stat bar in characters.
const BAR_CELLS: usize = 20;

pub fn format_report(report: &SearchReport) -> String {
    if report.is_empty() {
        return format!("{NOT_FOUND_MESSAGE}\n");
    }

    report
        .cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_card(card: &CreatureCard) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}  {}\n", card.display_id, card.name));
    output.push_str(&format!("  Types:      {}\n", join_or_missing(&card.types)));
    output.push_str(&format!(
        "  Abilities:  {}\n",
        join_or_missing(&card.abilities)
    ));
    output.push_str(&format!(
        "  Height:     {:<10}Weight: {:<10}Base exp: {}\n",
        card.height, card.weight, card.base_experience
    ));
    output.push_str(&format!("  Tags:       {}\n", card.tags.join(" | ")));

    if !card.stats.is_empty() {
        let label_width = card
            .stats
            .iter()
            .map(|s| s.label.len())
            .max()
            .unwrap_or(0);
        output.push_str("  Stats:\n");
        for stat in &card.stats {
            output.push_str(&format!(
                "    {:<label_width$}  {:>3}  {}\n",
                stat.label,
                stat.value,
                stat_bar(stat.bar_percent)
            ));
        }
    }

    output.push_str(&format!(
        "  Sprite:     {}\n",
        card.sprite_url.as_deref().unwrap_or(DEFAULT_MISSING_VALUE)
    ));

    output
}

fn join_or_missing(values: &[String]) -> String {
    if values.is_empty() {
        DEFAULT_MISSING_VALUE.to_string()
    } else {
        values.join(", ")
    }
}

/// Render a bar for a fill percentage in `0.0..=100.0`.
pub(crate) fn stat_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}
