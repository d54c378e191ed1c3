//! Creature card derivations.
//!
//! Everything shown on a card is computed here from a [`CreatureRecord`]
//! with no I/O, so the CLI and TUI render identical values.

use pokedex_config::constants::{PSEUDO_LEGENDARY_TOTAL, STAT_BAR_MAX};
use serde::Serialize;

use crate::models::{AbilitySlot, CreatureRecord, StatEntry};

/// Tag added when the total base stat reaches [`PSEUDO_LEGENDARY_TOTAL`].
pub const TAG_PSEUDO_LEGENDARY: &str = "Pseudo-legendary vibes";

/// Tag added when any type is dragon.
pub const TAG_DRAGON: &str = "Dragon type";

/// Tag added when any ability is hidden.
pub const TAG_HIDDEN_ABILITY: &str = "Has hidden ability";

/// One rendered stat row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLine {
    pub label: String,
    pub value: u32,
    /// Bar fill in percent, clamped to 100.
    pub bar_percent: f64,
}

/// Display-ready projection of a creature record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatureCard {
    pub id: u32,
    pub display_id: String,
    pub name: String,
    pub types: Vec<String>,
    pub abilities: Vec<String>,
    pub total: u32,
    pub tags: Vec<String>,
    pub height: String,
    pub weight: String,
    pub base_experience: String,
    pub stats: Vec<StatLine>,
    pub sprite_url: Option<String>,
}

impl CreatureCard {
    /// Derive every display field of a card from its record.
    pub fn from_record(record: &CreatureRecord) -> Self {
        let total = total_base_stats(&record.stats);

        Self {
            id: record.id,
            display_id: display_id(record.id),
            name: record.name.clone(),
            types: record.type_names().map(str::to_string).collect(),
            abilities: record.abilities.iter().map(ability_label).collect(),
            total,
            tags: tags(record, total),
            height: format_height(record.height),
            weight: format_weight(record.weight),
            base_experience: format_base_experience(record.base_experience),
            stats: record
                .stats
                .iter()
                .map(|entry| StatLine {
                    label: stat_label(&entry.stat.name),
                    value: entry.base_stat,
                    bar_percent: stat_bar_width(entry.base_stat),
                })
                .collect(),
            sprite_url: record.sprites.preferred().map(str::to_string),
        }
    }

    /// File name used when exporting this card's sprite.
    pub fn export_file_name(&self) -> String {
        crate::export::sprite_file_name(&self.name)
    }
}

impl From<&CreatureRecord> for CreatureCard {
    fn from(record: &CreatureRecord) -> Self {
        Self::from_record(record)
    }
}

/// Sum of all base stat values.
pub fn total_base_stats(stats: &[StatEntry]) -> u32 {
    stats
        .iter()
        .fold(0u32, |total, s| total.saturating_add(s.base_stat))
}

/// Tags in their fixed order; the total tag is always first.
pub fn tags(record: &CreatureRecord, total: u32) -> Vec<String> {
    let mut tags = vec![format!("{total} total base stats")];

    if total >= PSEUDO_LEGENDARY_TOTAL {
        tags.push(TAG_PSEUDO_LEGENDARY.to_string());
    }
    if record.type_names().any(|name| name == "dragon") {
        tags.push(TAG_DRAGON.to_string());
    }
    if record.abilities.iter().any(|a| a.is_hidden) {
        tags.push(TAG_HIDDEN_ABILITY.to_string());
    }

    tags
}

/// Decimeters to meters with one decimal place (`7` -> `"0.7 m"`).
pub fn format_height(decimeters: u32) -> String {
    format!("{:.1} m", f64::from(decimeters) / 10.0)
}

/// Hectograms to kilograms with one decimal place (`100` -> `"10.0 kg"`).
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", f64::from(hectograms) / 10.0)
}

/// Base experience, or `"-"` when the API has none.
pub fn format_base_experience(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Stat bar fill in percent: `min(value / 180 * 100, 100)`.
pub fn stat_bar_width(value: u32) -> f64 {
    (f64::from(value) / STAT_BAR_MAX * 100.0).min(100.0)
}

/// Shorten `special-attack` style names to `sp attack`.
pub fn stat_label(name: &str) -> String {
    name.replacen("special-", "sp ", 1)
}

/// `#` followed by the id zero-padded to three digits.
pub fn display_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Ability name, suffixed with `(hidden)` for hidden abilities.
pub fn ability_label(slot: &AbilitySlot) -> String {
    if slot.is_hidden {
        format!("{} (hidden)", slot.ability.name)
    } else {
        slot.ability.name.clone()
    }
}
