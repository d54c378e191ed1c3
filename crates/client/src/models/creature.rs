//! Creature record models.
//!
//! Only the fields the cards need are modeled; everything else in the
//! payload is ignored. List fields default to empty so sparse records
//! (and test fixtures) still deserialize.

use serde::{Deserialize, Serialize};

/// A `{ "name": ..., "url": ... }` reference as used throughout the API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NamedResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }
}

/// One entry of the `types` array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of the `abilities` array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u8,
}

/// One entry of the `stats` array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatEntry {
    #[serde(default)]
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// A sprite holder that only carries a default front image.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WrappedSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Alternate artwork sets under `sprites.other`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<WrappedSprite>,
}

/// The `sprites` object.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl SpriteSet {
    /// Official artwork if present, otherwise the default front sprite.
    pub fn preferred(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|art| art.front_default.as_deref())
            .filter(|url| !url.is_empty())
            .or(self.front_default.as_deref().filter(|url| !url.is_empty()))
    }
}

/// A creature record as returned by `GET /{identifier}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    /// Height in decimeters.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: SpriteSet,
}

impl CreatureRecord {
    /// Type labels in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.kind.name.as_str())
    }
}
