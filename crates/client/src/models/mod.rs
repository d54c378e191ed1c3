//! Data models for creature API responses.
//!
//! Types mirror the PokeAPI wire shape closely so records can be
//! deserialized without a translation layer. Derived display values live
//! in [`crate::profile`].

pub mod creature;
pub mod health;

pub use creature::{
    AbilitySlot, CreatureRecord, NamedResource, OtherSprites, SpriteSet, StatEntry, TypeSlot,
    WrappedSprite,
};
pub use health::HealthStatus;
