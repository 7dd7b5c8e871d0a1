//! MonsterForge domain: the monster entity, rarity tiers, and their invariants.
//!
//! Nothing in this crate performs I/O or draws randomness. The engine crate
//! supplies rolls and raw generator output; this crate decides what they mean.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Monster, MonsterStats, MONSTER_FIELDS, STAT_FIELDS};
pub use error::DomainError;
pub use value_objects::{
    AbilityName, ElementInstruction, MonsterName, RarityTier, RARE_ELEMENTS, RARE_THRESHOLD,
    STANDARD_ELEMENTS, UNIQUE_CUSTOM_THRESHOLD,
};
