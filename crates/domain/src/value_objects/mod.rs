//! Value objects - Immutable objects defined by their attributes

mod names;
mod rarity;

pub use names::{AbilityName, MonsterName};
pub use rarity::{
    ElementInstruction, RarityTier, RARE_ELEMENTS, RARE_THRESHOLD, STANDARD_ELEMENTS,
    UNIQUE_CUSTOM_THRESHOLD,
};
