//! Rarity tiers and the element instruction each tier hands to the generator.
//!
//! The tier is decided from a single uniform roll in `[0, 1)`. The roll is
//! supplied by the caller so this module stays free of any RNG.

use std::fmt;

/// Elements available to ordinary monsters.
pub const STANDARD_ELEMENTS: [&str; 4] = ["Fire", "Water", "Earth", "Lightning"];

/// Elements reserved for rare monsters.
pub const RARE_ELEMENTS: [&str; 3] = ["Magic", "Soul", "Legend"];

/// Rolls strictly below this pick a model-invented element (when eligible).
pub const UNIQUE_CUSTOM_THRESHOLD: f64 = 0.05;

/// Rolls strictly below this (and not already unique) pick a rare element.
pub const RARE_THRESHOLD: f64 = 0.20;

/// Rarity class governing which elements a generated monster may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RarityTier {
    Standard,
    Rare,
    UniqueCustom,
}

impl RarityTier {
    /// Select a tier from a uniform roll.
    ///
    /// Thresholds are cumulative: `< 0.05` is unique (only when
    /// `eligible_for_custom`), `< 0.20` is rare, everything else is standard.
    /// Rolls outside `[0, 1)`, including NaN, are standard.
    pub fn from_roll(roll: f64, eligible_for_custom: bool) -> Self {
        if !(0.0..1.0).contains(&roll) {
            return RarityTier::Standard;
        }
        if eligible_for_custom && roll < UNIQUE_CUSTOM_THRESHOLD {
            RarityTier::UniqueCustom
        } else if roll < RARE_THRESHOLD {
            RarityTier::Rare
        } else {
            RarityTier::Standard
        }
    }

    /// The element directive embedded in the generation prompt for this tier.
    pub fn element_instruction(self) -> ElementInstruction {
        match self {
            RarityTier::Standard => ElementInstruction::PickFrom {
                pool: "standard",
                elements: &STANDARD_ELEMENTS,
            },
            RarityTier::Rare => ElementInstruction::PickFrom {
                pool: "rare",
                elements: &RARE_ELEMENTS,
            },
            RarityTier::UniqueCustom => ElementInstruction::Invent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RarityTier::Standard => "standard",
            RarityTier::Rare => "rare",
            RarityTier::UniqueCustom => "unique_custom",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directive constraining (or freeing) the generator's element choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementInstruction {
    /// Pick exactly one element from a fixed pool.
    PickFrom {
        pool: &'static str,
        elements: &'static [&'static str],
    },
    /// Invent a brand new element type from the description.
    Invent,
}

impl ElementInstruction {
    /// The permitted elements, or `None` when the model may invent one.
    pub fn allowed_elements(&self) -> Option<&'static [&'static str]> {
        match self {
            ElementInstruction::PickFrom { elements, .. } => Some(*elements),
            ElementInstruction::Invent => None,
        }
    }
}

impl fmt::Display for ElementInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementInstruction::PickFrom { pool, elements } => {
                let quoted: Vec<String> = elements.iter().map(|e| format!("\"{}\"", e)).collect();
                write!(
                    f,
                    "Pick one {} element from this list: [{}].",
                    pool,
                    quoted.join(", ")
                )
            }
            ElementInstruction::Invent => f.write_str(
                "Create a completely new, unique element type based on the description.",
            ),
        }
    }
}
