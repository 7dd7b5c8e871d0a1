//! Monster entity - the validated result of a generation request.
//!
//! A monster is built once from the generator's parsed output and never
//! mutated afterwards. There is no identity or persistence: the entity lives
//! only for the request that produced it.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AbilityName, MonsterName};

/// Top-level keys every generated monster must carry.
pub const MONSTER_FIELDS: [&str; 6] = ["name", "element", "stats", "rarity", "ability", "bio"];

/// Keys required inside the `stats` object.
pub const STAT_FIELDS: [&str; 4] = ["hp", "atk", "def", "spd"];

/// Combat stats as reported by the generator.
///
/// Values are taken as-is: the generator may return decimals or even
/// negative numbers and none of them are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub spd: f64,
}

impl MonsterStats {
    pub fn new(hp: f64, atk: f64, def: f64, spd: f64) -> Self {
        Self { hp, atk, def, spd }
    }
}

/// A generated monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    name: MonsterName,
    element: String,
    stats: MonsterStats,
    /// Self-reported rarity label. Expected to line up with the instructed
    /// tier but only its presence is enforced.
    rarity: String,
    ability: AbilityName,
    bio: String,
}

impl Monster {
    pub fn new(
        name: MonsterName,
        element: impl Into<String>,
        stats: MonsterStats,
        rarity: impl Into<String>,
        ability: AbilityName,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            name,
            element: element.into(),
            stats,
            rarity: rarity.into(),
            ability,
            bio: bio.into(),
        }
    }

    // Read accessors

    pub fn name(&self) -> &MonsterName {
        &self.name
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn stats(&self) -> &MonsterStats {
        &self.stats
    }

    pub fn rarity(&self) -> &str {
        &self.rarity
    }

    pub fn ability(&self) -> &AbilityName {
        &self.ability
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite() -> Monster {
        Monster::new(
            MonsterName::new("Mossling").unwrap(),
            "Earth",
            MonsterStats::new(90.0, 12.0, 18.0, 25.0),
            "Common",
            AbilityName::new("Bashful Bloom").unwrap(),
            "It hides behind ferns whenever travellers pass.",
        )
    }

    #[test]
    fn accessors_return_constructed_values() {
        let monster = sprite();
        assert_eq!(monster.name().as_str(), "Mossling");
        assert_eq!(monster.element(), "Earth");
        assert_eq!(monster.stats().spd, 25.0);
        assert_eq!(monster.rarity(), "Common");
        assert_eq!(monster.ability().as_str(), "Bashful Bloom");
        assert!(monster.bio().starts_with("It hides"));
    }

    #[test]
    fn serializes_with_schema_field_names() {
        let value = serde_json::to_value(sprite()).unwrap();
        let object = value.as_object().unwrap();
        for field in MONSTER_FIELDS {
            assert!(object.contains_key(field), "missing {field}");
        }
        let stats = object["stats"].as_object().unwrap();
        for field in STAT_FIELDS {
            assert!(stats.contains_key(field), "missing stats.{field}");
        }
    }
}
