//! Domain entities - Core business objects

mod monster;

pub use monster::{Monster, MonsterStats, MONSTER_FIELDS, STAT_FIELDS};
