//! Prompt composition for monster generation.
//!
//! The schema block below must list exactly the keys the response parser
//! requires (`MONSTER_FIELDS` and `STAT_FIELDS`). A test enforces it.

use monsterforge_domain::ElementInstruction;

/// Output schema shown to the model.
pub const MONSTER_SCHEMA: &str = r#"{
  "name": "Unique Name",
  "element": "The Element",
  "stats": {"hp": 100, "atk": 20, "def": 15, "spd": 10},
  "rarity": "Common/Rare/Unique",
  "ability": "Move Name",
  "bio": "One sentence lore."
}"#;

/// Build the generation prompt.
///
/// The description is embedded verbatim: no escaping, no rejection.
pub fn build_prompt(description: &str, instruction: &ElementInstruction) -> String {
    format!(
        r#"Act as a monster RPG engine. User Description: "{description}"
{instruction}

Return ONLY a JSON object, with no prose, explanation, or markdown around it:
{MONSTER_SCHEMA}"#
    )
}
