//! LLM response parser for generated monsters.
//!
//! The model is asked for a bare JSON object but often wraps it in a markdown
//! code fence anyway. Parsing happens in three steps:
//! - strip a leading ```` ```lang ```` fence, a trailing ```` ``` ```` fence, and whitespace
//! - decode the remainder as one JSON object
//! - check every required key (see `MONSTER_FIELDS` / `STAT_FIELDS`) and its type
//!
//! Values are not range-checked: negative stats pass through untouched.

use regex_lite::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

use monsterforge_domain::{
    AbilityName, Monster, MonsterName, MonsterStats, MONSTER_FIELDS, STAT_FIELDS,
};

static OPENING_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z0-9_+.-]*").expect("valid regex"));
static CLOSING_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```$").expect("valid regex"));

/// Why a completion could not be turned into a monster.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// Not JSON at all, or JSON that is not an object.
    #[error("response is not a JSON object: {reason}")]
    Decode { reason: String, raw: String },

    /// A required key is absent.
    #[error("response is missing required field `{field}`")]
    MissingField { field: String, raw: String },

    /// A required key is present with the wrong type or an unusable value.
    #[error("field `{field}` is invalid: {reason}")]
    InvalidField { field: String, reason: String },
}

impl FormatError {
    /// The sanitized text that failed, when the error carries it.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::Decode { raw, .. } | Self::MissingField { raw, .. } => Some(raw),
            Self::InvalidField { .. } => None,
        }
    }

    /// The dotted key path at fault, if the failure is about one field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Decode { .. } => None,
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => Some(field),
        }
    }

    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Remove surrounding code-fence markers and whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_open = OPENING_FENCE_RE.replace(trimmed, "");
    let without_close = CLOSING_FENCE_RE.replace(without_open.trim_end(), "");
    without_close.trim().to_string()
}

/// Parse a raw completion into a validated monster.
pub fn parse_monster(raw: &str) -> Result<Monster, FormatError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = match serde_json::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(raw = %raw, error = %e, "Failed to decode monster JSON");
            return Err(FormatError::Decode {
                reason: e.to_string(),
                raw: cleaned,
            });
        }
    };

    let Value::Object(object) = value else {
        return Err(FormatError::Decode {
            reason: "expected a JSON object".to_string(),
            raw: cleaned,
        });
    };

    let result = validate(&object, &cleaned);
    if let Err(e) = &result {
        tracing::warn!(raw = %raw, error = %e, "Monster JSON failed validation");
    }
    result
}

fn validate(object: &Map<String, Value>, cleaned: &str) -> Result<Monster, FormatError> {
    if let Some(missing) = MONSTER_FIELDS.iter().find(|f| !object.contains_key(**f)) {
        return Err(FormatError::MissingField {
            field: missing.to_string(),
            raw: cleaned.to_string(),
        });
    }

    let stats = object["stats"]
        .as_object()
        .ok_or_else(|| FormatError::invalid("stats", "expected an object"))?;
    if let Some(missing) = STAT_FIELDS.iter().find(|f| !stats.contains_key(**f)) {
        return Err(FormatError::MissingField {
            field: format!("stats.{missing}"),
            raw: cleaned.to_string(),
        });
    }

    let name = MonsterName::new(text_field(object, "name")?)
        .map_err(|e| FormatError::invalid("name", e.to_string()))?;
    let ability = AbilityName::new(text_field(object, "ability")?)
        .map_err(|e| FormatError::invalid("ability", e.to_string()))?;

    Ok(Monster::new(
        name,
        text_field(object, "element")?,
        MonsterStats::new(
            stat_field(stats, "hp")?,
            stat_field(stats, "atk")?,
            stat_field(stats, "def")?,
            stat_field(stats, "spd")?,
        ),
        text_field(object, "rarity")?,
        ability,
        text_field(object, "bio")?,
    ))
}

fn text_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str, FormatError> {
    object[key]
        .as_str()
        .ok_or_else(|| FormatError::invalid(key, "expected a string"))
}

fn stat_field(stats: &Map<String, Value>, key: &str) -> Result<f64, FormatError> {
    stats[key]
        .as_f64()
        .ok_or_else(|| FormatError::invalid(format!("stats.{key}"), "expected a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn valid_json() -> Value {
        json!({
            "name": "Glimmerwisp",
            "element": "Earth",
            "stats": {"hp": 120, "atk": 18, "def": 22, "spd": 31},
            "rarity": "Common",
            "ability": "Fernveil",
            "bio": "A timid sprite that hums to the moss."
        })
    }

    #[test]
    fn parses_bare_json() {
        let monster = parse_monster(&valid_json().to_string()).unwrap();
        assert_eq!(monster.name().as_str(), "Glimmerwisp");
        assert_eq!(monster.element(), "Earth");
        assert_eq!(monster.stats(), &MonsterStats::new(120.0, 18.0, 22.0, 31.0));
        assert_eq!(monster.rarity(), "Common");
        assert_eq!(monster.ability().as_str(), "Fernveil");
        assert_eq!(monster.bio(), "A timid sprite that hums to the moss.");
    }

    #[test]
    fn strips_json_fence_on_one_line() {
        let raw = format!("```json {} ```", valid_json());
        let monster = parse_monster(&raw).unwrap();
        assert_eq!(monster.name().as_str(), "Glimmerwisp");
    }

    #[test]
    fn strips_multiline_fences_and_whitespace() {
        let raw = format!("\n\n```json\n{:#}\n```\n  ", valid_json());
        assert!(parse_monster(&raw).is_ok());

        let bare_fence = format!("```\n{}\n```", valid_json());
        assert!(parse_monster(&bare_fence).is_ok());
    }

    #[test]
    fn strip_leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
    }

    #[test]
    fn prose_is_a_decode_error() {
        let err = parse_monster("Here is your monster: it is very scary").unwrap_err();
        assert!(matches!(err, FormatError::Decode { .. }));
        assert_eq!(err.field(), None);
        assert!(err.raw_text().unwrap().starts_with("Here is your monster"));
    }

    #[test]
    fn non_object_json_is_a_decode_error() {
        let err = parse_monster("[1, 2, 3]").unwrap_err();
        assert_eq!(
            err,
            FormatError::Decode {
                reason: "expected a JSON object".into(),
                raw: "[1, 2, 3]".into()
            }
        );
    }

    #[test]
    fn each_missing_top_level_key_is_rejected() {
        for field in MONSTER_FIELDS {
            let mut value = valid_json();
            value.as_object_mut().unwrap().remove(field);
            let err = parse_monster(&value.to_string()).unwrap_err();
            assert!(
                matches!(&err, FormatError::MissingField { field: f, .. } if f == field),
                "expected missing {field}, got {err:?}"
            );
        }
    }

    #[test]
    fn each_missing_stat_key_is_rejected() {
        for stat in STAT_FIELDS {
            let mut value = valid_json();
            value["stats"].as_object_mut().unwrap().remove(stat);
            let err = parse_monster(&value.to_string()).unwrap_err();
            assert_eq!(err.field(), Some(format!("stats.{stat}").as_str()));
            assert!(matches!(err, FormatError::MissingField { .. }));
        }
    }

    #[test]
    fn wrong_types_are_invalid_fields() {
        let mut value = valid_json();
        value["stats"]["atk"] = json!("twenty");
        let err = parse_monster(&value.to_string()).unwrap_err();
        assert_eq!(err, FormatError::invalid("stats.atk", "expected a number"));

        let mut value = valid_json();
        value["stats"] = json!([1, 2, 3, 4]);
        assert_eq!(
            parse_monster(&value.to_string()).unwrap_err().field(),
            Some("stats")
        );

        let mut value = valid_json();
        value["bio"] = Value::Null;
        assert_eq!(
            parse_monster(&value.to_string()).unwrap_err(),
            FormatError::invalid("bio", "expected a string")
        );
    }

    #[test]
    fn empty_name_is_invalid() {
        let mut value = valid_json();
        value["name"] = json!("   ");
        let err = parse_monster(&value.to_string()).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn names_are_kept_exactly_as_generated() {
        let long_name = "A".repeat(201);
        let mut value = valid_json();
        value["name"] = json!(long_name);
        value["ability"] = json!("  Fernveil  ");
        let monster = parse_monster(&value.to_string()).unwrap();
        assert_eq!(monster.name().as_str(), long_name);
        assert_eq!(monster.ability().as_str(), "  Fernveil  ");

        let mut value = valid_json();
        value["name"] = json!("  Glim  ");
        let monster = parse_monster(&value.to_string()).unwrap();
        assert_eq!(monster.name().as_str(), "  Glim  ");
    }

    #[test]
    fn negative_and_decimal_stats_are_accepted() {
        let mut value = valid_json();
        value["stats"] = json!({"hp": -5, "atk": 12.5, "def": 0, "spd": 3});
        let monster = parse_monster(&value.to_string()).unwrap();
        assert_eq!(monster.stats().hp, -5.0);
        assert_eq!(monster.stats().atk, 12.5);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let mut value = valid_json();
        value["elLore"] = json!("Born of the first rain.");
        value["stats"]["luck"] = json!(7);
        assert!(parse_monster(&value.to_string()).is_ok());
    }

    proptest! {
        #[test]
        fn round_trips_any_valid_object(
            name in "[ \t]{0,3}[A-Za-z][A-Za-z ]{0,300}[ \t]{0,3}",
            element in "[A-Za-z-]{0,20}",
            rarity in "[A-Za-z/ -]{0,20}",
            ability in "[ ]{0,3}[A-Za-z][A-Za-z ]{0,300}",
            bio in "[A-Za-z .,!']{0,80}",
            hp in 0u32..10_000,
            atk in 0u32..10_000,
            def in 0u32..10_000,
            spd in 0u32..10_000,
            fenced in any::<bool>(),
        ) {
            let value = json!({
                "name": name, "element": element, "rarity": rarity,
                "ability": ability, "bio": bio,
                "stats": {"hp": hp, "atk": atk, "def": def, "spd": spd},
            });
            let raw = if fenced {
                format!("```json\n{value}\n```")
            } else {
                value.to_string()
            };

            let monster = parse_monster(&raw).unwrap();
            prop_assert_eq!(monster.name().as_str(), name.as_str());
            prop_assert_eq!(monster.element(), element.as_str());
            prop_assert_eq!(monster.rarity(), rarity.as_str());
            prop_assert_eq!(monster.ability().as_str(), ability.as_str());
            prop_assert_eq!(monster.bio(), bio.as_str());
            prop_assert_eq!(
                monster.stats(),
                &MonsterStats::new(hp as f64, atk as f64, def as f64, spd as f64)
            );
        }
    }
}
