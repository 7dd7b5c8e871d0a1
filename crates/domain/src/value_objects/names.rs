//! Name newtypes for generated monsters
//!
//! The only rule is that a name is not blank. The text is otherwise kept
//! exactly as generated: no trimming and no length cap.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

fn validated(kind: &str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{kind} cannot be empty")));
    }
    Ok(value)
}

// ============================================================================
// MonsterName
// ============================================================================

/// A non-blank monster name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonsterName(String);

impl MonsterName {
    /// Create a new validated monster name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Monster name", name.into()).map(Self)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonsterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MonsterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MonsterName> for String {
    fn from(name: MonsterName) -> String {
        name.0
    }
}

// ============================================================================
// AbilityName
// ============================================================================

/// A non-blank signature-ability name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbilityName(String);

impl AbilityName {
    /// Create a new validated ability name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        validated("Ability name", name.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AbilityName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AbilityName> for String {
    fn from(name: AbilityName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monster_name_keeps_surrounding_whitespace() {
        let name = MonsterName::new("  Glimmerwisp  ").unwrap();
        assert_eq!(name.as_str(), "  Glimmerwisp  ");
        assert_eq!(name.to_string(), "  Glimmerwisp  ");
    }

    #[test]
    fn blank_monster_name_is_rejected() {
        assert!(matches!(MonsterName::new(""), Err(DomainError::Validation(_))));
        assert!(matches!(
            MonsterName::new(" \t\n"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn long_names_are_accepted_unchanged() {
        let long = "A".repeat(5_000);
        assert_eq!(AbilityName::new(long.clone()).unwrap().as_str(), long);
        assert_eq!(MonsterName::new("🔥".repeat(201)).unwrap().as_str().chars().count(), 201);
    }

    #[test]
    fn serde_rejects_empty_name() {
        let result: Result<AbilityName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let ok: AbilityName = serde_json::from_str("\" Moss Veil\"").unwrap();
        assert_eq!(ok.as_str(), " Moss Veil");
    }
}
