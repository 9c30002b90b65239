//! Identifiers for declared components and sensors.
//!
//! Ids end up as C++ variable names in the generated code, so they follow
//! C identifier rules and may not collide with reserved words.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("Invalid regex"));

/// Words the C++ compiler or the firmware runtime already claims.
const RESERVED_IDS: &[&str] = &[
    "App", "auto", "bool", "break", "case", "char", "class", "const", "continue", "default",
    "delete", "do", "double", "else", "enum", "extern", "false", "float", "for", "goto", "if",
    "int", "long", "namespace", "new", "nullptr", "private", "protected", "public", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "template", "this", "true",
    "typedef", "union", "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// Reason an id string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidId {
    #[error("id must not be empty")]
    Empty,
    #[error("id '{0}' must start with a letter or underscore and contain only letters, digits and underscores")]
    BadCharacters(String),
    #[error("id '{0}' is a reserved word")]
    Reserved(String),
}

/// A validated identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Id(String);

impl Id {
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidId> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidId::Empty);
        }
        if !ID_PATTERN.is_match(&value) {
            return Err(InvalidId::BadCharacters(value));
        }
        if RESERVED_IDS.contains(&value.as_str()) {
            return Err(InvalidId::Reserved(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Id {
    type Error = InvalidId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Id::parse(value)
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert_eq!(Id::parse("spa1").unwrap().as_str(), "spa1");
        assert!(Id::parse("_hidden").is_ok());
        assert!(Id::parse("Spa_Pump_2").is_ok());
    }

    #[test]
    fn test_invalid_ids() {
        assert_eq!(Id::parse(""), Err(InvalidId::Empty));
        assert!(matches!(Id::parse("1spa"), Err(InvalidId::BadCharacters(_))));
        assert!(matches!(Id::parse("spa-1"), Err(InvalidId::BadCharacters(_))));
        assert!(matches!(Id::parse("new"), Err(InvalidId::Reserved(_))));
    }

    #[test]
    fn test_id_deserialization_validates() {
        let id: Id = serde_json::from_str("\"spa1\"").unwrap();
        assert_eq!(id.to_string(), "spa1");
        assert!(serde_json::from_str::<Id>("\"spa 1\"").is_err());
    }
}
