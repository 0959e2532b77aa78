//! Record identity type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity of a resource record.
///
/// Backends key records by integers or strings depending on the
/// resource, so the id is carried in whichever form the server sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Integer identity.
    Int(i64),
    /// String identity.
    Str(String),
}

impl RecordId {
    /// Parse an id from user input: integers stay integers, anything
    /// else becomes a string id.
    pub fn parse(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(n) => RecordId::Int(n),
            Err(_) => RecordId::Str(s.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Str(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integer_input() {
        assert_eq!(RecordId::parse("42"), RecordId::Int(42));
    }

    #[test]
    fn parse_string_input() {
        assert_eq!(RecordId::parse("doc-42"), RecordId::Str("doc-42".to_string()));
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(RecordId::Int(7).to_string(), "7");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn untagged_serde_round_trip() {
        let int: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(int, RecordId::Int(42));
        assert_eq!(serde_json::to_string(&int).unwrap(), "42");

        let text: RecordId = serde_json::from_str("\"u1\"").unwrap();
        assert_eq!(text, RecordId::Str("u1".to_string()));
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"u1\"");
    }
}
