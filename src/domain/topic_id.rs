//! Stable topic identifier with pattern validation and serde support.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Characters allowed in a stable identifier, with the minimum length.
pub(crate) const ID_CHARS: &str = "[A-Za-z0-9_-]{7,}";

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{ID_CHARS}$")).expect("identifier pattern is valid"));

/// An opaque, stable identifier for a topic.
///
/// Identifiers are at least seven characters drawn from ASCII letters,
/// digits, hyphens and underscores. They are never generated here: a topic
/// without an identifier is allocated one downstream.
///
/// # Examples
///
/// ```
/// use notetree::domain::TopicId;
///
/// let id: TopicId = "abc1234".parse().unwrap();
/// assert_eq!(id.as_str(), "abc1234");
/// assert!("short".parse::<TopicId>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicId(String);

impl TopicId {
    /// Creates a TopicId after validating it against the identifier pattern.
    ///
    /// # Errors
    ///
    /// Returns `ParseTopicIdError` if the value is shorter than seven
    /// characters or contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(value: &str) -> Result<Self, ParseTopicIdError> {
        if !Self::is_valid(value) {
            return Err(ParseTopicIdError {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// Returns whether a string is a well-formed identifier.
    pub fn is_valid(value: &str) -> bool {
        ID_PATTERN.is_match(value)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid topic identifier.
#[derive(Debug, Clone)]
pub struct ParseTopicIdError {
    value: String,
}

impl ParseTopicIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTopicIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid topic id '{}': expected at least 7 of [A-Za-z0-9_-]",
            self.value
        )
    }
}

impl std::error::Error for ParseTopicIdError {}

impl FromStr for TopicId {
    type Err = ParseTopicIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TopicId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TopicId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn parse_valid_id() {
        let id: TopicId = "abc1234".parse().expect("should parse valid id");
        assert_eq!(id.to_string(), "abc1234");
    }

    #[test]
    fn accepts_hyphen_and_underscore() {
        assert!(TopicId::is_valid("a-b_c-d"));
        assert!(TopicId::is_valid("0123456789abcdef"));
    }

    #[test]
    fn rejects_too_short() {
        let result: Result<TopicId, _> = "abc123".parse();
        assert!(result.is_err(), "six characters should fail");
    }

    #[test]
    fn rejects_invalid_chars() {
        assert!(TopicId::new("abc 1234").is_err());
        assert!(TopicId::new("abc1234!").is_err());
        assert!(TopicId::new("[abc1234]").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(TopicId::new("").is_err());
    }

    #[test]
    fn hash_consistent() {
        let id1: TopicId = "abc1234".parse().unwrap();
        let id2: TopicId = "abc1234".parse().unwrap();

        let mut set = HashSet::new();
        set.insert(id1);
        assert!(set.contains(&id2), "equal IDs should have same hash");
    }

    #[test]
    fn debug_format() {
        let id: TopicId = "abc1234".parse().unwrap();
        assert_eq!(format!("{:?}", id), "TopicId(\"abc1234\")");
    }

    #[test]
    fn serde_as_plain_string() {
        let id: TopicId = "abc1234".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc1234\"");

        let parsed: TopicId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<TopicId, _> = serde_json::from_str("\"bad\"");
        assert!(result.is_err());
    }

    #[test]
    fn parse_error_contains_invalid_value() {
        let err = "bad".parse::<TopicId>().unwrap_err();
        assert_eq!(err.invalid_value(), "bad");
        assert!(err.to_string().contains("'bad'"));
    }
}
