//! Topic identity placeholder carried by every link.

use crate::domain::TopicId;
use serde::Serialize;
use std::fmt;

/// The identity a link points at.
///
/// A topic either carries a stable identifier, meaning the link references
/// (and may decorate) an existing topic, or it carries none, meaning a fresh
/// identity is to be allocated by whoever consumes the parsed tree.
///
/// # Examples
///
/// ```
/// use notetree::domain::{Topic, TopicId};
///
/// let fresh = Topic::fresh();
/// assert!(!fresh.is_reference());
///
/// let existing = Topic::existing("abc1234".parse::<TopicId>().unwrap());
/// assert_eq!(existing.id().map(|id| id.as_str()), Some("abc1234"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<TopicId>,
}

impl Topic {
    /// Creates a topic with no identifier.
    pub fn fresh() -> Self {
        Self { id: None }
    }

    /// Creates a topic referencing an existing identifier.
    pub fn existing(id: TopicId) -> Self {
        Self { id: Some(id) }
    }

    /// Returns the stable identifier, if any.
    pub fn id(&self) -> Option<&TopicId> {
        self.id.as_ref()
    }

    /// Replaces the identifier.
    pub fn set_id(&mut self, id: TopicId) {
        self.id = Some(id);
    }

    /// Returns whether this topic refers to an existing identity.
    pub fn is_reference(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Debug for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "Topic({})", id),
            None => write!(f, "Topic(<fresh>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fresh_has_no_id() {
        let topic = Topic::fresh();
        assert!(topic.id().is_none());
        assert_eq!(topic, Topic::default());
    }

    #[test]
    fn set_id_turns_fresh_into_reference() {
        let mut topic = Topic::fresh();
        topic.set_id("abc1234".parse().unwrap());
        assert!(topic.is_reference());
        assert_eq!(topic.id().unwrap().as_str(), "abc1234");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Topic::fresh()), "Topic(<fresh>)");
        let topic = Topic::existing("abc1234".parse().unwrap());
        assert_eq!(format!("{:?}", topic), "Topic(abc1234)");
    }
}
