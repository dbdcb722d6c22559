//! Content line decoding: bullet, optional inline identifier, label.

use crate::domain::{ID_CHARS, Role, TopicId};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Bullets may be at most this many characters.
const MAX_BULLET_CHARS: usize = 2;

/// `[id]` at the very start of the text following the bullet.
static ID_INFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^\[({ID_CHARS})\]")).expect("inline id pattern is valid")
});

/// Ways a content line can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentLineError {
    #[error("missing item bullet")]
    MissingBullet,

    #[error("bullet is too long")]
    BulletTooLong,

    #[error("empty label in placeholder link")]
    EmptyPlaceholderLabel,
}

/// The parts of a decoded content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub role: Option<Role>,
    pub id: Option<TopicId>,
    /// `None` only when `id` is present and the line gave no label.
    pub label: Option<String>,
}

/// Decodes a trimmed, non-blank content line such as `* [abc1234] label`.
///
/// # Errors
///
/// Returns `ContentLineError` if:
/// - There is no space after the bullet
/// - The bullet is longer than two characters
/// - The label is empty and no identifier was given
pub fn decode(trimmed: &str) -> Result<ContentLine, ContentLineError> {
    let (bullet, rest) = trimmed
        .split_once(' ')
        .ok_or(ContentLineError::MissingBullet)?;
    if bullet.chars().count() > MAX_BULLET_CHARS {
        return Err(ContentLineError::BulletTooLong);
    }
    let rest = rest.trim();

    let (id, label) = match ID_INFIX.captures(rest) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let id = caps
                .get(1)
                .and_then(|m| TopicId::new(m.as_str()).ok());
            (id, rest[whole..].trim())
        }
        None => (None, rest),
    };

    let label = match (label.is_empty(), &id) {
        (false, _) => Some(label.to_string()),
        // An existing topic keeps its label.
        (true, Some(_)) => None,
        (true, None) => return Err(ContentLineError::EmptyPlaceholderLabel),
    };

    Ok(ContentLine {
        role: Role::for_bullet(bullet),
        id,
        label,
    })
}
