//! Link type: the labelled, role-tagged edge held at every tree node.

use crate::domain::{Page, Topic};
use serde::Serialize;
use std::fmt;

/// Bullet that marks a content line as a relation/label edge.
pub const RELATION_BULLET: &str = "--";

/// Bullet written for ordinary note edges.
pub const NOTE_BULLET: &str = "*";

/// The role an edge plays in the outline.
///
/// Ordinary hierarchical notes carry no role at all; only edges that express
/// a named relation are tagged.
///
/// # Examples
///
/// ```
/// use notetree::domain::Role;
///
/// assert_eq!(Role::for_bullet("--"), Some(Role::Relation));
/// assert_eq!(Role::for_bullet("*"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Relation,
}

impl Role {
    /// Returns the role signalled by a content-line bullet.
    pub fn for_bullet(bullet: &str) -> Option<Role> {
        (bullet == RELATION_BULLET).then_some(Role::Relation)
    }

    /// Returns the bullet written for an edge with the given role.
    pub fn bullet(role: Option<Role>) -> &'static str {
        match role {
            Some(Role::Relation) => RELATION_BULLET,
            None => NOTE_BULLET,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Relation => write!(f, "relation"),
        }
    }
}

/// An edge in the outline: display label, optional role, target topic and
/// the page snapshot captured when the edge was created.
///
/// A `None` label on a link that references an existing topic means "leave
/// the existing label alone"; the parser never produces a `None` label on a
/// fresh topic except for the document root.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    target: Topic,
    page: Page,
}

impl Link {
    /// Creates a link to the given topic.
    pub fn new(label: Option<String>, role: Option<Role>, target: Topic, page: Page) -> Self {
        Self {
            label,
            role,
            target,
            page,
        }
    }

    /// Creates the unlabelled root link of a document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the relation role, if any.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the target topic.
    pub fn target(&self) -> &Topic {
        &self.target
    }

    /// Returns the page snapshot.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn target_mut(&mut self) -> &mut Topic {
        &mut self.target
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Returns true if this edge expresses a relation.
    pub fn is_relation(&self) -> bool {
        self.role == Some(Role::Relation)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Role::bullet(self.role))?;
        if let Some(id) = self.target.id() {
            write!(f, " [{}]", id)?;
        }
        if let Some(label) = &self.label {
            write!(f, " {}", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("label", &self.label)
            .field("role", &self.role)
            .field("target", &self.target)
            .field("page", &self.page)
            .finish()
    }
}
