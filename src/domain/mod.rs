//! Core types: Topic, TopicId, Page, Link, Role, TreeNode and the property schema

mod link;
mod page;
mod property;
mod topic;
mod topic_id;
mod tree;

pub use link::{Link, NOTE_BULLET, RELATION_BULLET, Role};
pub use page::{DEFAULT_PRIORITY, DEFAULT_WEIGHT, Page};
pub use property::{Applied, PropertyDef, PropertyKey, PropertySchema, PropertyValue};
pub use topic::Topic;
pub use topic_id::{ParseTopicIdError, TopicId};
pub use tree::{PreOrder, TreeNode};

pub(crate) use topic_id::ID_CHARS;
