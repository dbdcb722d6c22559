//! Outline markup: an indentation-sensitive, line-oriented note format.
//!
//! ```text
//! @title Reading list
//! @source public
//!
//! * books
//!     * [abc1234] an existing note, relabelled
//!         @weight 0.75
//!     -- recommended by
//!         * a friend
//!     * [def5678]
//! ```
//!
//! A document is a header of `@key value` properties followed by bulleted
//! content lines. Indentation (spaces; tabs count as four) gives the
//! hierarchy. See [`WikiParser`] for the parsing rules.

mod content;
mod error;
mod hierarchy;
mod normalize;
mod parser;

pub use content::ContentLineError;
pub use error::FormatError;
pub use normalize::DEFAULT_TAB_WIDTH;
pub use parser::WikiParser;

use crate::domain::{Link, PropertySchema, TreeNode};

/// Opens every property line.
pub const PROPERTY_SIGIL: char = '@';

/// Opens and closes a multi-line property value.
pub const MULTILINE_DELIMITER: &str = "```";

/// Suffix reserved for truncated titles in other views; never valid input.
pub const TITLE_TRUNCATOR: &str = " [...]";

/// Parses a document with the standard property schema.
///
/// # Errors
///
/// Returns the first `FormatError` in the input.
pub fn parse(input: &str) -> Result<TreeNode<Link>, FormatError> {
    WikiParser::new(PropertySchema::standard()).parse(input)
}
