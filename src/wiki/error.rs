//! The single error kind raised for malformed outline markup.

use thiserror::Error;

/// A grammar violation at a specific input line.
///
/// Parsing stops at the first violation; there is no recovery mode.
/// `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct FormatError {
    line: usize,
    message: String,
}

impl FormatError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// Returns the 1-based line number of the offending line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the human-readable message, without the line prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}
