//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::graph::GraphStats;
use crate::infra::FsError;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// A file that failed to check.
#[derive(Debug, Serialize)]
pub struct CheckIssue {
    pub path: String,
    /// Absent for failures that aren't tied to a line, such as bad encoding.
    pub line: Option<usize>,
    pub message: String,
}

impl CheckIssue {
    pub fn from_error(error: &FsError) -> Self {
        let path = error.path().display().to_string();
        match error {
            FsError::Parse { source, .. } => Self {
                path,
                line: Some(source.line()),
                message: source.message().to_string(),
            },
            other => Self {
                path,
                line: None,
                message: other.to_string(),
            },
        }
    }
}

impl std::fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.path, line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Counts for one outline file.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub path: String,
    pub nodes: usize,
    #[serde(flatten)]
    pub graph: GraphStats,
}
