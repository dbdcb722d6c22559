//! Command handlers for the CLI.

mod check;
mod completions;
mod stats;
mod tree;

pub use check::{CheckSummary, check_paths, handle_check};
pub use completions::handle_completions;
pub use stats::{build_report, handle_stats};
pub use tree::{handle_tree, render_tree};
