//! Outline fixtures shared by the integration tests.
//!
//! `tests/fixtures/valid` holds `.wiki` documents that must parse;
//! `tests/fixtures/invalid` holds documents that must fail with a
//! line-numbered `FormatError`.

pub mod harness;

use std::path::{Path, PathBuf};

/// Extension every outline fixture carries.
pub const FIXTURE_EXTENSION: &str = "wiki";

/// Returns the outline fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Returns the path to an outline that must parse.
pub fn valid_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("valid").join(name)
}

/// Returns the path to an outline that must be rejected.
pub fn invalid_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("invalid").join(name)
}

/// Lists every `.wiki` outline under `valid/`, sorted by name.
pub fn valid_fixtures() -> Vec<PathBuf> {
    outlines_in(&fixtures_dir().join("valid"))
}

/// Lists every `.wiki` outline under `invalid/`, sorted by name.
pub fn invalid_fixtures() -> Vec<PathBuf> {
    outlines_in(&fixtures_dir().join("invalid"))
}

fn outlines_in(dir: &Path) -> Vec<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to list fixtures in {}: {}", dir.display(), e));
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| entry.expect("fixture entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == FIXTURE_EXTENSION))
        .collect();
    paths.sort();
    paths
}

/// Reads an outline fixture as UTF-8 text.
///
/// # Panics
///
/// Panics if the file cannot be read.
pub fn read_fixture(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read outline fixture {}: {}", path.display(), e))
}
