//! Isolated test environment with temp directory.

use super::NotetreeCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment: an outline directory plus a private config home.
///
/// Everything lives under one temp directory that is cleaned up on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    notes_dir: PathBuf,
    home_dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let home_dir = temp_dir.path().join("home");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        std::fs::create_dir_all(&home_dir).expect("Failed to create home directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            home_dir,
        }
    }

    /// Returns the path to the outline directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Writes an outline file (creating parent directories) and returns its path.
    pub fn write_outline(&self, name: &str, content: &str) -> PathBuf {
        self.write_bytes(name, content.as_bytes())
    }

    /// Writes raw bytes, for encoding tests.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.notes_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, bytes).expect("Failed to write file");
        path
    }

    /// Writes `~/.config/notetree/config.toml` inside the private home.
    pub fn write_config(&self, toml: &str) -> PathBuf {
        let dir = self.home_dir.join(".config").join("notetree");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, toml).expect("Failed to write config");
        path
    }

    /// Creates a command that reads config from this environment only.
    pub fn cmd(&self) -> NotetreeCommand {
        NotetreeCommand::new().config_home(&self.home_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_directories() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_write_outline_nested() {
        let env = TestEnv::new();
        let path = env.write_outline("a/b/c.wiki", "* c\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "* c\n");
    }
}
