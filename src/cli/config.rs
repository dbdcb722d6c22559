//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::infra::DEFAULT_EXTENSIONS;
use crate::wiki::DEFAULT_TAB_WIDTH;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Spaces per tab when measuring indentation
    pub tab_width: Option<usize>,

    /// File extensions picked up when checking a directory
    pub extensions: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;

        if config.tab_width == Some(0) {
            anyhow::bail!(
                "invalid config file {}: tab_width must be at least 1",
                config_path.display()
            );
        }
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notetree/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notetree")
            .join("config.toml")
    }

    /// Resolve the tab width, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--tab-width` argument
    /// 2. Config file `tab_width` setting
    /// 3. Four spaces
    pub fn tab_width(&self, cli_width: Option<u16>) -> usize {
        cli_width
            .map(usize::from)
            .or(self.tab_width)
            .unwrap_or(DEFAULT_TAB_WIDTH)
    }

    /// Extensions recognised when scanning directories.
    pub fn extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.tab_width(None), 4);
        assert_eq!(config.extensions(), vec!["wiki", "smsn"]);
    }

    #[test]
    fn tab_width_prefers_cli_arg() {
        let config = Config {
            tab_width: Some(8),
            extensions: None,
        };
        assert_eq!(config.tab_width(Some(2)), 2);
    }

    #[test]
    fn tab_width_falls_back_to_config() {
        let config = Config {
            tab_width: Some(8),
            extensions: None,
        };
        assert_eq!(config.tab_width(None), 8);
    }

    #[test]
    fn load_from_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.tab_width.is_none());
        assert!(config.extensions.is_none());
    }

    #[test]
    fn load_from_reads_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tab_width = 2\nextensions = [\"outline\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.tab_width(None), 2);
        assert_eq!(config.extensions(), vec!["outline"]);
    }

    #[test]
    fn load_from_rejects_zero_tab_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tab_width = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("tab_width"));
    }

    #[test]
    fn load_from_reports_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tab_width = \"wide\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(err.to_string().starts_with("failed to parse config file"));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("notetree/config.toml"));
    }
}
