//! Configuration for sqlref.
//!
//! Settings live in a single optional TOML file. When the file does not exist
//! the defaults apply; when it exists but cannot be parsed, loading fails with
//! [`Error::Config`] rather than silently ignoring it.
//!
//! ## File Location
//!
//! - Linux: `~/.config/sqlref/config.toml`
//! - macOS: `~/Library/Application Support/dev.sqlref.sqlref/config.toml`
//! - Windows: `%APPDATA%\sqlref\sqlref\config\config.toml`
//!
//! An explicit path (`--config` / `SQLREF_CONFIG`) overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [search]
//! debounce_ms = 150
//!
//! [display]
//! highlight_code = true
//! show_explanations = true
//! show_descriptions = false
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Query handling
    pub search: SearchConfig,
    /// Rendering preferences
    pub display: DisplayConfig,
}

/// Query handling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period, in milliseconds, before a query edit is applied.
    ///
    /// Only the interactive browser debounces; one-shot searches apply the
    /// query directly. Zero applies every edit immediately.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 100 }
    }
}

impl SearchConfig {
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Rendering preferences for the text output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Highlight query matches inside code blocks, not just titles and
    /// explanations.
    pub highlight_code: bool,
    /// Print the explanation under each example.
    pub show_explanations: bool,
    /// Print the section description when a section is expanded.
    pub show_descriptions: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            highlight_code: false,
            show_explanations: true,
            show_descriptions: true,
        }
    }
}

impl Config {
    /// Load from `path` if given, otherwise from the platform location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let Some(default_path) = Self::default_path() else {
                    tracing::debug!("no config directory on this platform; using defaults");
                    return Ok(Self::default());
                };
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load from an explicit file. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::Config(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Platform config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "sqlref", "sqlref")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.debounce_ms, 100);
        assert_eq!(config.search.debounce(), Duration::from_millis(100));
        assert!(!config.display.highlight_code);
        assert!(config.display.show_explanations);
        assert!(config.display.show_descriptions);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml_str("[display]\nhighlight_code = true\n").unwrap();
        assert!(config.display.highlight_code);
        assert!(config.display.show_explanations);
        assert_eq!(config.search.debounce_ms, 100);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = Config::from_toml_str("[search]\ndebounce_ms = \"fast\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\ndebounce_ms = 250\n")?;

        let config = Config::load(Some(&path))?;
        assert_eq!(config.search.debounce(), Duration::from_millis(250));
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[display\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    proptest! {
        #[test]
        fn test_debounce_roundtrip(debounce_ms in 0u64..=10_000) {
            let config = Config {
                search: SearchConfig { debounce_ms },
                display: DisplayConfig::default(),
            };
            let serialized = toml::to_string_pretty(&config).unwrap();
            let deserialized = Config::from_toml_str(&serialized).unwrap();
            prop_assert_eq!(deserialized.search.debounce_ms, debounce_ms);
        }
    }
}
