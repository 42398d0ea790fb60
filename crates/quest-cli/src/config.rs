//! Settings management for the CLI.

use crate::error::{CliError, Result};
use quest_engine::SearchPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// World description to load instead of the built-in mansion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// When rooms are searched for evidence
    #[serde(default)]
    pub search: SearchPolicy,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding settings and REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".detective-quest"))
    }

    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if missing.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::path()?)
    }

    /// Load configuration from `path`, or defaults if it does not exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
            search: SearchPolicy::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.world.is_none());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.search, SearchPolicy::EveryTurn);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_partial_settings() {
        let config: Config = toml::from_str(
            r#"
            world = "haunted.toml"

            [settings]
            format = "json"
            search = "on-arrival"
            "#,
        )
        .unwrap();

        assert_eq!(config.world, Some(PathBuf::from("haunted.toml")));
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.search, SearchPolicy::OnArrival);
        assert!(config.settings.color);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.color = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.settings.color);
        assert!(loaded.world.is_none());
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings\ncolor = ").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));
    }
}
