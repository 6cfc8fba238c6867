// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves default grid settings from a TOML config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::GridMode;

/// Gap inserted after every column and row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub x: i32,
    pub y: i32,
}

impl Default for Padding {
    fn default() -> Self {
        Self { x: 6, y: 6 }
    }
}

/// Offset of the first cell inside the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 6, y: 6 }
    }
}

/// How solved layouts are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Solver used when a layout file does not pick one
    pub mode: GridMode,

    /// Default inter-cell padding
    pub padding: Padding,

    /// Default grid origin
    pub origin: Origin,

    /// Output format for the command line tool
    pub output: OutputFormat,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Layout has no elements")]
    EmptyLayout,

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

impl Config {
    /// Get the default config file path (~/.config/springgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("springgrid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("mode = \"uniform\"\n[padding]\nx = 2\n").unwrap();
        assert_eq!(config.mode, GridMode::Uniform);
        assert_eq!(config.padding, Padding { x: 2, y: 6 });
        assert_eq!(config.origin, Origin::default());
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            mode: GridMode::Uniform,
            padding: Padding { x: 1, y: 2 },
            origin: Origin { x: 3, y: 4 },
            output: OutputFormat::Json,
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mode = \"diagonal\"").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_default_path() {
        if let Some(p) = Config::default_path() {
            assert!(p.ends_with("springgrid/config.toml"));
        }
    }
}
