//! Configuration management for itemgen CLI

use anyhow::{Context, Result};
use itemgen::{LineWrap, QuoteStyle, SerializerOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub quote_style: Option<QuoteStyle>,
    pub line_wrap: Option<LineWrap>,
    pub records: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("itemgen");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Serializer options, with a command-line quote style taking precedence
    pub fn serializer_options(&self, quote_style: Option<QuoteStyle>) -> SerializerOptions {
        SerializerOptions {
            line_wrap: self.line_wrap.unwrap_or_default(),
            quote_style: quote_style.or(self.quote_style).unwrap_or_default(),
        }
    }

    /// Records path from the command line, or the configured default
    pub fn records_path(&self, given: Option<PathBuf>) -> Result<PathBuf> {
        given.or_else(|| self.records.clone()).context(
            "No records file given. Pass one, or set a default with `itemgen configure --records PATH`",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            quote_style: Some(QuoteStyle::Double),
            line_wrap: None,
            records: Some(PathBuf::from("items.json")),
        };
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("quote_style = \"double\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quote_style = \"fancy\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            quote_style: Some(QuoteStyle::Double),
            ..Config::default()
        };
        assert_eq!(
            config.serializer_options(None).quote_style,
            QuoteStyle::Double
        );
        assert_eq!(
            config.serializer_options(Some(QuoteStyle::Single)).quote_style,
            QuoteStyle::Single
        );
        assert_eq!(
            Config::default().serializer_options(None),
            SerializerOptions::default()
        );
    }

    #[test]
    fn test_records_path_fallback() {
        let config = Config {
            records: Some(PathBuf::from("default.json")),
            ..Config::default()
        };
        assert_eq!(
            config.records_path(None).unwrap(),
            PathBuf::from("default.json")
        );
        assert_eq!(
            config.records_path(Some("x.yml".into())).unwrap(),
            PathBuf::from("x.yml")
        );
        assert!(Config::default().records_path(None).is_err());
    }
}
