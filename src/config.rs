//! Configuration management for fitdash
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/fitdash/config.toml

use crate::types::DailyStats;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    pub api: ApiConfig,
    pub timer: TimerConfig,
    /// Today's aggregate figures; injected here rather than derived
    pub today: DailyStats,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Gruvbox,
            api: ApiConfig::default(),
            timer: TimerConfig::default(),
            today: DailyStats::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("fitdash");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Remote endpoint settings for the two read-only fetches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://functions.poehali.dev/490cc87e-cdef-4d2c-bc3a-f629898a6281"
                .to_string(),
            timeout_secs: 10,
        }
    }
}

/// Rest timer settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    pub rest_seconds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { rest_seconds: 60 }
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Gruvbox,
    Nord,
    Transparent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Gruvbox);
        assert_eq!(config.timer.rest_seconds, 60);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.today.calories_goal, 2200);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            theme = "nord"

            [timer]
            rest_seconds = 90
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeName::Nord);
        assert_eq!(config.timer.rest_seconds, 90);
        // Untouched sections keep their defaults
        assert_eq!(config.today.protein_goal, 150);
        assert!(config.api.base_url.starts_with("https://"));
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.today.calories = 1800;
        config.api.base_url = "http://localhost:8080/api".into();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.today.calories, 1800);
        assert_eq!(parsed.api.base_url, "http://localhost:8080/api");
        assert_eq!(parsed.theme, ThemeName::Gruvbox);
    }
}
