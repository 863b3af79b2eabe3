//! Configuration file support for the performance utilities.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/perfutils/config.toml`.
//! Every field has a default, so a missing or partial file is fine.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub estimate: EstimateConfig,
}

/// Training-log location configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_log_path(),
        }
    }
}

/// Strength-estimation defaults
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EstimateConfig {
    /// Formula used when none is given on the command line
    #[serde(default = "default_formula")]
    pub formula: String,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            formula: default_formula(),
        }
    }
}

// Default value functions
fn default_log_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("perfutils").join("log.json")
}

fn default_formula() -> String {
    "epley".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("perfutils").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.estimate.formula, "epley");
        assert!(config.log.path.ends_with("perfutils/log.json"));
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[estimate]
formula = "wathan"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.estimate.formula, "wathan");
        assert!(config.log.path.ends_with("perfutils/log.json")); // default
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.estimate.formula = "brzycki".into();
        config.save_to(&config_path).unwrap();

        let parsed = Config::load_from(&config_path).unwrap();
        assert_eq!(parsed.estimate.formula, "brzycki");
    }
}
