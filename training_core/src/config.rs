//! Configuration file support for fitreps.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitreps/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "fitreps";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub user: UserConfig,

    #[serde(default)]
    pub builder: BuilderConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl DataConfig {
    /// The JSON store inside the data directory
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("store.json")
    }
}

/// Signed-in user for CLI sessions. No id means unauthenticated.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Defaults for the program builder
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BuilderConfig {
    #[serde(default = "default_split")]
    pub default_split: String,

    #[serde(default = "default_days")]
    pub default_days: u32,

    #[serde(default = "default_rest_days")]
    pub rest_days_per_week: u32,

    #[serde(default = "default_weekly_weeks")]
    pub weekly_weeks: u32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            default_split: default_split(),
            default_days: default_days(),
            rest_days_per_week: default_rest_days(),
            weekly_weeks: default_weekly_weeks(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn default_split() -> String {
    "ppl".into()
}

fn default_days() -> u32 {
    30
}

fn default_rest_days() -> u32 {
    1
}

fn default_weekly_weeks() -> u32 {
    4
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if config.builder.rest_days_per_week > 7 {
            return Err(Error::Config(format!(
                "builder.rest_days_per_week must be at most 7, got {}",
                config.builder.rest_days_per_week
            )));
        }
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
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
