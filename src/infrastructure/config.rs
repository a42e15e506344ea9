//! Configuration management

use crate::error::{Result, ShelterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Storage key the collection is mirrored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "ferrellCatManagerData";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_RECENT_INTAKE_DAYS: u32 = 30;
pub const DEFAULT_RECENT_CATS_LIMIT: usize = 5;

/// Name of the marker directory holding config, storage and logs.
pub const SHELTER_DIR: &str = ".catshelter";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_recent_intake_days")]
    pub recent_intake_days: u32,
    #[serde(default = "default_recent_cats_limit")]
    pub recent_cats_limit: usize,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_recent_intake_days() -> u32 {
    DEFAULT_RECENT_INTAKE_DAYS
}

fn default_recent_cats_limit() -> usize {
    DEFAULT_RECENT_CATS_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: default_storage_key(),
            log_level: default_log_level(),
            recent_intake_days: DEFAULT_RECENT_INTAKE_DAYS,
            recent_cats_limit: DEFAULT_RECENT_CATS_LIMIT,
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .catshelter/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(SHELTER_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ShelterError::NotShelterDirectory(path.to_path_buf())
            } else {
                ShelterError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ShelterError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .catshelter/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let shelter_dir = path.join(SHELTER_DIR);
        let config_path = shelter_dir.join("config.toml");

        if !shelter_dir.exists() {
            fs::create_dir(&shelter_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ShelterError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the log level, checking the CATSHELTER_LOG environment variable first
    pub fn get_log_level(&self) -> String {
        std::env::var("CATSHELTER_LOG").unwrap_or_else(|_| self.log_level.clone())
    }
}
