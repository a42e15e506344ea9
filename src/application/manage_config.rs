//! Config management use case

use crate::error::{Result, ShelterError};
use crate::infrastructure::storage::validate_key;
use crate::infrastructure::{Config, ShelterDirectory};
use crate::logging::normalize_level;

const VALID_KEYS: &str = "storage_key, log_level, recent_intake_days, recent_cats_limit";

/// Service for managing shelter configuration
pub struct ConfigService {
    shelter: ShelterDirectory,
}

impl ConfigService {
    pub fn new(shelter: ShelterDirectory) -> Self {
        ConfigService { shelter }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.shelter.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "log_level" => Ok(config.log_level),
            "recent_intake_days" => Ok(config.recent_intake_days.to_string()),
            "recent_cats_limit" => Ok(config.recent_cats_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ShelterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.shelter.load_config()?;

        match key {
            "storage_key" => {
                validate_key(value)?;
                config.storage_key = value.to_string();
            }
            "log_level" => {
                config.log_level = normalize_level(value)?.to_string();
            }
            "recent_intake_days" => {
                config.recent_intake_days = parse_number(key, value)?;
            }
            "recent_cats_limit" => {
                config.recent_cats_limit = parse_number(key, value)?;
            }
            "created" => {
                return Err(ShelterError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ShelterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.shelter.save_config(&config)?;
        log::info!("event=config_set module=app status=ok key={}", key);
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.shelter.load_config()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        ShelterError::Config(format!(
            "Invalid value for '{}': '{}' is not a non-negative whole number",
            key, value
        ))
    })
}
