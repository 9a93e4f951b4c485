// Rust guideline compliant 2026-10-18

//! Configuration management for PetLar.

use crate::{Error, FilterStatus, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "petlar.toml";

const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for PetLar behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of pets in a single reservation.
    #[serde(default = "default_max_pets")]
    pub max_pets_per_reservation: u32,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Status filter applied when none is given.
    #[serde(default)]
    pub default_filter: FilterStatus,

    /// Log level (error, warn, info, debug).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_pets() -> u32 {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_pets_per_reservation: default_max_pets(),
            output_format: OutputFormat::default(),
            default_filter: FilterStatus::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/petlar.toml`
    /// 3. Environment variables with `PETLAR_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", config_path.display(), e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PETLAR_MAX_PETS_PER_RESERVATION` - Pet limit per reservation
    /// - `PETLAR_OUTPUT_FORMAT` - Output format (json/table/plain)
    /// - `PETLAR_DEFAULT_FILTER` - Status literal or `all`
    /// - `PETLAR_LOG_LEVEL` - Log level (error/warn/info/debug)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PETLAR_MAX_PETS_PER_RESERVATION") {
            self.max_pets_per_reservation = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "PETLAR_MAX_PETS_PER_RESERVATION must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("PETLAR_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "PETLAR_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        if let Ok(val) = std::env::var("PETLAR_DEFAULT_FILTER") {
            self.default_filter = val.parse().map_err(|_| {
                Error::InvalidConfig(format!(
                    "PETLAR_DEFAULT_FILTER must be a reservation status or all, got {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("PETLAR_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_pets_per_reservation == 0 {
            return Err(Error::InvalidConfig(
                "max_pets_per_reservation must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<data_dir>/petlar.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(data_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReservationStatus;
    use std::sync::Mutex;
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("PETLAR_MAX_PETS_PER_RESERVATION");
        std::env::remove_var("PETLAR_OUTPUT_FORMAT");
        std::env::remove_var("PETLAR_DEFAULT_FILTER");
        std::env::remove_var("PETLAR_LOG_LEVEL");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_pets_per_reservation, 5);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.default_filter, FilterStatus::All);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
max_pets_per_reservation = 2
output_format = "json"
default_filter = "pending"
log_level = "debug"
"#;
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.max_pets_per_reservation, 2);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(
            config.default_filter,
            FilterStatus::Status(ReservationStatus::Pending)
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_config_validation_zero_pets() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "max_pets_per_reservation = 0",
        )
        .unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_invalid_filter_in_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "default_filter = \"archived\"",
        )
        .unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_config_env_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "max_pets_per_reservation = 2",
        )
        .unwrap();

        std::env::set_var("PETLAR_MAX_PETS_PER_RESERVATION", "3");
        std::env::set_var("PETLAR_OUTPUT_FORMAT", "plain");
        std::env::set_var("PETLAR_DEFAULT_FILTER", "all");
        std::env::set_var("PETLAR_LOG_LEVEL", "INFO");
        let config = Config::load(temp_dir.path()).unwrap();
        clear_all_env_vars();

        assert_eq!(config.max_pets_per_reservation, 3);
        assert_eq!(config.output_format, OutputFormat::Plain);
        assert_eq!(config.default_filter, FilterStatus::All);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_env_invalid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("PETLAR_OUTPUT_FORMAT", "invalid");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();

        std::env::set_var("PETLAR_LOG_LEVEL", "trace");
        assert!(Config::load(temp_dir.path()).is_err());
        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            max_pets_per_reservation: 4,
            output_format: OutputFormat::Json,
            default_filter: FilterStatus::Status(ReservationStatus::Confirmed),
            log_level: "info".to_string(),
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
