//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GYM_ATTENDANCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gym_attendance::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Database at {}", config.database.url);
//! ```

mod attendance;
mod database;
mod error;
mod journal;
mod logging;

pub use attendance::AttendanceConfig;
pub use database::{DatabaseConfig, MAX_POOL_SIZE};
pub use error::{ConfigError, ValidationError};
pub use journal::JournalConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration backed by `gym_attendance.db` in the working directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// SQLite database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Check-in behavior
    #[serde(default)]
    pub attendance: AttendanceConfig,

    /// Optional flat-file check-in journal
    #[serde(default)]
    pub journal: JournalConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GYM_ATTENDANCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GYM_ATTENDANCE__DATABASE__URL=sqlite://gym.db` -> `database.url`
    /// - `GYM_ATTENDANCE__ATTENDANCE__REPEAT_CHECK_IN=shadow` -> `attendance.repeat_check_in`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GYM_ATTENDANCE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.journal.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
