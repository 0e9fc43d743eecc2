//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Database URL must start with sqlite:")]
    InvalidDatabaseUrl,

    #[error("Pool max_connections must be between 1 and {max}")]
    InvalidPoolSize { max: u32 },

    #[error("Busy timeout must be greater than zero")]
    InvalidBusyTimeout,

    #[error("Journal path must not be blank")]
    BlankJournalPath,

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
