//! Wiring: turn an [`AppConfig`] into a ready [`AttendanceService`].

use std::sync::Arc;
use thiserror::Error;

use crate::adapters::{FileCheckInLog, SqliteMemberStore, SystemClock};
use crate::application::AttendanceService;
use crate::config::{AppConfig, ConfigError};
use crate::domain::foundation::DomainError;

/// Errors raised while assembling the service.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open member store: {0}")]
    Store(#[from] DomainError),
}

/// Validate the configuration, open the SQLite store and the optional
/// check-in journal, and build the service on the system clock.
pub async fn build_service(config: &AppConfig) -> Result<AttendanceService, BootstrapError> {
    config.validate().map_err(ConfigError::from)?;

    let store = SqliteMemberStore::connect(&config.database).await?;
    let mut service = AttendanceService::new(Arc::new(store), Arc::new(SystemClock::new()))
        .with_policy(config.attendance.repeat_check_in);

    if let Some(path) = &config.journal.path {
        tracing::info!(path = %path.display(), "Check-in journal enabled");
        service = service.with_check_in_log(Arc::new(FileCheckInLog::new(path)));
    }

    tracing::info!(policy = %service.policy(), "Attendance service ready");
    Ok(service)
}
