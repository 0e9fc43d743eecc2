//! Check-in journal configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Flat-file check-in journal configuration. Disabled when `path` is unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl JournalConfig {
    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.as_os_str().to_string_lossy().trim().is_empty() => {
                Err(ValidationError::BlankJournalPath)
            }
            _ => Ok(()),
        }
    }
}
