//! In-memory Check-in Log Adapter
//!
//! Keeps entries in a vector. Can be switched into a failing mode to
//! exercise callers' handling of an unwritable log.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{CheckInEntry, CheckInLog};

/// In-memory implementation of the CheckInLog port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCheckInLog {
    entries: Arc<RwLock<Vec<CheckInEntry>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryCheckInLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log whose writes always fail.
    pub fn failing() -> Self {
        let log = Self::default();
        log.set_failing(true);
        log
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of entries written so far.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CheckInLog for InMemoryCheckInLog {
    async fn append(&self, entry: &CheckInEntry) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Check-in log is unavailable",
            ));
        }
        self.entries.write().await.push(entry.clone());
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<CheckInEntry>, DomainError> {
        Ok(self.entries.read().await.clone())
    }
}
