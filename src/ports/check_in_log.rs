//! Check-in log port - append-only record of check-in events.
//!
//! The log keeps one `Name,YYYY-MM-DD HH:MM:SS` line per check-in. It has no
//! notion of check-out or duration; it is a degraded mirror of the member
//! store, not a replacement for it.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Timestamp, LOG_TIME_FORMAT};
use crate::domain::member::MemberName;

/// One check-in event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInEntry {
    pub name: MemberName,
    pub checked_in_at: Timestamp,
}

impl CheckInEntry {
    pub fn new(name: MemberName, checked_in_at: Timestamp) -> Self {
        Self { name, checked_in_at }
    }

    /// Renders the entry as a log line (without the trailing newline).
    pub fn to_line(&self) -> String {
        format!("{},{}", self.name, self.checked_in_at.to_log_string())
    }

    /// Parses a log line. Names may contain commas; the timestamp is
    /// everything after the last one.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (name, time) = line.trim_end().rsplit_once(',')?;
        let name = MemberName::parse(name).ok()?;
        let naive = NaiveDateTime::parse_from_str(time.trim(), LOG_TIME_FORMAT).ok()?;
        Some(Self::new(name, Timestamp::from_datetime(naive.and_utc())))
    }
}

/// Port for the append-only check-in log.
#[async_trait]
pub trait CheckInLog: Send + Sync {
    /// Append one entry.
    ///
    /// # Errors
    ///
    /// `StorageError` when the log cannot be written.
    async fn append(&self, entry: &CheckInEntry) -> Result<(), DomainError>;

    /// Read all entries in the order they were written.
    ///
    /// Unparseable lines are skipped. A missing log reads as empty.
    async fn read_all(&self) -> Result<Vec<CheckInEntry>, DomainError>;
}
