//! Clock port - where "now" comes from.
//!
//! Services read the time through this port instead of calling
//! `Utc::now()` so check-in/check-out durations can be tested
//! deterministically.

use chrono::NaiveDate;

use crate::domain::foundation::Timestamp;

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Timestamp;

    /// Current calendar date (UTC).
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
