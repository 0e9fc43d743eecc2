//! Attendance behavior configuration

use serde::Deserialize;

use crate::domain::attendance::RepeatCheckInPolicy;

/// Attendance configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceConfig {
    /// What to do when a member checks in while already checked in
    #[serde(default)]
    pub repeat_check_in: RepeatCheckInPolicy,
}
