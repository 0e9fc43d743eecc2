//! What happens when a member checks in while already checked in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for a check-in while the member still has an open session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepeatCheckInPolicy {
    /// Refuse the check-in. Keeps at most one open session per member.
    #[default]
    Reject,
    /// Open another session anyway. Older open sessions stay open forever
    /// and only the newest one can be checked out.
    Shadow,
}

impl fmt::Display for RepeatCheckInPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RepeatCheckInPolicy::Reject => "reject",
            RepeatCheckInPolicy::Shadow => "shadow",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for RepeatCheckInPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(RepeatCheckInPolicy::Reject),
            "shadow" => Ok(RepeatCheckInPolicy::Shadow),
            other => Err(format!("unknown repeat check-in policy: {}", other)),
        }
    }
}
