//! Read-side summaries: visit statistics and who is in the gym.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::member::Member;

use super::Session;

/// Visit statistics for one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    /// Every session ever opened, open or closed.
    pub total_visits: u64,
    /// Sum of closed session durations; open sessions contribute 0.
    pub total_duration_minutes: i64,
    /// Latest check-in, if the member ever visited.
    pub last_visit: Option<Timestamp>,
}

impl MemberStats {
    /// Folds a member's sessions into statistics.
    pub fn from_sessions<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> Self {
        sessions.into_iter().fold(Self::default(), |mut stats, session| {
            stats.total_visits += 1;
            stats.total_duration_minutes += session.duration_minutes.unwrap_or(0);
            stats.last_visit = match stats.last_visit {
                Some(last) if last >= session.checked_in_at => Some(last),
                _ => Some(session.checked_in_at),
            };
            stats
        })
    }
}

/// A member currently checked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub member: Member,
    pub session_id: SessionId,
    pub checked_in_at: Timestamp,
}
