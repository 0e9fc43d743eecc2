//! Session entity - one visit from check-in to check-out.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, SessionId, StateMachine, Timestamp};

use super::SessionStatus;

/// A single gym visit.
///
/// # Invariants
///
/// - `checked_in_at` never changes after creation
/// - `checked_out_at` and `duration_minutes` are either both absent (open)
///   or both present (closed)
/// - a closed session is never reopened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub member_id: MemberId,
    pub checked_in_at: Timestamp,
    pub checked_out_at: Option<Timestamp>,
    pub duration_minutes: Option<i64>,
}

impl Session {
    /// Creates an open session.
    pub fn open(id: SessionId, member_id: MemberId, checked_in_at: Timestamp) -> Self {
        Self {
            id,
            member_id,
            checked_in_at,
            checked_out_at: None,
            duration_minutes: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        if self.checked_out_at.is_some() {
            SessionStatus::Closed
        } else {
            SessionStatus::Open
        }
    }

    pub fn is_open(&self) -> bool {
        self.status().is_open()
    }

    /// Records the check-out and computes the visit length.
    ///
    /// Returns the duration in whole minutes.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if the session is already closed.
    pub fn close(&mut self, checked_out_at: Timestamp) -> Result<i64, DomainError> {
        self.status()
            .transition_to(SessionStatus::Closed)
            .map_err(|e| {
                DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                    .with_detail("session_id", self.id.to_string())
            })?;

        let minutes = visit_duration_minutes(&self.checked_in_at, &checked_out_at);
        self.checked_out_at = Some(checked_out_at);
        self.duration_minutes = Some(minutes);
        Ok(minutes)
    }

    /// True when the check-out was recorded before the check-in.
    pub fn has_clock_skew(&self) -> bool {
        self.checked_out_at
            .map(|out| out.is_before(&self.checked_in_at))
            .unwrap_or(false)
    }
}

/// Whole minutes between check-in and check-out, floored.
///
/// A check-out earlier than the check-in (clock skew) counts as 0.
pub fn visit_duration_minutes(checked_in_at: &Timestamp, checked_out_at: &Timestamp) -> i64 {
    checked_out_at.whole_minutes_since(checked_in_at).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn start() -> Timestamp {
        Timestamp::from_unix_secs(1_705_312_800).unwrap()
    }

    fn open_session() -> Session {
        Session::open(SessionId::from_raw(1), MemberId::from_raw(1), start())
    }

    #[test]
    fn new_session_is_open() {
        let session = open_session();
        assert!(session.is_open());
        assert_eq!(session.duration_minutes, None);
    }

    #[test]
    fn close_sets_checkout_and_duration() {
        let mut session = open_session();
        let minutes = session.close(start().plus_minutes(10)).unwrap();

        assert_eq!(minutes, 10);
        assert_eq!(session.status(), SessionStatus::Closed);
        assert_eq!(session.checked_out_at, Some(start().plus_minutes(10)));
        assert_eq!(session.duration_minutes, Some(10));
    }

    #[test]
    fn close_immediately_gives_zero_minutes() {
        let mut session = open_session();
        assert_eq!(session.close(start().plus_secs(59)).unwrap(), 0);
    }

    #[test]
    fn close_twice_fails() {
        let mut session = open_session();
        session.close(start().plus_minutes(5)).unwrap();

        let err = session.close(start().plus_minutes(6)).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(session.duration_minutes, Some(5));
    }

    #[test]
    fn checkout_before_checkin_clamps_to_zero() {
        let mut session = open_session();
        assert_eq!(session.close(start().plus_minutes(-3)).unwrap(), 0);
        assert!(session.has_clock_skew());
    }

    proptest! {
        #[test]
        fn duration_is_floor_of_elapsed_seconds(elapsed in 0i64..1_000_000) {
            let out = start().plus_secs(elapsed);
            prop_assert_eq!(visit_duration_minutes(&start(), &out), elapsed / 60);
        }
    }
}
