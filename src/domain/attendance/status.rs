//! SessionStatus enum for tracking the lifecycle of a gym visit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of a session.
///
/// Derived from the session's check-out time: no check-out means `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Open,
    Closed,
}

impl SessionStatus {
    /// Returns true while the member is still in the gym.
    pub fn is_open(&self) -> bool {
        matches!(self, SessionStatus::Open)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!((self, target), (Open, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            SessionStatus::Open => vec![SessionStatus::Closed],
            SessionStatus::Closed => vec![],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Open => "Open",
            SessionStatus::Closed => "Closed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(SessionStatus::default(), SessionStatus::Open);
    }

    #[test]
    fn open_can_transition_to_closed() {
        assert_eq!(
            SessionStatus::Open.transition_to(SessionStatus::Closed),
            Ok(SessionStatus::Closed)
        );
    }

    #[test]
    fn closed_cannot_reopen() {
        assert!(SessionStatus::Closed.transition_to(SessionStatus::Open).is_err());
    }

    #[test]
    fn open_cannot_transition_to_open() {
        assert!(SessionStatus::Open.transition_to(SessionStatus::Open).is_err());
    }

    #[test]
    fn closed_is_terminal() {
        assert!(SessionStatus::Closed.is_terminal());
        assert!(!SessionStatus::Open.is_terminal());
    }

    #[test]
    fn valid_transitions_agree_with_can_transition_to() {
        for status in [SessionStatus::Open, SessionStatus::Closed] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&SessionStatus::Closed).unwrap();
        assert_eq!(json, "\"closed\"");
    }
}
