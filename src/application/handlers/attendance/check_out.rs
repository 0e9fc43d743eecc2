//! CheckOutHandler - Command handler for ending a gym visit.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Session};
use crate::domain::member::{Member, MemberName};
use crate::ports::{Clock, MemberStore};

/// Command to check a member out.
#[derive(Debug, Clone)]
pub struct CheckOutCommand {
    pub name: String,
}

/// Result of a successful check-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutResult {
    pub member: Member,
    pub session: Session,
    /// Whole minutes spent, never negative.
    pub duration_minutes: i64,
}

/// Handler for check-outs.
///
/// Unlike check-in, an unknown name is an error: there is nothing to close.
pub struct CheckOutHandler {
    store: Arc<dyn MemberStore>,
    clock: Arc<dyn Clock>,
}

impl CheckOutHandler {
    pub fn new(store: Arc<dyn MemberStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(&self, cmd: CheckOutCommand) -> Result<CheckOutResult, AttendanceError> {
        let name = MemberName::parse(&cmd.name)?;

        let member = self
            .store
            .find_by_name(&name)
            .await?
            .ok_or_else(|| AttendanceError::member_not_found(name.as_str()))?;

        let session = self.store.close_session(member.id, self.clock.now()).await?;

        if session.has_clock_skew() {
            tracing::warn!(
                member_id = %member.id,
                session_id = %session.id,
                "Check-out precedes check-in; duration clamped to zero"
            );
        }

        let duration_minutes = session.duration_minutes.unwrap_or(0);

        tracing::info!(
            member_id = %member.id,
            session_id = %session.id,
            duration_minutes,
            "Member checked out"
        );

        Ok(CheckOutResult {
            member,
            session,
            duration_minutes,
        })
    }
}
