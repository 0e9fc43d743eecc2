//! CheckInHandler - Command handler for starting a gym visit.
//!
//! Unknown names are registered on the spot. When a check-in log is
//! configured the event is mirrored there; a log failure never fails the
//! check-in.

use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, RepeatCheckInPolicy, Session};
use crate::domain::member::{Member, MemberName, NewMember};
use crate::ports::{CheckInEntry, CheckInLog, Clock, MemberStore};

/// Command to check a member in.
#[derive(Debug, Clone)]
pub struct CheckInCommand {
    pub name: String,
}

/// Result of a successful check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInResult {
    pub member: Member,
    pub session: Session,
    /// `true` when the member did not exist before this check-in.
    pub auto_registered: bool,
}

/// Handler for check-ins.
pub struct CheckInHandler {
    store: Arc<dyn MemberStore>,
    clock: Arc<dyn Clock>,
    log: Option<Arc<dyn CheckInLog>>,
    policy: RepeatCheckInPolicy,
}

impl CheckInHandler {
    pub fn new(
        store: Arc<dyn MemberStore>,
        clock: Arc<dyn Clock>,
        log: Option<Arc<dyn CheckInLog>>,
        policy: RepeatCheckInPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            log,
            policy,
        }
    }

    pub async fn handle(&self, cmd: CheckInCommand) -> Result<CheckInResult, AttendanceError> {
        let name = MemberName::parse(&cmd.name)?;

        // 1. Find or auto-register the member
        let (member, auto_registered) = match self.store.find_by_name(&name).await? {
            Some(member) => (member, false),
            None => {
                let member = self
                    .store
                    .add_member(NewMember::named(name, self.clock.today()))
                    .await?;
                tracing::info!(member_id = %member.id, name = %member.name, "Member auto-registered on check-in");
                (member, true)
            }
        };

        // 2. Apply the repeat check-in policy
        if let Some(open) = self.store.find_open_session(member.id).await? {
            match self.policy {
                RepeatCheckInPolicy::Reject => {
                    return Err(AttendanceError::already_checked_in(member.name.as_str()));
                }
                RepeatCheckInPolicy::Shadow => {
                    tracing::warn!(
                        member_id = %member.id,
                        shadowed_session_id = %open.id,
                        "Member checked in again; previous open session will never close"
                    );
                }
            }
        }

        // 3. Open the session
        let session = self.store.open_session(member.id, self.clock.now()).await?;

        tracing::info!(
            member_id = %member.id,
            session_id = %session.id,
            checked_in_at = %session.checked_in_at,
            "Member checked in"
        );

        // 4. Mirror to the check-in log
        if let Some(log) = &self.log {
            let entry = CheckInEntry::new(member.name.clone(), session.checked_in_at);
            if let Err(e) = log.append(&entry).await {
                tracing::warn!(member_id = %member.id, error = %e, "Failed to write check-in log");
            }
        }

        Ok(CheckInResult {
            member,
            session,
            auto_registered,
        })
    }
}
