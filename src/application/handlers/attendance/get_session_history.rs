//! GetSessionHistoryHandler - Query handler for a member's visits.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, Session};
use crate::domain::member::{Member, MemberName};
use crate::ports::MemberStore;

/// Query for a member's session history.
#[derive(Debug, Clone)]
pub struct GetSessionHistoryQuery {
    pub name: String,
}

/// Every session of one member, newest check-in first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberHistory {
    pub member: Member,
    pub sessions: Vec<Session>,
}

/// Handler for session history lookups.
pub struct GetSessionHistoryHandler {
    store: Arc<dyn MemberStore>,
}

impl GetSessionHistoryHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetSessionHistoryQuery,
    ) -> Result<MemberHistory, AttendanceError> {
        let name = MemberName::parse(&query.name)?;

        let member = self
            .store
            .find_by_name(&name)
            .await?
            .ok_or_else(|| AttendanceError::member_not_found(name.as_str()))?;

        let sessions = self.store.sessions_for_member(member.id).await?;

        Ok(MemberHistory { member, sessions })
    }
}
