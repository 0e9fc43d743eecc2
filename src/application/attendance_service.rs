//! AttendanceService - the front desk.
//!
//! Bundles the attendance handlers behind one name-based API. Callers hand
//! over raw user input; names are normalized before any lookup.

use std::sync::Arc;

use crate::domain::attendance::{ActiveSession, AttendanceError, RepeatCheckInPolicy};
use crate::domain::member::Member;
use crate::ports::{CheckInLog, Clock, MemberStore};

use super::handlers::{
    CheckInCommand, CheckInHandler, CheckInResult, CheckOutCommand, CheckOutHandler,
    CheckOutResult, GetProfileHandler, GetProfileQuery, GetSessionHistoryHandler,
    GetSessionHistoryQuery, ListActiveSessionsHandler, ListMembersHandler, MemberHistory,
    MemberProfile, RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult,
};

/// Name-based attendance operations over a [`MemberStore`].
#[derive(Clone)]
pub struct AttendanceService {
    store: Arc<dyn MemberStore>,
    clock: Arc<dyn Clock>,
    log: Option<Arc<dyn CheckInLog>>,
    policy: RepeatCheckInPolicy,
}

impl AttendanceService {
    /// Service with no check-in log and the default repeat check-in policy.
    pub fn new(store: Arc<dyn MemberStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            log: None,
            policy: RepeatCheckInPolicy::default(),
        }
    }

    /// Mirror every check-in to `log`.
    pub fn with_check_in_log(mut self, log: Arc<dyn CheckInLog>) -> Self {
        self.log = Some(log);
        self
    }

    /// Use `policy` for check-ins while already checked in.
    pub fn with_policy(mut self, policy: RepeatCheckInPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The repeat check-in policy in effect.
    pub fn policy(&self) -> RepeatCheckInPolicy {
        self.policy
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<dyn MemberStore> {
        &self.store
    }

    /// Register a member, or return the existing one with the same name.
    pub async fn register(
        &self,
        name: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> Result<RegisterMemberResult, AttendanceError> {
        RegisterMemberHandler::new(self.store.clone(), self.clock.clone())
            .handle(RegisterMemberCommand {
                name: name.to_string(),
                email: email.map(str::to_string),
                phone: phone.map(str::to_string),
            })
            .await
    }

    /// Start a visit, registering unknown names first.
    pub async fn check_in(&self, name: &str) -> Result<CheckInResult, AttendanceError> {
        CheckInHandler::new(
            self.store.clone(),
            self.clock.clone(),
            self.log.clone(),
            self.policy,
        )
        .handle(CheckInCommand {
            name: name.to_string(),
        })
        .await
    }

    /// End the member's most recent open visit.
    pub async fn check_out(&self, name: &str) -> Result<CheckOutResult, AttendanceError> {
        CheckOutHandler::new(self.store.clone(), self.clock.clone())
            .handle(CheckOutCommand {
                name: name.to_string(),
            })
            .await
    }

    /// A member with their visit statistics.
    pub async fn profile(&self, name: &str) -> Result<MemberProfile, AttendanceError> {
        GetProfileHandler::new(self.store.clone())
            .handle(GetProfileQuery {
                name: name.to_string(),
            })
            .await
    }

    /// All members, sorted by name.
    pub async fn list_members(&self) -> Result<Vec<Member>, AttendanceError> {
        ListMembersHandler::new(self.store.clone()).handle().await
    }

    /// Open sessions, earliest check-in first.
    pub async fn active_sessions(&self) -> Result<Vec<ActiveSession>, AttendanceError> {
        ListActiveSessionsHandler::new(self.store.clone()).handle().await
    }

    /// Every session of a member, newest check-in first.
    pub async fn session_history(&self, name: &str) -> Result<MemberHistory, AttendanceError> {
        GetSessionHistoryHandler::new(self.store.clone())
            .handle(GetSessionHistoryQuery {
                name: name.to_string(),
            })
            .await
    }
}

impl std::fmt::Debug for AttendanceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendanceService")
            .field("policy", &self.policy)
            .field("check_in_log", &self.log.is_some())
            .finish_non_exhaustive()
    }
}
