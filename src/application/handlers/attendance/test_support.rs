//! Shared fixtures for attendance handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::{InMemoryMemberStore, ManualClock};
use crate::domain::attendance::{ActiveSession, MemberStats, Session};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Timestamp};
use crate::domain::member::{Member, MemberName, NewMember};
use crate::ports::MemberStore;

// ════════════════════════════════════════════════════════════════════════════
// Mock Implementation
// ════════════════════════════════════════════════════════════════════════════

/// Store whose every call fails with a database error.
pub struct FailingMemberStore;

fn simulated() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "Simulated database failure")
}

#[async_trait]
impl MemberStore for FailingMemberStore {
    async fn add_member(&self, _member: NewMember) -> Result<Member, DomainError> {
        Err(simulated())
    }

    async fn find_by_name(&self, _name: &MemberName) -> Result<Option<Member>, DomainError> {
        Err(simulated())
    }

    async fn find_by_id(&self, _id: MemberId) -> Result<Option<Member>, DomainError> {
        Err(simulated())
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        Err(simulated())
    }

    async fn open_session(
        &self,
        _member_id: MemberId,
        _checked_in_at: Timestamp,
    ) -> Result<Session, DomainError> {
        Err(simulated())
    }

    async fn close_session(
        &self,
        _member_id: MemberId,
        _checked_out_at: Timestamp,
    ) -> Result<Session, DomainError> {
        Err(simulated())
    }

    async fn find_open_session(&self, _member_id: MemberId) -> Result<Option<Session>, DomainError> {
        Err(simulated())
    }

    async fn active_sessions(&self) -> Result<Vec<ActiveSession>, DomainError> {
        Err(simulated())
    }

    async fn member_stats(&self, _member_id: MemberId) -> Result<MemberStats, DomainError> {
        Err(simulated())
    }

    async fn sessions_for_member(&self, _member_id: MemberId) -> Result<Vec<Session>, DomainError> {
        Err(simulated())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Test Helpers
// ════════════════════════════════════════════════════════════════════════════

/// 2024-01-15 10:00:00 UTC
pub fn start_time() -> Timestamp {
    Timestamp::from_unix_secs(1_705_312_800).unwrap()
}

pub fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(start_time()))
}

pub fn store() -> Arc<InMemoryMemberStore> {
    Arc::new(InMemoryMemberStore::new())
}

pub fn failing_store() -> Arc<FailingMemberStore> {
    Arc::new(FailingMemberStore)
}

pub fn name(raw: &str) -> MemberName {
    MemberName::parse(raw).unwrap()
}

/// Adds a member directly through the store.
pub async fn seed_member(store: &InMemoryMemberStore, raw: &str) -> Member {
    store
        .add_member(NewMember::named(name(raw), start_time().date()))
        .await
        .unwrap()
}
