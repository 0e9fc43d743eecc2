//! Member store port.
//!
//! The single owner of persisted attendance state: members and their
//! sessions. Implementations must keep the two consistent (a session always
//! references an existing member).
//!
//! # Atomicity
//!
//! Each method is one logical operation. Implementations complete its
//! writes atomically (one transaction, one lock) and make them durable
//! before returning `Ok`. No partial member or session write is ever
//! observable.
//!
//! # Example
//!
//! ```ignore
//! async fn visit(store: &dyn MemberStore, name: &MemberName, now: Timestamp) -> Result<i64, DomainError> {
//!     let member = store
//!         .find_by_name(name)
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::MemberNotFound, "unknown member"))?;
//!     store.open_session(member.id, now).await?;
//!     let closed = store.close_session(member.id, now.plus_minutes(45)).await?;
//!     Ok(closed.duration_minutes.unwrap_or(0))
//! }
//! ```

use async_trait::async_trait;

use crate::domain::attendance::{ActiveSession, MemberStats, Session};
use crate::domain::foundation::{DomainError, MemberId, Timestamp};
use crate::domain::member::{Member, MemberName, NewMember};

/// Persistence port for members and their gym sessions.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Create a member.
    ///
    /// # Errors
    ///
    /// - `DuplicateName` if the normalized name is taken
    /// - `DuplicateEmail` if a supplied email is taken
    /// - `DatabaseError` on persistence failure
    async fn add_member(&self, member: NewMember) -> Result<Member, DomainError>;

    /// Find a member by normalized name (exact match).
    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>, DomainError>;

    /// Find a member by id.
    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError>;

    /// All members sorted by name ascending.
    async fn list_all(&self) -> Result<Vec<Member>, DomainError>;

    /// Open a new session for a member.
    ///
    /// An already open session does not prevent this; callers enforce
    /// their own policy.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member does not exist
    async fn open_session(
        &self,
        member_id: MemberId,
        checked_in_at: Timestamp,
    ) -> Result<Session, DomainError>;

    /// Close the member's most recently opened session that is still open.
    ///
    /// Returns the closed session with its computed duration.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if the member has no open session
    async fn close_session(
        &self,
        member_id: MemberId,
        checked_out_at: Timestamp,
    ) -> Result<Session, DomainError>;

    /// The open session `close_session` would close, if any.
    async fn find_open_session(&self, member_id: MemberId) -> Result<Option<Session>, DomainError>;

    /// All open sessions, oldest check-in first.
    async fn active_sessions(&self) -> Result<Vec<ActiveSession>, DomainError>;

    /// Visit statistics for a member.
    ///
    /// # Errors
    ///
    /// - `MemberNotFound` if the member does not exist
    async fn member_stats(&self, member_id: MemberId) -> Result<MemberStats, DomainError>;

    /// Every session of a member, newest check-in first.
    async fn sessions_for_member(&self, member_id: MemberId) -> Result<Vec<Session>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn MemberStore) {}
    }
}
