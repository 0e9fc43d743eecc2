//! In-Memory Member Store Adapter
//!
//! Keeps members and sessions in process memory behind one lock.
//! Useful for testing and for throwaway sessions at the desk.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::attendance::{ActiveSession, MemberStats, Session};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId, SessionId, Timestamp};
use crate::domain::member::{Member, MemberName, NewMember};
use crate::ports::MemberStore;

#[derive(Debug, Default)]
struct StoreState {
    members: BTreeMap<MemberId, Member>,
    sessions: Vec<Session>,
    last_member_id: i64,
    last_session_id: i64,
}

impl StoreState {
    fn member(&self, id: MemberId) -> Result<&Member, DomainError> {
        self.members.get(&id).ok_or_else(|| member_not_found(id))
    }

    /// Index of the newest open session for a member.
    fn open_session_index(&self, member_id: MemberId) -> Option<usize> {
        self.sessions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.member_id == member_id && s.is_open())
            .max_by_key(|(_, s)| (s.checked_in_at, s.id))
            .map(|(index, _)| index)
    }
}

fn member_not_found(id: MemberId) -> DomainError {
    DomainError::new(ErrorCode::MemberNotFound, format!("Member {} not found", id))
        .with_detail("member_id", id.to_string())
}

/// In-memory implementation of the MemberStore port.
///
/// Every operation takes the write (or read) lock once for its whole
/// duration, so operations never interleave.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMemberStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryMemberStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members stored.
    pub async fn member_count(&self) -> usize {
        self.state.read().await.members.len()
    }

    /// Number of sessions stored, open or closed.
    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn add_member(&self, member: NewMember) -> Result<Member, DomainError> {
        let mut state = self.state.write().await;

        if state.members.values().any(|m| m.name == member.name) {
            return Err(DomainError::new(
                ErrorCode::DuplicateName,
                format!("Member {} already exists", member.name),
            )
            .with_detail("name", member.name.as_str()));
        }
        if let Some(email) = &member.email {
            if state.members.values().any(|m| m.email.as_ref() == Some(email)) {
                return Err(DomainError::new(
                    ErrorCode::DuplicateEmail,
                    format!("Email {} already registered", email),
                )
                .with_detail("email", email.as_str()));
            }
        }

        state.last_member_id += 1;
        let member = member.into_member(MemberId::from_raw(state.last_member_id));
        state.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>, DomainError> {
        let state = self.state.read().await;
        Ok(state.members.values().find(|m| &m.name == name).cloned())
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>, DomainError> {
        Ok(self.state.read().await.members.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Member>, DomainError> {
        let state = self.state.read().await;
        let mut members: Vec<Member> = state.members.values().cloned().collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn open_session(
        &self,
        member_id: MemberId,
        checked_in_at: Timestamp,
    ) -> Result<Session, DomainError> {
        let mut state = self.state.write().await;
        state.member(member_id)?;

        state.last_session_id += 1;
        let session = Session::open(
            SessionId::from_raw(state.last_session_id),
            member_id,
            checked_in_at,
        );
        state.sessions.push(session.clone());
        Ok(session)
    }

    async fn close_session(
        &self,
        member_id: MemberId,
        checked_out_at: Timestamp,
    ) -> Result<Session, DomainError> {
        let mut state = self.state.write().await;
        let name = state.member(member_id)?.name.clone();

        let index = state.open_session_index(member_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::NoActiveSession,
                format!("{} has no open session", name),
            )
            .with_detail("name", name.as_str())
        })?;

        let session = &mut state.sessions[index];
        session.close(checked_out_at)?;
        Ok(session.clone())
    }

    async fn find_open_session(&self, member_id: MemberId) -> Result<Option<Session>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .open_session_index(member_id)
            .map(|index| state.sessions[index].clone()))
    }

    async fn active_sessions(&self) -> Result<Vec<ActiveSession>, DomainError> {
        let state = self.state.read().await;
        let mut open: Vec<&Session> = state.sessions.iter().filter(|s| s.is_open()).collect();
        open.sort_by_key(|s| (s.checked_in_at, s.id));

        open.into_iter()
            .map(|s| {
                Ok(ActiveSession {
                    member: state.member(s.member_id)?.clone(),
                    session_id: s.id,
                    checked_in_at: s.checked_in_at,
                })
            })
            .collect()
    }

    async fn member_stats(&self, member_id: MemberId) -> Result<MemberStats, DomainError> {
        let state = self.state.read().await;
        state.member(member_id)?;
        Ok(MemberStats::from_sessions(
            state.sessions.iter().filter(|s| s.member_id == member_id),
        ))
    }

    async fn sessions_for_member(&self, member_id: MemberId) -> Result<Vec<Session>, DomainError> {
        let state = self.state.read().await;
        let mut sessions: Vec<Session> = state
            .sessions
            .iter()
            .filter(|s| s.member_id == member_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| (b.checked_in_at, b.id).cmp(&(a.checked_in_at, a.id)));
        Ok(sessions)
    }
}
