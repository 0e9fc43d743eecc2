//! GetProfileHandler - Query handler for a member's profile and statistics.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::attendance::{AttendanceError, MemberStats};
use crate::domain::member::{Member, MemberName};
use crate::ports::MemberStore;

/// Query for a member profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub name: String,
}

/// A member together with their visit statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberProfile {
    pub member: Member,
    pub stats: MemberStats,
}

/// Handler for profile lookups.
pub struct GetProfileHandler {
    store: Arc<dyn MemberStore>,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<MemberProfile, AttendanceError> {
        let name = MemberName::parse(&query.name)?;

        let member = self
            .store
            .find_by_name(&name)
            .await?
            .ok_or_else(|| AttendanceError::member_not_found(name.as_str()))?;

        let stats = self.store.member_stats(member.id).await?;
        tracing::debug!(member_id = %member.id, total_visits = stats.total_visits, "Profile loaded");

        Ok(MemberProfile { member, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn query(name: &str) -> GetProfileQuery {
        GetProfileQuery {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_member_with_stats() {
        let store = store();
        let alice = seed_member(&store, "alice").await;
        store.open_session(alice.id, start_time()).await.unwrap();
        store
            .close_session(alice.id, start_time().plus_minutes(45))
            .await
            .unwrap();

        let profile = GetProfileHandler::new(store)
            .handle(query("Alice"))
            .await
            .unwrap();

        assert_eq!(profile.member, alice);
        assert_eq!(profile.stats.total_visits, 1);
        assert_eq!(profile.stats.total_duration_minutes, 45);
        assert_eq!(profile.stats.last_visit, Some(start_time()));
    }

    #[tokio::test]
    async fn member_without_visits_has_empty_stats() {
        let store = store();
        seed_member(&store, "alice").await;

        let profile = GetProfileHandler::new(store)
            .handle(query("alice"))
            .await
            .unwrap();

        assert_eq!(profile.stats, MemberStats::default());
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let err = GetProfileHandler::new(store())
            .handle(query("zed"))
            .await
            .unwrap_err();

        assert_eq!(err, AttendanceError::member_not_found("Zed"));
    }

    #[tokio::test]
    async fn store_failure_is_storage_error() {
        let err = GetProfileHandler::new(failing_store())
            .handle(query("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, AttendanceError::Storage(_)));
    }
}
