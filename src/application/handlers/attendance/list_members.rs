//! ListMembersHandler - Query handler for the member roster.

use std::sync::Arc;

use crate::domain::attendance::AttendanceError;
use crate::domain::member::Member;
use crate::ports::MemberStore;

/// Handler listing all members by name.
pub struct ListMembersHandler {
    store: Arc<dyn MemberStore>,
}

impl ListMembersHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Member>, AttendanceError> {
        Ok(self.store.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[tokio::test]
    async fn lists_members_by_name() {
        let store = store();
        seed_member(&store, "zoe").await;
        seed_member(&store, "adam").await;

        let members = ListMembersHandler::new(store).handle().await.unwrap();

        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Adam", "Zoe"]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let members = ListMembersHandler::new(store()).handle().await.unwrap();
        assert!(members.is_empty());
    }

    #[tokio::test]
    async fn store_failure_is_storage_error() {
        let result = ListMembersHandler::new(failing_store()).handle().await;
        assert!(matches!(result, Err(AttendanceError::Storage(_))));
    }
}
