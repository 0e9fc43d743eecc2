//! RegisterMemberHandler - Command handler for adding members.
//!
//! Registration is idempotent: registering a name that already exists
//! returns the existing member untouched.

use std::sync::Arc;

use crate::domain::attendance::AttendanceError;
use crate::domain::member::{Email, Member, MemberName, NewMember, Phone};
use crate::ports::{Clock, MemberStore};

/// Command to register a member.
#[derive(Debug, Clone, Default)]
pub struct RegisterMemberCommand {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl RegisterMemberCommand {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Result of registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterMemberResult {
    pub member: Member,
    /// `false` when the name was already registered.
    pub created: bool,
}

/// Handler for registering members.
pub struct RegisterMemberHandler {
    store: Arc<dyn MemberStore>,
    clock: Arc<dyn Clock>,
}

impl RegisterMemberHandler {
    pub fn new(store: Arc<dyn MemberStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        cmd: RegisterMemberCommand,
    ) -> Result<RegisterMemberResult, AttendanceError> {
        // 1. Validate all input up front
        let name = MemberName::parse(&cmd.name)?;
        let email = Email::parse_optional(cmd.email.as_deref())?;
        let phone = Phone::parse_optional(cmd.phone.as_deref())?;

        // 2. Existing name wins
        if let Some(existing) = self.store.find_by_name(&name).await? {
            tracing::debug!(member_id = %existing.id, name = %existing.name, "Member already registered");
            return Ok(RegisterMemberResult {
                member: existing,
                created: false,
            });
        }

        // 3. Create
        let new_member = NewMember::named(name, self.clock.today()).with_contact(email, phone);
        let member = self.store.add_member(new_member).await?;

        tracing::info!(member_id = %member.id, name = %member.name, "Member registered");

        Ok(RegisterMemberResult {
            member,
            created: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn handler(store: Arc<dyn MemberStore>) -> RegisterMemberHandler {
        RegisterMemberHandler::new(store, clock())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Success Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn registers_new_member_with_normalized_name() {
        let store = store();
        let result = handler(store.clone())
            .handle(RegisterMemberCommand::named("  alice "))
            .await
            .unwrap();

        assert!(result.created);
        assert_eq!(result.member.name.as_str(), "Alice");
        assert_eq!(result.member.join_date, start_time().date());
        assert_eq!(store.member_count().await, 1);
    }

    #[tokio::test]
    async fn stores_contact_details() {
        let result = handler(store())
            .handle(RegisterMemberCommand {
                name: "bob".to_string(),
                email: Some("Bob@Gym.Test".to_string()),
                phone: Some(" 555-0100 ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.member.email.unwrap().as_str(), "bob@gym.test");
        assert_eq!(result.member.phone.unwrap().as_str(), "555-0100");
    }

    #[tokio::test]
    async fn blank_contact_details_are_absent() {
        let result = handler(store())
            .handle(RegisterMemberCommand {
                name: "bob".to_string(),
                email: Some("   ".to_string()),
                phone: Some(String::new()),
            })
            .await
            .unwrap();

        assert!(result.member.email.is_none());
        assert!(result.member.phone.is_none());
    }

    #[tokio::test]
    async fn second_registration_returns_existing_member() {
        let store = store();
        let handler = handler(store.clone());
        let first = handler.handle(RegisterMemberCommand::named("alice")).await.unwrap();

        let second = handler.handle(RegisterMemberCommand::named("ALICE")).await.unwrap();

        assert!(!second.created);
        assert_eq!(second.member.id, first.member.id);
        assert_eq!(store.member_count().await, 1);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Failure Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let err = handler(store())
            .handle(RegisterMemberCommand::named("   "))
            .await
            .unwrap_err();

        assert_eq!(err, AttendanceError::empty_input("name"));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let err = handler(store())
            .handle(RegisterMemberCommand {
                name: "alice".to_string(),
                email: Some("not-an-email".to_string()),
                phone: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidFormat);
    }

    #[tokio::test]
    async fn email_collision_is_duplicate_email() {
        let store = store();
        let handler = handler(store.clone());
        handler
            .handle(RegisterMemberCommand {
                name: "alice".to_string(),
                email: Some("shared@gym.test".to_string()),
                phone: None,
            })
            .await
            .unwrap();

        let err = handler
            .handle(RegisterMemberCommand {
                name: "bob".to_string(),
                email: Some("shared@gym.test".to_string()),
                phone: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err, AttendanceError::duplicate_email("shared@gym.test"));
    }

    #[tokio::test]
    async fn store_failure_is_storage_error() {
        let err = handler(failing_store())
            .handle(RegisterMemberCommand::named("alice"))
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(err.code(), ErrorCode::StorageError);
    }
}
