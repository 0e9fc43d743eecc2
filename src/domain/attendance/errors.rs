//! Attendance-specific error types.
//!
//! Every variant is recoverable at the caller boundary: the caller reports
//! the failure and asks again. `Storage` aborts the current operation only.
//!
//! | Error | Code |
//! |-------|------|
//! | EmptyInput | EMPTY_FIELD |
//! | InvalidInput | INVALID_FORMAT |
//! | DuplicateName | DUPLICATE_NAME |
//! | DuplicateEmail | DUPLICATE_EMAIL |
//! | MemberNotFound | MEMBER_NOT_FOUND |
//! | NoActiveSession | NO_ACTIVE_SESSION |
//! | AlreadyCheckedIn | SESSION_ALREADY_OPEN |
//! | Storage | STORAGE_ERROR |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors returned by attendance workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// A required input was blank.
    EmptyInput { field: String },

    /// An input was present but malformed.
    InvalidInput { field: String, reason: String },

    /// Another member already has this normalized name.
    DuplicateName(String),

    /// Another member already uses this email.
    DuplicateEmail(String),

    /// No member with this name (or id).
    MemberNotFound(String),

    /// The member has no open session to check out of.
    NoActiveSession(String),

    /// The member already has an open session.
    AlreadyCheckedIn(String),

    /// Persistence failed.
    Storage(String),
}

impl AttendanceError {
    pub fn empty_input(field: impl Into<String>) -> Self {
        AttendanceError::EmptyInput { field: field.into() }
    }

    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AttendanceError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        AttendanceError::DuplicateName(name.into())
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        AttendanceError::DuplicateEmail(email.into())
    }

    pub fn member_not_found(name: impl Into<String>) -> Self {
        AttendanceError::MemberNotFound(name.into())
    }

    pub fn no_active_session(name: impl Into<String>) -> Self {
        AttendanceError::NoActiveSession(name.into())
    }

    pub fn already_checked_in(name: impl Into<String>) -> Self {
        AttendanceError::AlreadyCheckedIn(name.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        AttendanceError::Storage(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AttendanceError::EmptyInput { .. } => ErrorCode::EmptyField,
            AttendanceError::InvalidInput { .. } => ErrorCode::InvalidFormat,
            AttendanceError::DuplicateName(_) => ErrorCode::DuplicateName,
            AttendanceError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            AttendanceError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            AttendanceError::NoActiveSession(_) => ErrorCode::NoActiveSession,
            AttendanceError::AlreadyCheckedIn(_) => ErrorCode::SessionAlreadyOpen,
            AttendanceError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            AttendanceError::EmptyInput { field } => format!("{} cannot be empty", field),
            AttendanceError::InvalidInput { field, reason } => {
                format!("Invalid {}: {}", field, reason)
            }
            AttendanceError::DuplicateName(name) => {
                format!("A member named {} already exists", name)
            }
            AttendanceError::DuplicateEmail(email) => {
                format!("Email {} is already registered", email)
            }
            AttendanceError::MemberNotFound(name) => format!("Member not found: {}", name),
            AttendanceError::NoActiveSession(name) => {
                format!("{} is not checked in", name)
            }
            AttendanceError::AlreadyCheckedIn(name) => {
                format!("{} is already checked in", name)
            }
            AttendanceError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }

    /// Returns true if repeating the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AttendanceError::Storage(_))
    }
}

impl std::fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AttendanceError {}

impl From<ValidationError> for AttendanceError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { field } => AttendanceError::EmptyInput { field },
            ValidationError::InvalidFormat { field, reason } => {
                AttendanceError::InvalidInput { field, reason }
            }
        }
    }
}

impl From<DomainError> for AttendanceError {
    fn from(err: DomainError) -> Self {
        let detail = |key: &str| {
            err.detail(key)
                .map(str::to_string)
                .unwrap_or_else(|| err.message.clone())
        };
        match err.code {
            ErrorCode::EmptyField => AttendanceError::EmptyInput { field: detail("field") },
            ErrorCode::InvalidFormat | ErrorCode::ValidationFailed => AttendanceError::InvalidInput {
                field: detail("field"),
                reason: err.message.clone(),
            },
            ErrorCode::DuplicateName => AttendanceError::DuplicateName(detail("name")),
            ErrorCode::DuplicateEmail => AttendanceError::DuplicateEmail(detail("email")),
            ErrorCode::MemberNotFound => AttendanceError::MemberNotFound(detail("name")),
            ErrorCode::NoActiveSession => AttendanceError::NoActiveSession(detail("name")),
            ErrorCode::SessionAlreadyOpen => AttendanceError::AlreadyCheckedIn(detail("name")),
            ErrorCode::InvalidStateTransition
            | ErrorCode::DatabaseError
            | ErrorCode::StorageError
            | ErrorCode::InternalError => AttendanceError::Storage(err.to_string()),
        }
    }
}

impl From<AttendanceError> for DomainError {
    fn from(err: AttendanceError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================
    // Code Tests
    // ============================================================

    #[test]
    fn each_variant_has_its_code() {
        assert_eq!(AttendanceError::empty_input("name").code(), ErrorCode::EmptyField);
        assert_eq!(AttendanceError::duplicate_name("Alice").code(), ErrorCode::DuplicateName);
        assert_eq!(
            AttendanceError::duplicate_email("a@b.c").code(),
            ErrorCode::DuplicateEmail
        );
        assert_eq!(AttendanceError::member_not_found("Carol").code(), ErrorCode::MemberNotFound);
        assert_eq!(AttendanceError::no_active_session("Bob").code(), ErrorCode::NoActiveSession);
        assert_eq!(
            AttendanceError::already_checked_in("Bob").code(),
            ErrorCode::SessionAlreadyOpen
        );
        assert_eq!(AttendanceError::storage("disk full").code(), ErrorCode::StorageError);
    }

    // ============================================================
    // Message Tests
    // ============================================================

    #[test]
    fn not_found_message_includes_name() {
        let err = AttendanceError::member_not_found("Carol");
        assert_eq!(err.to_string(), "Member not found: Carol");
    }

    #[test]
    fn invalid_input_message_includes_reason() {
        let err = AttendanceError::invalid_input("email", "expected local@domain");
        assert!(err.message().contains("email"));
        assert!(err.message().contains("expected local@domain"));
    }

    // ============================================================
    // Retryable Tests
    // ============================================================

    #[test]
    fn only_storage_is_retryable() {
        assert!(AttendanceError::storage("locked").is_retryable());
        assert!(!AttendanceError::no_active_session("Bob").is_retryable());
        assert!(!AttendanceError::empty_input("name").is_retryable());
    }

    // ============================================================
    // Conversion Tests
    // ============================================================

    #[test]
    fn validation_errors_map_to_input_errors() {
        assert_eq!(
            AttendanceError::from(ValidationError::empty_field("name")),
            AttendanceError::empty_input("name")
        );
        assert_eq!(
            AttendanceError::from(ValidationError::invalid_format("email", "bad")),
            AttendanceError::invalid_input("email", "bad")
        );
    }

    #[test]
    fn domain_error_details_are_preserved() {
        let err = DomainError::new(ErrorCode::DuplicateEmail, "Email taken")
            .with_detail("email", "alice@gym.test");
        assert_eq!(
            AttendanceError::from(err),
            AttendanceError::duplicate_email("alice@gym.test")
        );
    }

    #[test]
    fn domain_error_without_detail_falls_back_to_message() {
        let err = DomainError::new(ErrorCode::NoActiveSession, "No open session");
        assert_eq!(
            AttendanceError::from(err),
            AttendanceError::no_active_session("No open session")
        );
    }

    #[test]
    fn database_errors_become_storage_errors() {
        let err = DomainError::new(ErrorCode::DatabaseError, "connection lost");
        let mapped = AttendanceError::from(err);
        assert!(matches!(mapped, AttendanceError::Storage(ref m) if m.contains("connection lost")));
    }

    #[test]
    fn converts_back_to_domain_error() {
        let err: DomainError = AttendanceError::member_not_found("Dave").into();
        assert_eq!(err.code, ErrorCode::MemberNotFound);
        assert!(err.message.contains("Dave"));
    }
}
