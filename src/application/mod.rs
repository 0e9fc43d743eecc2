//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! [`AttendanceService`] bundles them for callers that work with member names.

mod attendance_service;
pub mod handlers;

pub use attendance_service::AttendanceService;
pub use handlers::{
    CheckInResult, CheckOutResult, MemberHistory, MemberProfile, RegisterMemberResult,
};
