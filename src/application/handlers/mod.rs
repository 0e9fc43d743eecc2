//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod attendance;

pub use attendance::{
    // Commands
    CheckInCommand, CheckInHandler, CheckInResult,
    CheckOutCommand, CheckOutHandler, CheckOutResult,
    RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult,
    // Queries
    GetProfileHandler, GetProfileQuery, MemberProfile,
    GetSessionHistoryHandler, GetSessionHistoryQuery, MemberHistory,
    ListActiveSessionsHandler, ListMembersHandler,
};
