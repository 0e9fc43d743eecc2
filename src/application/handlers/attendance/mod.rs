//! Attendance handlers - Commands and queries for members and gym visits.

mod check_in;
mod check_out;
mod get_profile;
mod get_session_history;
mod list_active_sessions;
mod list_members;
mod register_member;

#[cfg(test)]
mod test_support;

pub use check_in::{CheckInCommand, CheckInHandler, CheckInResult};
pub use check_out::{CheckOutCommand, CheckOutHandler, CheckOutResult};
pub use get_profile::{GetProfileHandler, GetProfileQuery, MemberProfile};
pub use get_session_history::{GetSessionHistoryHandler, GetSessionHistoryQuery, MemberHistory};
pub use list_active_sessions::ListActiveSessionsHandler;
pub use list_members::ListMembersHandler;
pub use register_member::{RegisterMemberCommand, RegisterMemberHandler, RegisterMemberResult};
