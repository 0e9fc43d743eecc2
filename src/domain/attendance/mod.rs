//! Attendance domain module.
//!
//! Gym visits (sessions), their lifecycle, and the statistics derived
//! from them.
//!
//! # Module Structure
//!
//! - `session` - Session entity and duration arithmetic
//! - `status` - SessionStatus state machine (Open -> Closed)
//! - `summary` - MemberStats and ActiveSession read models
//! - `policy` - RepeatCheckInPolicy
//! - `errors` - AttendanceError

mod errors;
mod policy;
mod session;
mod status;
mod summary;

pub use errors::AttendanceError;
pub use policy::RepeatCheckInPolicy;
pub use session::{visit_duration_minutes, Session};
pub use status::SessionStatus;
pub use summary::{ActiveSession, MemberStats};
