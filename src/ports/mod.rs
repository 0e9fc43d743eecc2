//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `MemberStore` - Members and sessions (the system of record)
//! - `CheckInLog` - Append-only flat-file mirror of check-ins
//! - `Clock` - Current time

mod check_in_log;
mod clock;
mod member_store;

pub use check_in_log::{CheckInEntry, CheckInLog};
pub use clock::Clock;
pub use member_store::MemberStore;
