//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `member` - Registered members and their identity rules
//! - `attendance` - Check-in sessions, durations, and visit statistics

pub mod attendance;
pub mod foundation;
pub mod member;
