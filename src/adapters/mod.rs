//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Durable member store
//! - `memory` - In-memory member store
//! - `journal` - Flat-file and in-memory check-in logs
//! - `clock` - System and manual clocks

pub mod clock;
pub mod journal;
pub mod memory;
pub mod sqlite;

pub use clock::{ManualClock, SystemClock};
pub use journal::{FileCheckInLog, InMemoryCheckInLog};
pub use memory::InMemoryMemberStore;
pub use sqlite::SqliteMemberStore;
