//! Check-in log adapters.

mod file_check_in_log;
mod in_memory_check_in_log;

pub use file_check_in_log::FileCheckInLog;
pub use in_memory_check_in_log::InMemoryCheckInLog;
