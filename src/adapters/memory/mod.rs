//! In-memory adapters for testing and ephemeral use.

mod in_memory_member_store;

pub use in_memory_member_store::InMemoryMemberStore;
