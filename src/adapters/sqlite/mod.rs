//! SQLite adapters - the durable system of record.

mod connection;
mod member_store;

pub use connection::{connect, init_schema};
pub use member_store::SqliteMemberStore;
