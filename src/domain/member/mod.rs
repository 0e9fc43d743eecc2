//! Member domain module.
//!
//! Registered gym members and the value objects that identify them.
//!
//! # Module Structure
//!
//! - `aggregate` - Member entity and the NewMember creation input
//! - `name` - MemberName normalization (identity key)
//! - `contact` - Optional Email and Phone

mod aggregate;
mod contact;
mod name;

pub use aggregate::{Member, NewMember};
pub use contact::{Email, Phone};
pub use name::MemberName;
