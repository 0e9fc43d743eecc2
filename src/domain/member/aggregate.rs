//! Member entity.
//!
//! A member is created once, by explicit registration or implicitly by a
//! first check-in, and is never modified or deleted afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::MemberId;

use super::{Email, MemberName, Phone};

/// A registered gym member.
///
/// # Invariants
///
/// - `id` is unique and stable
/// - `name` is unique across the store (normalized form)
/// - `email`, when present, is unique across the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    /// Day the member was created (UTC).
    pub join_date: NaiveDate,
}

/// Data needed to create a member. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: MemberName,
    pub email: Option<Email>,
    pub phone: Option<Phone>,
    pub joined_on: NaiveDate,
}

impl NewMember {
    /// A member with a name only, as created by auto-registration.
    pub fn named(name: MemberName, joined_on: NaiveDate) -> Self {
        Self {
            name,
            email: None,
            phone: None,
            joined_on,
        }
    }

    /// Attaches contact details.
    pub fn with_contact(mut self, email: Option<Email>, phone: Option<Phone>) -> Self {
        self.email = email;
        self.phone = phone;
        self
    }

    /// Materializes the member under the id the store assigned.
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            join_date: self.joined_on,
        }
    }
}
