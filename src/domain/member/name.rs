//! Normalized member name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// A member's name in normalized form.
///
/// Normalization trims surrounding whitespace, upper-cases the first
/// character and lower-cases the rest, so `"  aLICE "` and `"alice"` both
/// become `"Alice"`. Two names identify the same member iff their
/// normalized forms are equal. Normalizing a normalized name is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberName(String);

impl MemberName {
    /// Normalizes raw input into a member name.
    ///
    /// # Errors
    ///
    /// `EmptyField` when the input is empty or whitespace only,
    /// `InvalidFormat` when it contains control characters.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = check(raw.trim())?;
        Ok(Self(capitalize(trimmed)))
    }

    /// Wraps a name that was normalized before it was stored.
    ///
    /// Applies the same checks as [`parse`](Self::parse) but keeps the
    /// text as is.
    pub fn from_normalized(stored: String) -> Result<Self, ValidationError> {
        check(&stored)?;
        Ok(Self(stored))
    }

    /// Returns the normalized string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn check(name: &str) -> Result<&str, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::empty_field("name"));
    }
    if name.chars().any(char::is_control) {
        return Err(ValidationError::invalid_format(
            "name",
            "must not contain control characters",
        ));
    }
    Ok(name)
}

/// Title-style capitalization: only the first character of a multi-letter
/// upper-case expansion stays upper case (`ß` -> `Ss`, not `SS`).
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut head = first.to_uppercase();
    let mut out = String::with_capacity(s.len());
    out.extend(head.next());
    out.extend(head.flat_map(char::to_lowercase));
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MemberName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MemberName> for String {
    fn from(name: MemberName) -> Self {
        name.0
    }
}
