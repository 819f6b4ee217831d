//! Newtype wrappers for semantic identifiers
//!
//! These types prevent mixing up the different numeric ids flowing through the
//! pipeline (form vs. entry vs. field vs. user) and give the `"3.2"`-style
//! entry input keys a real type instead of bare strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a form definition.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u32);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FormId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a submitted entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of a single field within a form.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Identifier of the user who created an entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A key into an entry's value map.
///
/// Multi-part fields store their components under dotted keys (`"3.2"` is the
/// second input of field 3); simple fields use the bare field id (`"3"`).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputKey(String);

impl InputKey {
    /// Key for a simple, single-input field.
    pub fn field(id: FieldId) -> Self {
        Self(id.to_string())
    }

    /// Key for one sub-input of a multi-part field.
    pub fn input(id: FieldId, part: u32) -> Self {
        Self(format!("{id}.{part}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The field id portion of the key (`"3.2"` → field 3).
    pub fn field_id(&self) -> Option<FieldId> {
        let head = self.0.split('.').next()?;
        head.parse().ok().map(FieldId)
    }

    /// The sub-input portion of the key (`"3.2"` → 2), `None` for bare keys.
    pub fn part(&self) -> Option<u32> {
        self.0.split_once('.')?.1.parse().ok()
    }
}

impl From<String> for InputKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for InputKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for InputKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
