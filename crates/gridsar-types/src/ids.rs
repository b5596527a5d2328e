//! Identifier wrapper for engine-issued object ids.
//!
//! The host engine names every entity -- agents, victims, obstacles, doors,
//! area tiles -- with an opaque string in a single namespace (for example
//! `human`, `critical_victim_3`, `stone_2`, `door_4`). The wrapper keeps
//! those strings from mixing with other string-typed data and carries the
//! substring queries the category rules are built on.

use serde::{Deserialize, Serialize};

/// An engine-issued object identifier.
///
/// Agents share the namespace with every other world object, so the
/// controlled agent's own id is an [`ObjectId`] like any other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an engine-issued identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier contains the given marker substring.
    ///
    /// Category rules (victim severity, obstacle kind) are keyed on
    /// markers embedded in the id by the scenario builder.
    pub fn has_marker(&self, marker: &str) -> bool {
        self.0.contains(marker)
    }
}

impl core::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ObjectId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_lookup() {
        let id = ObjectId::from("critical_victim_3");
        assert!(id.has_marker("critical"));
        assert!(!id.has_marker("mild"));
    }

    #[test]
    fn display_roundtrip() {
        let id = ObjectId::new("door_4");
        assert_eq!(id.to_string(), "door_4");
        assert_eq!(id.as_str(), "door_4");
    }
}
