use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier for a todo item: `todo_<uuid-v7>`.
///
/// Generated once at creation, never reassigned. The v7 payload makes raw
/// ids creation-time monotonic, but nothing orders by them; the
/// repository's order sequence alone defines iteration order.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new() -> Self {
        Self(format!("todo_{}", Uuid::now_v7()))
    }

    pub fn from_raw(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TodoId {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl AsRef<str> for TodoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_has_prefix() {
        let id = TodoId::new();
        assert!(id.as_str().starts_with("todo_"), "got: {id}");
    }

    #[test]
    fn ids_are_unique() {
        let a = TodoId::new();
        let b = TodoId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn display_and_from_str_roundtrip() {
        let id = TodoId::new();
        let s = id.to_string();
        let parsed: TodoId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serde_roundtrip() {
        let id = TodoId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: TodoId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_raw_preserves_value() {
        let id = TodoId::from_raw("custom-id-123");
        assert_eq!(id.as_str(), "custom-id-123");
    }
}
