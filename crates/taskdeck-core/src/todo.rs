use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::ids::TodoId;

/// Current state of a todo item. A closed set; any status may change to
/// any other, there is no enforced workflow ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl std::fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TodoStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown todo status: {other}")),
        }
    }
}

/// A single todo item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub content: String,
    pub target_date: DateTime<Utc>,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Trim and validate raw content. The stored value is the trimmed one, so
/// normalization and validation cannot drift between create and update.
pub fn validate_content(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(trimmed.to_owned())
}

impl TodoItem {
    /// Construct a new item with a fresh id. Both timestamps are taken from
    /// a single "now" sample, so `created_at == updated_at` at creation.
    pub fn new(
        content: &str,
        target_date: DateTime<Utc>,
        status: TodoStatus,
    ) -> Result<Self, ValidationError> {
        let content = validate_content(content)?;
        let now = Utc::now();
        Ok(Self {
            id: TodoId::new(),
            content,
            target_date,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn target() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn new_item_trims_content() {
        let todo = TodoItem::new("  write the report  ", target(), TodoStatus::Scheduled).unwrap();
        assert_eq!(todo.content, "write the report");
        assert_eq!(todo.target_date, target());
    }

    #[test]
    fn new_item_timestamps_start_equal() {
        let todo = TodoItem::new("write the report", target(), TodoStatus::Scheduled).unwrap();
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn empty_content_rejected() {
        let err = TodoItem::new("", target(), TodoStatus::Scheduled).unwrap_err();
        assert_eq!(err, ValidationError::EmptyContent);
    }

    #[test]
    fn whitespace_content_rejected() {
        let err = TodoItem::new("   \t\n", target(), TodoStatus::Scheduled).unwrap_err();
        assert_eq!(err, ValidationError::EmptyContent);
    }

    #[test]
    fn touch_never_moves_updated_at_before_created_at() {
        let mut todo = TodoItem::new("write the report", target(), TodoStatus::Scheduled).unwrap();
        todo.touch();
        assert!(todo.updated_at >= todo.created_at);
    }

    #[test]
    fn default_status_is_scheduled() {
        assert_eq!(TodoStatus::default(), TodoStatus::Scheduled);
    }

    #[test]
    fn status_display_and_from_str_roundtrip() {
        for status in [
            TodoStatus::Scheduled,
            TodoStatus::InProgress,
            TodoStatus::Completed,
        ] {
            let label = status.to_string();
            let parsed: TodoStatus = label.parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn status_unknown_token_rejected() {
        assert!("done".parse::<TodoStatus>().is_err());
    }

    #[test]
    fn status_serde_uses_snake_case() {
        let json = serde_json::to_string(&TodoStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn item_serde_roundtrip() {
        let todo = TodoItem::new("write the report", target(), TodoStatus::InProgress).unwrap();
        let json = serde_json::to_string(&todo).unwrap();
        let parsed: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, todo.id);
        assert_eq!(parsed.content, todo.content);
        assert_eq!(parsed.target_date, todo.target_date);
        assert_eq!(parsed.status, todo.status);
    }
}
