//! Wire representations for the HTTP boundary.
//!
//! Pure mapping between internal items and the JSON the API speaks. The
//! response side is total over any valid item and never fails.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use taskdeck_core::TodoItem;
use taskdeck_service::Statistics;

/// A todo item as rendered on the wire. All fields are strings; dates are
/// ISO-8601 and the status is its display label.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: String,
    pub content: String,
    pub target_date: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TodoResponse {
    pub fn from_item(todo: &TodoItem) -> Self {
        Self {
            id: todo.id.to_string(),
            content: todo.content.clone(),
            target_date: iso8601(&todo.target_date),
            status: todo.status.to_string(),
            created_at: iso8601(&todo.created_at),
            updated_at: iso8601(&todo.updated_at),
        }
    }

    pub fn from_items(todos: &[TodoItem]) -> Vec<Self> {
        todos.iter().map(Self::from_item).collect()
    }
}

/// The four aggregate counts.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl From<Statistics> for StatsResponse {
    fn from(stats: Statistics) -> Self {
        Self {
            total: stats.total,
            scheduled: stats.scheduled,
            in_progress: stats.in_progress,
            completed: stats.completed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub content: String,
    pub target_date: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    pub content: Option<String>,
    pub target_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<String>,
}

fn iso8601(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parse a date-time token. RFC 3339 is accepted as-is; an offset-less
/// ISO-8601 value (with or without a time component) is interpreted as UTC.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("invalid date-time: {raw}"))
}
