use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use taskdeck_core::{validate_content, TodoId, TodoItem, TodoStatus, ValidationError};

/// In-memory todo storage: a map keyed by id for O(1) lookup plus an
/// explicit order sequence that defines iteration order. Every mutation
/// goes through one path that keeps the two structures in lockstep: each
/// live id appears exactly once in the sequence, and the sequence never
/// carries a dead id.
///
/// Absence is signaled with `Option`/`bool`, never an error; deciding what
/// a miss means is the service's job.
#[derive(Debug, Default)]
pub struct TodoRepository {
    todos: HashMap<TodoId, TodoItem>,
    order: Vec<TodoId>,
}

impl TodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new item and append its id to the order sequence.
    pub fn create(
        &mut self,
        content: &str,
        target_date: DateTime<Utc>,
        status: TodoStatus,
    ) -> Result<TodoItem, ValidationError> {
        let todo = TodoItem::new(content, target_date, status)?;
        self.order.push(todo.id.clone());
        self.todos.insert(todo.id.clone(), todo.clone());
        Ok(todo)
    }

    /// Look up an item by id.
    pub fn get(&self, id: &TodoId) -> Option<TodoItem> {
        self.todos.get(id).cloned()
    }

    /// All items, in order-sequence order.
    pub fn get_all(&self) -> Vec<TodoItem> {
        self.order
            .iter()
            .filter_map(|id| self.todos.get(id))
            .cloned()
            .collect()
    }

    /// Items with the given status, order-sequence order preserved.
    pub fn get_by_status(&self, status: TodoStatus) -> Vec<TodoItem> {
        self.order
            .iter()
            .filter_map(|id| self.todos.get(id))
            .filter(|todo| todo.status == status)
            .cloned()
            .collect()
    }

    /// Apply a partial update: provided fields replace the stored values,
    /// omitted fields are untouched. Content is validated before anything
    /// is written, so a rejected update leaves the item unmodified.
    /// `Ok(None)` means the id is unknown.
    pub fn update(
        &mut self,
        id: &TodoId,
        content: Option<&str>,
        target_date: Option<DateTime<Utc>>,
        status: Option<TodoStatus>,
    ) -> Result<Option<TodoItem>, ValidationError> {
        let content = content.map(validate_content).transpose()?;
        let Some(todo) = self.todos.get_mut(id) else {
            return Ok(None);
        };
        if let Some(content) = content {
            todo.content = content;
        }
        if let Some(target_date) = target_date {
            todo.target_date = target_date;
        }
        if let Some(status) = status {
            todo.status = status;
        }
        todo.touch();
        Ok(Some(todo.clone()))
    }

    /// Remove an item and its order entry. Returns whether anything was
    /// removed.
    pub fn delete(&mut self, id: &TodoId) -> bool {
        if self.todos.remove(id).is_none() {
            return false;
        }
        self.order.retain(|entry| entry != id);
        true
    }

    /// Empty the store and the order sequence.
    pub fn clear_all(&mut self) {
        self.todos.clear();
        self.order.clear();
    }

    /// Replace the order sequence. Ids that reference no live item are
    /// dropped, duplicates collapse to their first occurrence, and live
    /// items not mentioned are appended after in their prior relative
    /// order; reordering never loses an item.
    pub fn set_order(&mut self, new_order: &[TodoId]) {
        let mut next = Vec::with_capacity(self.todos.len());
        let mut seen = HashSet::with_capacity(self.todos.len());
        for id in new_order {
            if self.todos.contains_key(id) && seen.insert(id.clone()) {
                next.push(id.clone());
            }
        }
        for id in &self.order {
            if !seen.contains(id) {
                next.push(id.clone());
            }
        }
        self.order = next;
    }

    /// A copy of the current order sequence.
    pub fn order(&self) -> Vec<TodoId> {
        self.order.clone()
    }

    /// Stable ascending sort of the order sequence by target date; ties
    /// keep their prior relative order. Ids without a stored item (cannot
    /// happen while the lockstep invariant holds) sort last.
    pub fn sort_by_date(&mut self) {
        let todos = &self.todos;
        self.order.sort_by_key(|id| match todos.get(id) {
            Some(todo) => (0u8, todo.target_date),
            None => (1u8, DateTime::<Utc>::MAX_UTC),
        });
    }

    /// Number of live items.
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
