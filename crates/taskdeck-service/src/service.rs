use chrono::{DateTime, Utc};
use tracing::instrument;

use taskdeck_core::{TodoId, TodoItem, TodoStatus};
use taskdeck_store::Store;

use crate::error::ServiceError;

/// Aggregate counts over the live items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub scheduled: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Domain-level contract over the repository; the only component that
/// raises not-found/invalid errors toward the boundary.
#[derive(Clone)]
pub struct TodoService {
    store: Store,
}

impl TodoService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a new todo.
    #[instrument(skip(self, content))]
    pub fn create_todo(
        &self,
        content: &str,
        target_date: DateTime<Utc>,
        status: TodoStatus,
    ) -> Result<TodoItem, ServiceError> {
        let todo = self
            .store
            .with_repo(|repo| repo.create(content, target_date, status))?;
        Ok(todo)
    }

    /// All todos, in the repository's order-sequence order.
    pub fn get_all_todos(&self) -> Vec<TodoItem> {
        self.store.with_repo(|repo| repo.get_all())
    }

    /// Look up a todo; an id-miss is an error at this level.
    #[instrument(skip(self), fields(todo_id = %id))]
    pub fn get_todo_by_id(&self, id: &TodoId) -> Result<TodoItem, ServiceError> {
        self.store
            .with_repo(|repo| repo.get(id))
            .ok_or_else(|| ServiceError::TodoNotFound(id.clone()))
    }

    /// Todos with the given status, order preserved.
    pub fn get_todos_by_status(&self, status: TodoStatus) -> Vec<TodoItem> {
        self.store.with_repo(|repo| repo.get_by_status(status))
    }

    /// Apply a partial update.
    #[instrument(skip(self, content), fields(todo_id = %id))]
    pub fn update_todo(
        &self,
        id: &TodoId,
        content: Option<&str>,
        target_date: Option<DateTime<Utc>>,
        status: Option<TodoStatus>,
    ) -> Result<TodoItem, ServiceError> {
        self.store
            .with_repo(|repo| repo.update(id, content, target_date, status))?
            .ok_or_else(|| ServiceError::TodoNotFound(id.clone()))
    }

    /// Delete a todo. `Ok(())` is the success indicator; a miss is always
    /// `TodoNotFound`, never a quiet false.
    #[instrument(skip(self), fields(todo_id = %id))]
    pub fn delete_todo(&self, id: &TodoId) -> Result<(), ServiceError> {
        if !self.store.with_repo(|repo| repo.delete(id)) {
            return Err(ServiceError::TodoNotFound(id.clone()));
        }
        Ok(())
    }

    /// Counts derived from the live items at call time, never cached.
    pub fn get_statistics(&self) -> Statistics {
        Statistics {
            total: self.get_all_todos().len(),
            scheduled: self.get_todos_by_status(TodoStatus::Scheduled).len(),
            in_progress: self.get_todos_by_status(TodoStatus::InProgress).len(),
            completed: self.get_todos_by_status(TodoStatus::Completed).len(),
        }
    }

    /// Replace the display order with the supplied id list.
    #[instrument(skip_all)]
    pub fn reorder_todos(&self, order: &[TodoId]) {
        self.store.with_repo(|repo| repo.set_order(order));
    }

    /// Sort the order sequence by target date and return the fresh list.
    #[instrument(skip(self))]
    pub fn sort_by_date(&self) -> Vec<TodoItem> {
        self.store.with_repo(|repo| {
            repo.sort_by_date();
            repo.get_all()
        })
    }

    /// Remove every todo.
    pub fn clear_all_todos(&self) {
        self.store.with_repo(|repo| repo.clear_all());
    }

    /// Number of live todos.
    pub fn get_todo_count(&self) -> usize {
        self.store.with_repo(|repo| repo.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, day, 12, 0, 0).unwrap()
    }

    fn service() -> TodoService {
        TodoService::new(Store::new())
    }

    #[test]
    fn create_and_get_by_id() {
        let svc = service();
        let created = svc
            .create_todo("  plan the offsite  ", date(7), TodoStatus::Scheduled)
            .unwrap();

        let fetched = svc.get_todo_by_id(&created.id).unwrap();
        assert_eq!(fetched.content, "plan the offsite");
        assert_eq!(fetched.status, TodoStatus::Scheduled);
    }

    #[test]
    fn create_with_blank_content_is_invalid_todo() {
        let svc = service();
        let err = svc.create_todo("   ", date(1), TodoStatus::Scheduled).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTodo(_)));
        assert_eq!(svc.get_todo_count(), 0);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.get_todo_by_id(&TodoId::new()).unwrap_err();
        assert!(matches!(err, ServiceError::TodoNotFound(_)));
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let svc = service();
        let err = svc
            .update_todo(&TodoId::new(), Some("new"), None, None)
            .unwrap_err();
        assert!(matches!(err, ServiceError::TodoNotFound(_)));
    }

    #[test]
    fn update_with_blank_content_is_invalid_todo() {
        let svc = service();
        let created = svc.create_todo("keep me", date(1), TodoStatus::Scheduled).unwrap();
        let err = svc
            .update_todo(&created.id, Some("  "), None, None)
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidTodo(_)));
        assert_eq!(svc.get_todo_by_id(&created.id).unwrap().content, "keep me");
    }

    #[test]
    fn update_trims_content() {
        let svc = service();
        let created = svc.create_todo("old", date(1), TodoStatus::Scheduled).unwrap();
        let updated = svc.update_todo(&created.id, Some("  x  "), None, None).unwrap();
        assert_eq!(updated.content, "x");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create_todo("ephemeral", date(1), TodoStatus::Scheduled).unwrap();
        svc.delete_todo(&created.id).unwrap();

        assert!(matches!(
            svc.get_todo_by_id(&created.id),
            Err(ServiceError::TodoNotFound(_))
        ));
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let svc = service();
        assert!(matches!(
            svc.delete_todo(&TodoId::new()),
            Err(ServiceError::TodoNotFound(_))
        ));
    }

    #[test]
    fn statistics_count_by_status() {
        let svc = service();
        svc.create_todo("a", date(1), TodoStatus::Scheduled).unwrap();
        svc.create_todo("b", date(2), TodoStatus::Scheduled).unwrap();
        svc.create_todo("c", date(3), TodoStatus::InProgress).unwrap();
        svc.create_todo("d", date(4), TodoStatus::Completed).unwrap();

        assert_eq!(
            svc.get_statistics(),
            Statistics {
                total: 4,
                scheduled: 2,
                in_progress: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn reorder_changes_get_all_order() {
        let svc = service();
        let a = svc.create_todo("a", date(1), TodoStatus::Scheduled).unwrap();
        let b = svc.create_todo("b", date(2), TodoStatus::Scheduled).unwrap();
        let c = svc.create_todo("c", date(3), TodoStatus::Scheduled).unwrap();

        svc.reorder_todos(&[c.id.clone(), a.id.clone(), b.id.clone()]);

        let all: Vec<TodoId> = svc.get_all_todos().into_iter().map(|t| t.id).collect();
        assert_eq!(all, vec![c.id, a.id, b.id]);
    }

    #[test]
    fn sort_by_date_returns_sorted_list() {
        let svc = service();
        svc.create_todo("late", date(20), TodoStatus::Scheduled).unwrap();
        svc.create_todo("early", date(2), TodoStatus::Scheduled).unwrap();

        let sorted = svc.sort_by_date();
        assert_eq!(sorted[0].content, "early");
        assert_eq!(sorted[1].content, "late");

        // The sort sticks: a later plain read sees the same order.
        let all = svc.get_all_todos();
        assert_eq!(all[0].content, "early");
    }

    #[test]
    fn clear_all_and_count() {
        let svc = service();
        svc.create_todo("a", date(1), TodoStatus::Scheduled).unwrap();
        svc.create_todo("b", date(2), TodoStatus::Scheduled).unwrap();
        assert_eq!(svc.get_todo_count(), 2);

        svc.clear_all_todos();
        assert_eq!(svc.get_todo_count(), 0);
        assert!(svc.get_all_todos().is_empty());
    }
}
