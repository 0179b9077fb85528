use taskdeck_core::{TodoId, ValidationError};

/// Domain-level errors raised toward the boundary. The repository itself
/// never raises "not found": an id-miss becomes `TodoNotFound` here, and
/// entity validation failures are re-signaled as `InvalidTodo` with the
/// underlying reason attached.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("todo not found: {0}")]
    TodoNotFound(TodoId),

    #[error("invalid todo: {0}")]
    InvalidTodo(#[from] ValidationError),
}
