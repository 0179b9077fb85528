pub mod errors;
pub mod ids;
pub mod todo;

pub use errors::ValidationError;
pub use ids::TodoId;
pub use todo::{validate_content, TodoItem, TodoStatus};
