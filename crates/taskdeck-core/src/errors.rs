/// Entity-construction-level failures. Raised by the model, propagated by
/// the repository, and wrapped with context by the service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("content must not be empty or whitespace-only")]
    EmptyContent,
}
