use std::sync::Arc;

use parking_lot::Mutex;

use crate::repository::TodoRepository;

/// Cheaply clonable shared handle to the repository.
///
/// A single mutex guards the map-and-order pair, so when handlers run on a
/// multi-threaded runtime the two structures can never be observed out of
/// lockstep. Closures must not block or perform I/O while holding the lock;
/// repository operations are all CPU-bound and O(n) at worst.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<TodoRepository>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a closure against the repository under the store lock.
    pub fn with_repo<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut TodoRepository) -> T,
    {
        let mut repo = self.inner.lock();
        f(&mut repo)
    }
}
