use std::sync::{
    Arc, LazyLock,
    atomic::{AtomicU64, Ordering},
};

use super::{Error, MAX_SAFE_INTEGER, RequestId, Result};

static PROCESS_COUNTER: LazyLock<IdCounter> = LazyLock::new(IdCounter::new);

/// Source of request ids.
///
/// Clones share the same sequence. Ids are strictly increasing with no gaps
/// and are never reused for the lifetime of the counter.
#[derive(Debug, Clone)]
pub struct IdCounter(Arc<AtomicU64>);

impl IdCounter {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A counter whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self(Arc::new(AtomicU64::new(first)))
    }

    /// The counter shared by every client that asks for it in this process.
    pub fn process() -> Self {
        PROCESS_COUNTER.clone()
    }

    pub fn next(&self) -> Result<RequestId> {
        self.0
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| {
                (id <= MAX_SAFE_INTEGER).then(|| id + 1)
            })
            .map(RequestId)
            .map_err(|_| Error::RequestIdOverflow)
    }

    /// The id the next call will receive.
    pub fn peek(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}
