//! Cooperative cancellation flag shared between a caller and a running job.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Externally-settable cancellation signal, polled at checkpoints.
///
/// Cancellation is cooperative: an in-flight directory call is allowed to
/// finish, but its result is discarded at the next checkpoint.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
