//! Cooperative cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag, polled by the attack loop once per candidate
///
/// Cancellation is cooperative, not preemptive: after `cancel()` the loop
/// still finishes the candidate it is on, so the worst-case latency is one
/// candidate's generation plus one verify call. For adaptive hashes that
/// can be tens of milliseconds; this is intrinsic, not a bug.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the attack to stop at its next checkpoint
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
