//! Progress reporting abstractions
//!
//! The attack loop reports through a trait so the core never depends on a
//! specific channel implementation or UI concern. Sinks are invoked
//! synchronously on the attack's own worker context and must not perform
//! unbounded work inline; consumers that render expensively should forward
//! the event to their own scheduler.

use tokio::sync::mpsc;

/// One throttled progress update; ephemeral, never stored
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// Attempts counted so far
    pub attempts: u64,
    /// Total candidate count, -1 when unknown
    pub total: i64,
    /// Candidate or base word in flight when the event fired
    pub sample: String,
}

/// Receiver of throttled progress updates
pub trait ProgressSink: Send + Sync {
    /// Report a progress update
    fn report(&self, event: ProgressEvent);
}

/// Null implementation for when no progress is needed
pub struct NullSink;

impl ProgressSink for NullSink {
    fn report(&self, _event: ProgressEvent) {
        // No-op: discard all progress updates
    }
}

/// Forwards events into a bounded channel
///
/// Uses `try_send` so a slow or absent receiver drops events instead of
/// blocking the attack loop.
pub struct ChannelSink {
    tx: mpsc::Sender<ProgressEvent>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<ProgressEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn report(&self, event: ProgressEvent) {
        let _ = self.tx.try_send(event);
    }
}
