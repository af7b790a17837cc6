//! Mock progress sinks

use passattack_core::progress::{ProgressEvent, ProgressSink};
use std::sync::{Arc, Mutex};

/// Sink that captures every event for later assertions
#[derive(Clone, Default)]
pub struct CollectingSink {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events received so far
    pub fn received(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Snapshot of all events received so far
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressSink for CollectingSink {
    fn report(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_records_events() {
        let sink = CollectingSink::new();
        sink.report(ProgressEvent {
            attempts: 500,
            total: -1,
            sample: "candidate".to_string(),
        });

        assert_eq!(sink.received(), 1);
        assert_eq!(sink.events()[0].attempts, 500);
    }

    #[test]
    fn test_clones_share_storage() {
        let sink = CollectingSink::new();
        let clone = sink.clone();
        clone.report(ProgressEvent {
            attempts: 1,
            total: -1,
            sample: "x".to_string(),
        });
        assert_eq!(sink.received(), 1);
    }
}
