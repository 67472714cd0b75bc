//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::FrameEvent;

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &FrameEvent);

    /// Called when the animation ends.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events in memory for tests and inspection.
///
/// Clones share the same storage, so a clone kept by the caller sees
/// what the bus delivered to the boxed original.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<FrameEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<FrameEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &FrameEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// Logs events through `tracing`.
///
/// Setup events are logged at `info`, per-frame rotation at `trace`.
#[derive(Debug, Default)]
pub struct TracingSink {
    handled: u64,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &FrameEvent) {
        use crate::events::EventKind;

        self.handled += 1;
        match &event.kind {
            EventKind::FrameRotated { wall_time } => {
                tracing::trace!(frame = event.frame, wall_time, "frame_rotated");
            }
            kind => {
                tracing::info!(frame = event.frame, event = ?kind, "animation_event");
            }
        }
    }

    fn finalize(&mut self) {
        tracing::debug!(events = self.handled, "tracing sink finalized");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
