//! Event bus: broadcast-style event dispatch with pluggable sinks.
//!
//! Events are queued on a `std::sync::mpsc` channel as they are emitted
//! and handed to every sink on [`EventBus::flush`]. The bus keeps a
//! per-kind tally of what it dispatched, so a run can be summarized
//! without a collecting sink.

use std::cell::Cell;
use std::sync::mpsc;

use crate::events::{EventCounts, FrameEvent};
use crate::sinks::EventSink;

/// Broadcast event bus for animation telemetry.
pub struct EventBus {
    sender: mpsc::Sender<FrameEvent>,
    receiver: mpsc::Receiver<FrameEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    counts: EventCounts,
    /// Events refused while disabled; `emit` only has `&self`.
    dropped: Cell<u64>,
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            counts: EventCounts::default(),
            dropped: Cell::new(0),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queues an event. A disabled bus counts it as dropped.
    pub fn emit(&self, event: FrameEvent) {
        if !self.enabled {
            self.dropped.set(self.dropped.get() + 1);
            return;
        }
        // The receiver lives as long as the bus.
        let _ = self.sender.send(event);
    }

    /// Hands every queued event to every sink, in emission order, and
    /// tallies it.
    ///
    /// Returns the number of events dispatched by this call.
    pub fn flush(&mut self) -> usize {
        let mut dispatched = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.counts.record(&event);
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            dispatched += 1;
        }
        if dispatched > 0 {
            tracing::trace!(dispatched, total = self.counts.dispatched(), "event bus flushed");
        }
        dispatched
    }

    /// Flushes pending events, then lets every sink finalize.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
        let counts = self.counts();
        tracing::debug!(
            dispatched = counts.dispatched(),
            frames = counts.frames_rotated,
            dropped = counts.dropped,
            "event bus finished"
        );
    }

    /// Tally of events dispatched so far, plus those dropped while
    /// disabled. Queued events are not counted until flushed.
    pub fn counts(&self) -> EventCounts {
        EventCounts {
            dropped: self.dropped.get(),
            ..self.counts
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
