//! Animation event types.
//!
//! Events are lightweight value types tagged with the frame they belong
//! to. Setup events (reset, generation) are tagged with frame 0.

use serde::{Deserialize, Serialize};

/// An event emitted while building or animating a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvent {
    /// Frame number (0 = setup, before the first rotation).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Canvas bound to buffers with new grid parameters.
    CanvasReset {
        nx: u32,
        ny: u32,
        /// Snake-case topology name.
        mesh_type: String,
        mesh_size: usize,
        index_size: usize,
    },

    /// Vertex buffer sampled from a height function.
    MeshGenerated {
        /// Name of the surface that was sampled.
        surface: String,
        points: usize,
    },

    /// Index buffer filled.
    WireframeGenerated {
        segments: usize,
    },

    /// One rotation step applied.
    FrameRotated {
        /// Wall-clock time spent rotating (seconds).
        wall_time: f64,
    },

    /// Custom event for extensibility.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl FrameEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }

    /// Creates a setup event (frame 0).
    pub fn setup(kind: EventKind) -> Self {
        Self::new(0, kind)
    }
}

/// Running tally of dispatched events, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub canvas_resets: u64,
    pub meshes_generated: u64,
    pub wireframes_generated: u64,
    pub frames_rotated: u64,
    pub custom: u64,
    /// Events emitted while the bus was disabled.
    pub dropped: u64,
    /// Highest frame number seen on a rotation event.
    pub last_frame: u64,
}

impl EventCounts {
    /// Adds one dispatched event to the tally.
    pub fn record(&mut self, event: &FrameEvent) {
        match event.kind {
            EventKind::CanvasReset { .. } => self.canvas_resets += 1,
            EventKind::MeshGenerated { .. } => self.meshes_generated += 1,
            EventKind::WireframeGenerated { .. } => self.wireframes_generated += 1,
            EventKind::FrameRotated { .. } => {
                self.frames_rotated += 1;
                self.last_frame = self.last_frame.max(event.frame);
            }
            EventKind::Custom { .. } => self.custom += 1,
        }
    }

    /// Events handed to sinks so far.
    pub fn dispatched(&self) -> u64 {
        self.canvas_resets
            + self.meshes_generated
            + self.wireframes_generated
            + self.frames_rotated
            + self.custom
    }
}
