//! # gridwire-telemetry
//!
//! Event bus for animation telemetry. Emits structured events
//! (canvas resets, buffer generation, per-frame rotation) that can be
//! consumed by pluggable sinks (tracing logs, in-memory capture).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventCounts, EventKind, FrameEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
