//! # gridwire-render
//!
//! Pluggable presentation layer for animated wireframes.
//!
//! The library never draws anything itself. A `Renderer` receives the
//! line-list topology once and a copy of the vertex buffer per frame;
//! `HeadlessRenderer` discards frames and `JsonFrameExporter` writes them
//! out for an external line-segment viewer.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{clamp_frame_count, HeadlessRenderer, RenderFrame, Renderer};
