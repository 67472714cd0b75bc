//! # gridwire-bench
//!
//! Headless animation runs for regression tracking.
//!
//! Provides a catalog of demo surfaces, a runner that builds and spins a
//! wireframe for a fixed number of frames, and metrics with CSV export.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::FrameMetrics;
pub use runner::AnimationRunner;
pub use scenarios::{Scenario, SurfaceKind};
