//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per frame to present the current vertex
//! buffer. The headless renderer discards all frames, serving as a no-op
//! for benchmarks and CI.

use gridwire_mesh::Canvas;
use gridwire_types::GridwireResult;

/// A single render frame.
pub struct RenderFrame {
    /// Animation frame this snapshot belongs to (0 = before any rotation).
    pub frame: u64,
    /// Interleaved positions `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
}

impl RenderFrame {
    /// Snapshots the vertex region of a canvas.
    pub fn from_canvas(frame: u64, canvas: &Canvas<'_>) -> Self {
        Self {
            frame,
            positions: canvas.vertices().to_vec(),
        }
    }

    /// Number of points in this frame.
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Converts a stored frame total to the `u32` reported by
/// [`Renderer::frame_count`], saturating instead of wrapping.
pub fn clamp_frame_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Trait for presenting animation output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): writes a JSON line list
pub trait Renderer: Send {
    /// Initialize the renderer with the wireframe topology.
    fn init(&mut self, canvas: &Canvas<'_>) -> GridwireResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> GridwireResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> GridwireResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted, saturating at `u32::MAX`.
    fn frame_count(&self) -> u32;
}

/// Headless renderer that discards all frames.
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self { frames: 0 }
    }
}

impl Default for HeadlessRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _canvas: &Canvas<'_>) -> GridwireResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> GridwireResult<()> {
        self.frames = self.frames.saturating_add(1);
        Ok(())
    }

    fn finalize(&mut self) -> GridwireResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
