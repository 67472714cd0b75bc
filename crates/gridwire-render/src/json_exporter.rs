//! JSON frame exporter: writes the line list and per-frame positions.
//!
//! Captures the index buffer on `init()` and the vertex buffer on every
//! `submit_frame()`, then serializes the whole animation to one JSON file
//! on `finalize()`. Any viewer that draws `indices` as line-segment pairs
//! can play it back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use gridwire_mesh::Canvas;
use gridwire_types::{GridwireError, GridwireResult};

use crate::renderer::{clamp_frame_count, RenderFrame, Renderer};

#[derive(Serialize)]
struct FrameData {
    frame: u64,
    positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
}

#[derive(Serialize)]
struct AnimationData<'d> {
    mesh_type: &'d str,
    nx: u32,
    ny: u32,
    vertex_count: usize,
    segment_count: usize,
    indices: &'d [u32],
    frames: &'d [FrameData],
}

/// Exports animation frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("spin.json");
/// exporter.init(&canvas)?;
/// // ... rotate, calling submit_frame() each step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    mesh_type: String,
    nx: u32,
    ny: u32,
    vertex_count: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl AsRef<Path>) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
            mesh_type: String::new(),
            nx: 0,
            ny: 0,
            vertex_count: 0,
            indices: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Serializes everything captured so far.
    pub fn to_json(&self) -> GridwireResult<String> {
        let data = AnimationData {
            mesh_type: &self.mesh_type,
            nx: self.nx,
            ny: self.ny,
            vertex_count: self.vertex_count,
            segment_count: self.indices.len() / 2,
            indices: &self.indices,
            frames: &self.frames,
        };
        serde_json::to_string(&data)
            .map_err(|e| GridwireError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, canvas: &Canvas<'_>) -> GridwireResult<()> {
        self.mesh_type = canvas.mesh_type().name().to_string();
        self.nx = canvas.nx();
        self.ny = canvas.ny();
        self.vertex_count = canvas.number_of_points();
        self.indices = canvas.indices().to_vec();
        self.frames.clear();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> GridwireResult<()> {
        if frame.point_count() != self.vertex_count {
            return Err(GridwireError::InvalidMesh(format!(
                "frame {} has {} points, expected {}",
                frame.frame,
                frame.point_count(),
                self.vertex_count
            )));
        }
        self.frames.push(FrameData {
            frame: frame.frame,
            positions: frame.positions.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> GridwireResult<()> {
        let json = self.to_json()?;
        std::fs::write(&self.output_path, json)?;
        self.frames.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        clamp_frame_count(self.frames.len())
    }
}
