//! The canvas: grid parameters plus views of the vertex and index buffers.
//!
//! The vertex buffer is a flat row-major array of `[x, y, z]` triples:
//! - point `(x, y)` has index `y * nx + x`
//! - its coordinates live at `3 * index .. 3 * index + 3`
//!
//! The index buffer is a line list: consecutive pairs of point indices.
//! Neither buffer is owned or resized by the canvas; callers hand in
//! storage sized for the grid (or for the 512×512 maximum).

use std::fmt;

use serde::{Deserialize, Serialize};
use gridwire_types::constants::{FLOATS_PER_POINT, MAX_HEIGHT, MAX_WIDTH};
use gridwire_types::{GridwireError, GridwireResult, PointId};

use crate::topology::MeshType;

/// Grid parameters supplied by the embedding host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasParameters {
    /// Number of samples along the horizontal axis.
    pub nx_pts: u32,
    /// Number of samples along the vertical axis.
    pub ny_pts: u32,
    /// Physical extent along x.
    pub width: f32,
    /// Physical extent along y.
    pub height: f32,
    /// x coordinate of the first column.
    pub x_start: f32,
    /// y coordinate of the first row.
    pub y_start: f32,
    /// Lattice topology.
    pub mesh_type: MeshType,
}

impl Default for CanvasParameters {
    fn default() -> Self {
        Self {
            nx_pts: 64,
            ny_pts: 64,
            width: 2.0,
            height: 2.0,
            x_start: -1.0,
            y_start: -1.0,
            mesh_type: MeshType::SquareWireframe,
        }
    }
}

impl CanvasParameters {
    /// Parameters for an `nx × ny` grid covering `[-1, 1] × [-1, 1]`.
    pub fn square(nx_pts: u32, ny_pts: u32) -> Self {
        Self {
            nx_pts,
            ny_pts,
            ..Default::default()
        }
    }

    /// Returns a copy wired with a different topology.
    pub fn with_mesh_type(mut self, mesh_type: MeshType) -> Self {
        self.mesh_type = mesh_type;
        self
    }

    /// Returns true if neither axis exceeds the fixed buffer capacity.
    pub fn fits_capacity(&self) -> bool {
        self.nx_pts <= MAX_WIDTH && self.ny_pts <= MAX_HEIGHT
    }
}

/// Raw address and element count of a buffer, for building zero-copy views
/// on the host side of a memory boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferExport {
    /// Address of the first element.
    pub address: usize,
    /// Number of elements (not bytes) the host should view.
    pub len: usize,
}

/// Vertex and index buffers for one animated wireframe.
///
/// Counts are derived when a buffer is (re)bound and stay consistent with
/// the parameters until the canvas is [`reset`](Canvas::reset):
/// - `number_of_points = nx * ny`
/// - `mesh_size = 3 * number_of_points`
/// - `index_size = compute_index_size(self)`
pub struct Canvas<'a> {
    pub(crate) mesh: &'a mut [f32],
    pub(crate) indices: &'a mut [u32],
    pub(crate) number_of_points: usize,
    pub(crate) mesh_size: usize,
    pub(crate) index_size: usize,
    parameters: CanvasParameters,
}

impl<'a> Canvas<'a> {
    /// Creates a canvas over caller-owned buffers.
    ///
    /// Buffers may be larger than the grid needs. They are not checked here;
    /// generation routines report a [`GridwireError::BufferTooSmall`] instead.
    pub fn new(parameters: CanvasParameters, mesh: &'a mut [f32], indices: &'a mut [u32]) -> Self {
        let mut canvas = Self {
            mesh: &mut [],
            indices: &mut [],
            number_of_points: 0,
            mesh_size: 0,
            index_size: 0,
            parameters,
        };
        canvas.reset_mesh_buffer(mesh);
        canvas.reset_index_buffer(indices);
        canvas
    }

    /// Binds a new vertex buffer and recomputes `number_of_points` and
    /// `mesh_size` from the current grid. Returns the previous buffer.
    pub fn reset_mesh_buffer(&mut self, buffer: &'a mut [f32]) -> &'a mut [f32] {
        self.number_of_points =
            (self.parameters.nx_pts as usize).saturating_mul(self.parameters.ny_pts as usize);
        self.mesh_size = FLOATS_PER_POINT.saturating_mul(self.number_of_points);
        std::mem::replace(&mut self.mesh, buffer)
    }

    /// Binds a new index buffer and recomputes `index_size` from the current
    /// grid and topology. Returns the previous buffer.
    pub fn reset_index_buffer(&mut self, buffer: &'a mut [u32]) -> &'a mut [u32] {
        self.index_size = compute_index_size(self);
        std::mem::replace(&mut self.indices, buffer)
    }

    /// Replaces the grid parameters and recomputes every derived count,
    /// keeping the bound buffers. Buffer contents are left as they were;
    /// both must be regenerated.
    pub fn reset(&mut self, parameters: CanvasParameters) {
        self.parameters = parameters;
        let mesh = std::mem::take(&mut self.mesh);
        let indices = std::mem::take(&mut self.indices);
        self.reset_mesh_buffer(mesh);
        self.reset_index_buffer(indices);
        tracing::debug!(
            nx = parameters.nx_pts,
            ny = parameters.ny_pts,
            mesh_type = %parameters.mesh_type,
            index_size = self.index_size,
            "canvas reset"
        );
    }

    /// Grid parameters this canvas was last reset with.
    #[inline]
    pub fn parameters(&self) -> &CanvasParameters {
        &self.parameters
    }

    #[inline]
    pub fn nx(&self) -> u32 {
        self.parameters.nx_pts
    }

    #[inline]
    pub fn ny(&self) -> u32 {
        self.parameters.ny_pts
    }

    #[inline]
    pub fn mesh_type(&self) -> MeshType {
        self.parameters.mesh_type
    }

    /// Number of lattice points, `nx * ny`.
    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.number_of_points
    }

    /// Number of floats in the vertex region, `3 * number_of_points`.
    #[inline]
    pub fn mesh_size(&self) -> usize {
        self.mesh_size
    }

    /// Number of `u32` entries in the index region.
    #[inline]
    pub fn index_size(&self) -> usize {
        self.index_size
    }

    /// Number of line segments in the wireframe.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.index_size / 2
    }

    /// Capacity of the bound vertex buffer.
    #[inline]
    pub fn mesh_capacity(&self) -> usize {
        self.mesh.len()
    }

    /// Capacity of the bound index buffer.
    #[inline]
    pub fn index_capacity(&self) -> usize {
        self.indices.len()
    }

    /// The vertex region, `mesh_size` floats (clamped to the buffer).
    pub fn vertices(&self) -> &[f32] {
        let len = self.mesh_size.min(self.mesh.len());
        &self.mesh[..len]
    }

    /// The index region, `index_size` entries (clamped to the buffer).
    pub fn indices(&self) -> &[u32] {
        let len = self.index_size.min(self.indices.len());
        &self.indices[..len]
    }

    /// Position of a point as a `glam::Vec3`.
    ///
    /// # Panics
    /// If `point` lies outside the bound vertex buffer.
    #[inline]
    pub fn position(&self, point: PointId) -> glam::Vec3 {
        let offset = point.vertex_offset();
        glam::Vec3::from_slice(&self.mesh[offset..offset + FLOATS_PER_POINT])
    }

    /// Address and length of the vertex region for host-side views.
    pub fn vertex_export(&self) -> BufferExport {
        BufferExport {
            address: self.mesh.as_ptr() as usize,
            len: self.mesh_size,
        }
    }

    /// Address and length of the index region for host-side views.
    pub fn index_export(&self) -> BufferExport {
        BufferExport {
            address: self.indices.as_ptr() as usize,
            len: self.index_size,
        }
    }

    /// Fails if either axis exceeds the fixed 512-point maximum.
    pub(crate) fn check_dimensions(&self) -> GridwireResult<()> {
        if self.parameters.fits_capacity() {
            Ok(())
        } else {
            tracing::warn!(
                nx = self.parameters.nx_pts,
                ny = self.parameters.ny_pts,
                "grid exceeds fixed capacity, nothing generated"
            );
            Err(GridwireError::invalid_dimensions(
                self.parameters.nx_pts,
                self.parameters.ny_pts,
            ))
        }
    }

    /// Fails if the vertex buffer cannot hold `mesh_size` floats.
    pub(crate) fn check_mesh_capacity(&self) -> GridwireResult<()> {
        check_capacity(self.mesh_size, self.mesh.len())
    }

    /// Fails if the index buffer cannot hold `required` entries.
    pub(crate) fn check_index_capacity(&self, required: usize) -> GridwireResult<()> {
        check_capacity(required, self.indices.len())
    }

    /// Validates canvas integrity.
    ///
    /// Checks:
    /// - Both regions fit inside their buffers
    /// - The index region holds whole segments
    /// - Every index refers to an existing point
    pub fn validate(&self) -> GridwireResult<()> {
        self.check_mesh_capacity()?;
        self.check_index_capacity(self.index_size)?;

        if self.index_size % 2 != 0 {
            return Err(GridwireError::InvalidMesh(
                "Index count is not divisible by 2".into(),
            ));
        }

        for (i, &idx) in self.indices().iter().enumerate() {
            if idx as usize >= self.number_of_points {
                return Err(GridwireError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (point count: {})",
                    idx, i, self.number_of_points
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Canvas<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("parameters", &self.parameters)
            .field("number_of_points", &self.number_of_points)
            .field("mesh_size", &self.mesh_size)
            .field("index_size", &self.index_size)
            .field("mesh_capacity", &self.mesh.len())
            .field("index_capacity", &self.indices.len())
            .finish()
    }
}

fn check_capacity(required: usize, capacity: usize) -> GridwireResult<()> {
    if required > capacity {
        return Err(GridwireError::BufferTooSmall { required, capacity });
    }
    Ok(())
}

/// Index-buffer length for the canvas's current grid and topology.
///
/// Pure function of `(nx, ny, mesh_type)`; the buffers are not touched.
pub fn compute_index_size(canvas: &Canvas<'_>) -> usize {
    canvas.mesh_type().index_size(canvas.nx(), canvas.ny())
}
