//! Backing storage for canvases.
//!
//! Buffers are allocated once, at the size of the largest supported grid,
//! and reused for every canvas built from them. Nothing is resized while
//! an animation runs.

use gridwire_types::constants::{MAX_INDEX_BUFFER_SIZE, MAX_MESH_BUFFER_SIZE};
use gridwire_types::{GridwireResult, Scalar};

use crate::canvas::{Canvas, CanvasParameters};
use crate::parametrization::generate_mesh_from_parametrization;
use crate::wireframe::generate_wireframe;

/// Owned vertex and index storage for one animation context.
#[derive(Debug, Clone)]
pub struct CanvasBuffers {
    mesh: Box<[f32]>,
    indices: Box<[u32]>,
}

impl CanvasBuffers {
    /// Allocates zeroed buffers sized for a 512×512 grid of any topology.
    pub fn new() -> Self {
        Self::with_capacity(MAX_MESH_BUFFER_SIZE, MAX_INDEX_BUFFER_SIZE)
    }

    /// Allocates zeroed buffers with explicit element capacities.
    pub fn with_capacity(mesh_capacity: usize, index_capacity: usize) -> Self {
        Self {
            mesh: vec![0.0; mesh_capacity].into_boxed_slice(),
            indices: vec![0; index_capacity].into_boxed_slice(),
        }
    }

    /// Vertex buffer capacity in floats.
    pub fn mesh_capacity(&self) -> usize {
        self.mesh.len()
    }

    /// Index buffer capacity in `u32` entries.
    pub fn index_capacity(&self) -> usize {
        self.indices.len()
    }

    /// Binds a canvas with the given parameters to these buffers.
    ///
    /// Buffer contents from any previous canvas are not cleared.
    pub fn init_canvas(&mut self, parameters: CanvasParameters) -> Canvas<'_> {
        let canvas = Canvas::new(parameters, &mut self.mesh, &mut self.indices);
        tracing::debug!(
            nx = parameters.nx_pts,
            ny = parameters.ny_pts,
            mesh_type = %parameters.mesh_type,
            mesh_size = canvas.mesh_size(),
            index_size = canvas.index_size(),
            "canvas initialized"
        );
        canvas
    }

    /// Initializes a canvas, samples `surface` into the vertex buffer, and
    /// wires the index buffer for the canvas's topology.
    pub fn make_wireframe<F>(
        &mut self,
        parameters: CanvasParameters,
        surface: F,
    ) -> GridwireResult<Canvas<'_>>
    where
        F: Fn(Scalar, Scalar) -> Scalar,
    {
        let mut canvas = self.init_canvas(parameters);
        generate_mesh_from_parametrization(&mut canvas, surface)?;
        generate_wireframe(&mut canvas)?;
        Ok(canvas)
    }
}

impl Default for CanvasBuffers {
    fn default() -> Self {
        Self::new()
    }
}
