//! # gridwire-mesh
//!
//! Wireframe meshes for parametric surfaces, stored in fixed-capacity,
//! caller-owned buffers that an external renderer can view without copying.
//!
//! ## Key Types
//!
//! - [`Canvas`]: Non-owning views of a vertex buffer and an index buffer,
//!   plus the grid parameters and derived counts.
//! - [`CanvasBuffers`]: Backing storage sized for the largest supported
//!   grid (512×512).
//! - [`MeshType`]: The twelve lattice topologies and their index-buffer sizes.
//! - [`RotationVector`]: Small-angle rotation about the vertical axis.
//!
//! ## Pipeline
//!
//! ```text
//! CanvasParameters ─► Canvas (reset buffers, size indices)
//!                  ─► generate_wireframe          (index buffer)
//!                  ─► generate_mesh_from_parametrization (vertex buffer)
//!                  ─► rotate_mesh, once per frame
//! ```

pub mod animation;
pub mod buffers;
pub mod canvas;
pub mod parametrization;
pub mod rotation;
pub mod topology;
pub mod wireframe;

pub use animation::Animation;
pub use buffers::CanvasBuffers;
pub use canvas::{compute_index_size, BufferExport, Canvas, CanvasParameters};
pub use parametrization::{generate_mesh_from_parametrization, SurfaceFn};
pub use rotation::{rotate_mesh, set_rotation_angle, RotationVector};
pub use topology::{index_size_for_tag, Lattice, MeshType, Seam, Style, TOPOLOGY_TABLE};
pub use wireframe::{generate_rectangular_wireframe, generate_wireframe};
