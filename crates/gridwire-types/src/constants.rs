//! Fixed capacity limits and animation defaults.

/// Maximum number of samples along the horizontal axis.
pub const MAX_WIDTH: u32 = 512;

/// Maximum number of samples along the vertical axis.
pub const MAX_HEIGHT: u32 = 512;

/// Maximum number of points in a grid (`MAX_WIDTH * MAX_HEIGHT`).
pub const MAX_LENGTH: usize = (MAX_WIDTH as usize) * (MAX_HEIGHT as usize);

/// Floats per vertex: x, y, z.
pub const FLOATS_PER_POINT: usize = 3;

/// Capacity of the vertex buffer for the largest supported grid.
pub const MAX_MESH_BUFFER_SIZE: usize = FLOATS_PER_POINT * MAX_LENGTH;

/// Capacity of the index buffer for the largest supported grid.
///
/// Sized for the worst case, a wrapped triangulated lattice, where every
/// point owns three line segments (six indices).
pub const MAX_INDEX_BUFFER_SIZE: usize = 6 * MAX_LENGTH;

/// Default per-frame rotation angle (radians).
pub const DEFAULT_ROTATION_ANGLE: f32 = 0.01;

/// Largest angle for which the small-angle rotation is considered accurate.
pub const SMALL_ANGLE_LIMIT: f32 = 0.3;

/// Default number of frames for a headless animation run.
pub const DEFAULT_FRAMES: u32 = 120;
