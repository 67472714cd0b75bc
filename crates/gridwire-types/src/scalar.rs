//! Scalar type alias for vertex data.
//!
//! Vertex buffers are handed to WebGL / GPU uploads as 32-bit floats.

/// The floating-point type stored in vertex buffers.
pub type Scalar = f32;
