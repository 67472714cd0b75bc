//! Strongly-typed identifiers for lattice points.

use serde::{Deserialize, Serialize};

/// Row-major index of a point in an `nx × ny` lattice.
///
/// The point at column `x`, row `y` has index `y * nx + x`. Index buffers
/// store these as raw `u32` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    /// Builds the row-major index for `(x, y)` in a lattice `nx` points wide.
    #[inline]
    pub fn from_grid(x: u32, y: u32, nx: u32) -> Self {
        Self(y * nx + x)
    }

    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Offset of this point's x coordinate in a flat vertex buffer.
    #[inline]
    pub fn vertex_offset(self) -> usize {
        crate::constants::FLOATS_PER_POINT * self.index()
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<PointId> for u32 {
    fn from(id: PointId) -> Self {
        id.0
    }
}
