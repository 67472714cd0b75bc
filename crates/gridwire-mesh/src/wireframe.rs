//! Line-list connectivity for lattice wireframes.
//!
//! Every point emits segments only towards its upper and right neighbors
//! (and the upper-right diagonal for triangulated lattices), so each
//! adjacency appears exactly once. Closed seams wrap those neighbors
//! around to the opposite edge.

use gridwire_types::{GridwireResult, PointId};

use crate::canvas::Canvas;
use crate::topology::{Lattice, MeshType, Style};

/// Fills an index buffer for an `nx × ny` lattice, returning the number of
/// entries written.
pub(crate) type WireframeFill = fn(&Lattice, u32, u32, &mut [u32]) -> usize;

/// Appends segment endpoint pairs to an index buffer.
struct SegmentWriter<'b> {
    buffer: &'b mut [u32],
    cursor: usize,
}

impl<'b> SegmentWriter<'b> {
    fn new(buffer: &'b mut [u32]) -> Self {
        Self { buffer, cursor: 0 }
    }

    #[inline]
    fn push(&mut self, a: PointId, b: PointId) {
        self.buffer[self.cursor] = a.0;
        self.buffer[self.cursor + 1] = b.0;
        self.cursor += 2;
    }
}

/// Open quadrilateral lattice: up and right segments, no wrapping.
pub(crate) fn fill_rectangular(_lattice: &Lattice, nx: u32, ny: u32, buffer: &mut [u32]) -> usize {
    let mut out = SegmentWriter::new(buffer);

    for y in 0..ny {
        let shift = y * nx;
        for x in 0..nx {
            let here = PointId(shift + x);

            // Top row has nothing above it.
            if y != ny - 1 {
                out.push(here, PointId(here.0 + nx));
            }

            // Right column has nothing beside it.
            if x != nx - 1 {
                out.push(here, PointId(here.0 + 1));
            }
        }
    }

    out.cursor
}

/// Any lattice: up, right and (if triangulated) diagonal segments,
/// wrapped across closed seams.
pub(crate) fn fill_lattice(lattice: &Lattice, nx: u32, ny: u32, buffer: &mut [u32]) -> usize {
    let mut out = SegmentWriter::new(buffer);
    let triangulated = lattice.style == Style::Triangulated;

    for y in 0..ny {
        for x in 0..nx {
            let here = PointId::from_grid(x, y, nx);

            if let Some((ux, uy)) = lattice.up(x, y, nx, ny) {
                out.push(here, PointId::from_grid(ux, uy, nx));
            }
            if let Some((rx, ry)) = lattice.right(x, y, nx, ny) {
                out.push(here, PointId::from_grid(rx, ry, nx));
            }
            if triangulated {
                if let Some((dx, dy)) = lattice.diagonal(x, y, nx, ny) {
                    out.push(here, PointId::from_grid(dx, dy, nx));
                }
            }
        }
    }

    out.cursor
}

/// Fills the index buffer with the open-boundary quadrilateral wireframe,
/// whatever topology the canvas is tagged with.
///
/// Writes `2 * (2P - nx - ny)` entries from the start of the buffer. Any
/// tail beyond that is left untouched.
pub fn generate_rectangular_wireframe(canvas: &mut Canvas<'_>) -> GridwireResult<()> {
    canvas.check_dimensions()?;
    let (nx, ny) = (canvas.nx(), canvas.ny());
    let required = MeshType::SquareWireframe.index_size(nx, ny);
    canvas.check_index_capacity(required)?;

    let lattice = MeshType::SquareWireframe.lattice();
    let written = fill_rectangular(&lattice, nx, ny, canvas.indices);
    debug_assert_eq!(written, required);

    tracing::debug!(nx, ny, index_size = written, "rectangular wireframe generated");
    Ok(())
}

/// Fills the index buffer with the wireframe for the canvas's topology.
///
/// Writes exactly `index_size` entries.
///
/// # Errors
/// - [`InvalidDimensions`](gridwire_types::GridwireError::InvalidDimensions)
///   if `nx` or `ny` exceeds 512; the buffer is left untouched.
/// - [`BufferTooSmall`](gridwire_types::GridwireError::BufferTooSmall)
///   if the index buffer cannot hold `index_size` entries.
pub fn generate_wireframe(canvas: &mut Canvas<'_>) -> GridwireResult<()> {
    canvas.check_dimensions()?;
    canvas.check_index_capacity(canvas.index_size)?;

    let entry = canvas.mesh_type().entry();
    let (nx, ny) = (canvas.nx(), canvas.ny());
    let written = (entry.fill)(&entry.lattice, nx, ny, canvas.indices);
    debug_assert_eq!(written, canvas.index_size);

    tracing::debug!(
        nx,
        ny,
        mesh_type = entry.name,
        index_size = written,
        "wireframe generated"
    );
    Ok(())
}
