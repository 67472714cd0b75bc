//! Vertex generation from height functions `z = f(x, y)`.

use gridwire_types::{GridwireError, GridwireResult, Scalar};

use crate::canvas::Canvas;

/// A surface given as a height function over the plane.
pub type SurfaceFn = fn(Scalar, Scalar) -> Scalar;

/// Samples `surface` over the canvas grid and writes the vertex region.
///
/// Column `i` maps to `x = x_start + i * width / (nx - 1)` and row `j` to
/// `y = y_start + j * height / (ny - 1)`, so the first and last samples
/// land exactly on the edges of the extent. Vertices are written row-major.
///
/// # Errors
/// - [`InvalidDimensions`](GridwireError::InvalidDimensions) if `nx` or `ny`
///   exceeds 512.
/// - [`InvalidGrid`](GridwireError::InvalidGrid) if `nx < 2` or `ny < 2`,
///   where the sample spacing is undefined.
/// - [`BufferTooSmall`](GridwireError::BufferTooSmall) if the vertex buffer
///   cannot hold `mesh_size` floats.
///
/// Nothing is written on error.
pub fn generate_mesh_from_parametrization<F>(canvas: &mut Canvas<'_>, surface: F) -> GridwireResult<()>
where
    F: Fn(Scalar, Scalar) -> Scalar,
{
    canvas.check_dimensions()?;

    let (nx, ny) = (canvas.nx(), canvas.ny());
    if nx < 2 || ny < 2 {
        return Err(GridwireError::InvalidGrid(format!(
            "at least 2 samples per axis are required, got {nx}x{ny}"
        )));
    }
    canvas.check_mesh_capacity()?;

    let params = *canvas.parameters();
    let dx = params.width / (nx - 1) as Scalar;
    let dy = params.height / (ny - 1) as Scalar;

    let region = &mut canvas.mesh[..canvas.mesh_size];
    let mut points = region.chunks_exact_mut(3);

    for y_index in 0..ny {
        let y = params.y_start + y_index as Scalar * dy;
        for x_index in 0..nx {
            let x = params.x_start + x_index as Scalar * dx;
            if let Some(point) = points.next() {
                point[0] = x;
                point[1] = y;
                point[2] = surface(x, y);
            }
        }
    }

    tracing::debug!(points = canvas.number_of_points, "vertices generated");
    Ok(())
}
