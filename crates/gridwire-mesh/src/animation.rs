//! A canvas together with its per-frame rotation.

use crate::canvas::Canvas;
use crate::rotation::{rotate_mesh, RotationVector};

/// One animated wireframe: a generated canvas spun a fixed small angle
/// every frame.
///
/// There is one animation per rendering context. The host calls
/// [`Animation::rotate`] from its frame callback and then re-reads the
/// vertex buffer.
#[derive(Debug)]
pub struct Animation<'a> {
    canvas: Canvas<'a>,
    rotation: RotationVector,
    frame: u64,
}

impl<'a> Animation<'a> {
    /// Wraps a canvas with no rotation set.
    pub fn new(canvas: Canvas<'a>) -> Self {
        Self {
            canvas,
            rotation: RotationVector::IDENTITY,
            frame: 0,
        }
    }

    /// Sets the per-frame rotation angle (radians, small angles only).
    pub fn set_rotation_angle(&mut self, angle: f32) {
        self.rotation = RotationVector::from_small_angle(angle);
        tracing::debug!(
            angle,
            cos = self.rotation.cos_angle,
            sin = self.rotation.sin_angle,
            "rotation angle set"
        );
    }

    /// Current rotation vector.
    pub fn rotation(&self) -> RotationVector {
        self.rotation
    }

    /// Advances one frame: rotates the canvas by the stored angle.
    ///
    /// Returns the number of frames rendered so far.
    pub fn rotate(&mut self) -> u64 {
        rotate_mesh(&mut self.canvas, self.rotation);
        self.frame += 1;
        self.frame
    }

    /// Frames advanced since creation.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn canvas(&self) -> &Canvas<'a> {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas<'a> {
        &mut self.canvas
    }

    /// Releases the canvas.
    pub fn into_canvas(self) -> Canvas<'a> {
        self.canvas
    }
}
