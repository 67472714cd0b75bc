//! Per-frame spin about the vertical (z) axis.
//!
//! The angle is applied once per frame, so it is always small. Sine and
//! cosine come from truncated Taylor polynomials instead of a library call:
//!
//! ```text
//! cos θ ≈ 1 - θ²/2 + θ⁴/24
//! sin θ ≈ θ - θ³/6
//! ```
//!
//! Accuracy degrades past roughly |θ| ≈ 0.3 rad; no bound is enforced.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;

// Taylor coefficients for cosine.
const C0: f32 = 1.000_000_00E+00;
const C1: f32 = -5.000_000_00E-01;
const C2: f32 = 4.166_666_67E-02;

// Taylor coefficients for sine.
const S0: f32 = 1.000_000_00E+00;
const S1: f32 = -1.666_666_67E-01;

/// Horner form of the cosine polynomial, in terms of θ².
#[inline(always)]
fn small_angle_cos(angle_squared: f32) -> f32 {
    C0 + angle_squared * (C1 + angle_squared * C2)
}

/// Horner form of the sine polynomial.
#[inline(always)]
fn small_angle_sin(angle: f32, angle_squared: f32) -> f32 {
    angle * (S0 + angle_squared * S1)
}

/// Precomputed `(cos θ, sin θ)` for a rotation in the xy-plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationVector {
    pub cos_angle: f32,
    pub sin_angle: f32,
}

impl RotationVector {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        cos_angle: 1.0,
        sin_angle: 0.0,
    };

    /// Builds the rotation for a small angle (radians) using the Taylor
    /// polynomials. `from_small_angle(0.0)` is exactly [`Self::IDENTITY`].
    pub fn from_small_angle(angle: f32) -> Self {
        let angle_squared = angle * angle;
        Self {
            cos_angle: small_angle_cos(angle_squared),
            sin_angle: small_angle_sin(angle, angle_squared),
        }
    }

    /// Rotates a single `(x, y)` pair.
    #[inline]
    pub fn apply(self, x: f32, y: f32) -> (f32, f32) {
        let rotated = self.as_vec2().rotate(Vec2::new(x, y));
        (rotated.x, rotated.y)
    }

    /// The pair as a unit complex number `cos θ + i sin θ`.
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.cos_angle, self.sin_angle)
    }

    /// Squared length of the pair. Drifts from 1 as the angle grows.
    pub fn norm_squared(self) -> f32 {
        self.as_vec2().length_squared()
    }
}

impl Default for RotationVector {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Computes the rotation vector for a per-frame angle (radians).
pub fn set_rotation_angle(angle: f32) -> RotationVector {
    RotationVector::from_small_angle(angle)
}

/// Rotates every point of the canvas in place about the z axis.
///
/// `(x, y) ← (c·x − s·y, c·y + s·x)`; z is untouched. Walks the first
/// `number_of_points` vertices. Rotations compose; nothing resets the
/// mesh to its generated orientation.
pub fn rotate_mesh(canvas: &mut Canvas<'_>, rotation: RotationVector) {
    let n = canvas.number_of_points;
    for point in canvas.mesh.chunks_exact_mut(3).take(n) {
        let (x, y) = rotation.apply(point[0], point[1]);
        point[0] = x;
        point[1] = y;
    }
}
