//! Demo surfaces and the scenarios built on them.
//!
//! Every surface is sampled over `[-1, 1] × [-1, 1]`:
//! 1. **Elliptic paraboloid**: `x² + 2y² − 2`
//! 2. **Hyperbolic paraboloid**: `x² − y²`
//! 3. **Monkey saddle**: `x³ − 3xy²`
//! 4. **Plane**: `0`
//! 5. **Ripple**: `0.25·cos(3r)`

use serde::{Deserialize, Serialize};

use gridwire_io::AnimationConfig;
use gridwire_mesh::{CanvasParameters, MeshType, SurfaceFn};
use gridwire_types::constants::{DEFAULT_FRAMES, DEFAULT_ROTATION_ANGLE};
use gridwire_types::{GridwireError, GridwireResult, Scalar};

/// Which demo surface to sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    EllipticParaboloid,
    HyperbolicParaboloid,
    MonkeySaddle,
    Plane,
    Ripple,
}

fn elliptic_paraboloid(x: Scalar, y: Scalar) -> Scalar {
    x * x + 2.0 * y * y - 2.0
}

fn hyperbolic_paraboloid(x: Scalar, y: Scalar) -> Scalar {
    x * x - y * y
}

fn monkey_saddle(x: Scalar, y: Scalar) -> Scalar {
    x * x * x - 3.0 * x * y * y
}

fn plane(_x: Scalar, _y: Scalar) -> Scalar {
    0.0
}

fn ripple(x: Scalar, y: Scalar) -> Scalar {
    0.25 * (3.0 * (x * x + y * y).sqrt()).cos()
}

impl SurfaceKind {
    /// Returns all surface kinds.
    pub fn all() -> &'static [SurfaceKind] {
        &[
            SurfaceKind::EllipticParaboloid,
            SurfaceKind::HyperbolicParaboloid,
            SurfaceKind::MonkeySaddle,
            SurfaceKind::Plane,
            SurfaceKind::Ripple,
        ]
    }

    /// Snake-case name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceKind::EllipticParaboloid => "elliptic_paraboloid",
            SurfaceKind::HyperbolicParaboloid => "hyperbolic_paraboloid",
            SurfaceKind::MonkeySaddle => "monkey_saddle",
            SurfaceKind::Plane => "plane",
            SurfaceKind::Ripple => "ripple",
        }
    }

    /// Looks a surface up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|kind| kind.name() == name)
    }

    /// The height function `z = f(x, y)`.
    pub fn function(&self) -> SurfaceFn {
        match self {
            SurfaceKind::EllipticParaboloid => elliptic_paraboloid,
            SurfaceKind::HyperbolicParaboloid => hyperbolic_paraboloid,
            SurfaceKind::MonkeySaddle => monkey_saddle,
            SurfaceKind::Plane => plane,
            SurfaceKind::Ripple => ripple,
        }
    }

    /// Evaluates the surface at one point.
    #[inline]
    pub fn height(&self, x: Scalar, y: Scalar) -> Scalar {
        (self.function())(x, y)
    }

    /// Grid parameters the demo uses: 2×2 extent centered on the origin.
    pub fn default_parameters(&self) -> CanvasParameters {
        CanvasParameters {
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

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully specified animation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Surface to sample.
    pub surface: SurfaceKind,
    /// Grid sampling and topology.
    pub parameters: CanvasParameters,
    /// Per-frame rotation (radians).
    pub rotation_angle: f32,
    /// Number of frames to run.
    pub frames: u32,
}

impl Scenario {
    /// The demo setup for a surface: default grid, default angle and
    /// frame count.
    pub fn from_kind(surface: SurfaceKind) -> Self {
        Self {
            surface,
            parameters: surface.default_parameters(),
            rotation_angle: DEFAULT_ROTATION_ANGLE,
            frames: DEFAULT_FRAMES,
        }
    }

    /// Builds a scenario from a loaded config.
    ///
    /// The config is validated first; an unknown surface name is a config
    /// error.
    pub fn from_config(config: &AnimationConfig) -> GridwireResult<Self> {
        gridwire_io::validate_config(config)?;
        let surface = SurfaceKind::from_name(&config.surface).ok_or_else(|| {
            let available: Vec<&str> = SurfaceKind::all().iter().map(|k| k.name()).collect();
            GridwireError::InvalidConfig(format!(
                "Unknown surface: '{}'. Available: {}",
                config.surface,
                available.join(", ")
            ))
        })?;
        Ok(Self {
            surface,
            parameters: config.grid,
            rotation_angle: config.rotation_angle,
            frames: config.frames,
        })
    }

    /// Returns a copy wired with a different topology.
    pub fn with_mesh_type(mut self, mesh_type: MeshType) -> Self {
        self.parameters.mesh_type = mesh_type;
        self
    }

    /// Returns a copy with a different grid resolution.
    pub fn with_resolution(mut self, nx_pts: u32, ny_pts: u32) -> Self {
        self.parameters.nx_pts = nx_pts;
        self.parameters.ny_pts = ny_pts;
        self
    }

    /// Returns a copy running a different number of frames.
    pub fn with_frames(mut self, frames: u32) -> Self {
        self.frames = frames;
        self
    }
}
