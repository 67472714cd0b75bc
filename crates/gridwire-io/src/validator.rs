//! Config validation.
//!
//! Catches malformed grids before they reach the generators, which
//! would otherwise reject them one buffer at a time.

use gridwire_mesh::CanvasParameters;
use gridwire_types::constants::{MAX_HEIGHT, MAX_WIDTH, SMALL_ANGLE_LIMIT};
use gridwire_types::{GridwireError, GridwireResult};

use crate::contract::AnimationConfig;

/// Validates a complete animation config.
///
/// Checks:
/// - Grid parameters (see [`validate_parameters`])
/// - Surface name is present
/// - Rotation angle is finite and within the small-angle range
/// - At least one frame is requested
pub fn validate_config(config: &AnimationConfig) -> GridwireResult<()> {
    validate_parameters(&config.grid)?;

    if config.surface.trim().is_empty() {
        return Err(GridwireError::InvalidConfig("Surface name is empty".into()));
    }
    if !config.rotation_angle.is_finite() {
        return Err(GridwireError::InvalidConfig(
            "Rotation angle must be finite".into(),
        ));
    }
    if config.rotation_angle.abs() > SMALL_ANGLE_LIMIT {
        return Err(GridwireError::InvalidConfig(format!(
            "Rotation angle {} rad exceeds the small-angle limit of {} rad",
            config.rotation_angle, SMALL_ANGLE_LIMIT
        )));
    }
    if config.frames == 0 {
        return Err(GridwireError::InvalidConfig(
            "Frame count must be >= 1".into(),
        ));
    }

    Ok(())
}

/// Validates grid parameters.
///
/// Both axes need between 2 and 512 samples; extents and origin must be
/// finite.
pub fn validate_parameters(params: &CanvasParameters) -> GridwireResult<()> {
    if params.nx_pts > MAX_WIDTH || params.ny_pts > MAX_HEIGHT {
        return Err(GridwireError::invalid_dimensions(params.nx_pts, params.ny_pts));
    }
    if params.nx_pts < 2 || params.ny_pts < 2 {
        return Err(GridwireError::InvalidGrid(format!(
            "at least 2 samples per axis are required, got {}x{}",
            params.nx_pts, params.ny_pts
        )));
    }

    let reals = [
        ("width", params.width),
        ("height", params.height),
        ("x_start", params.x_start),
        ("y_start", params.y_start),
    ];
    for (name, value) in reals {
        if !value.is_finite() {
            return Err(GridwireError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
    }

    Ok(())
}
