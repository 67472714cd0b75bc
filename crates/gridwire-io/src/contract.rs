//! Animation configuration contract.
//!
//! Serializable for CLI configuration files (TOML or JSON):
//!
//! ```toml
//! surface = "hyperbolic_paraboloid"
//! rotation_angle = 0.01
//! frames = 240
//!
//! [grid]
//! nx_pts = 64
//! ny_pts = 64
//! width = 2.0
//! height = 2.0
//! x_start = -1.0
//! y_start = -1.0
//! mesh_type = "square_wireframe"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use gridwire_mesh::CanvasParameters;
use gridwire_types::constants::{DEFAULT_FRAMES, DEFAULT_ROTATION_ANGLE};
use gridwire_types::{GridwireError, GridwireResult};

/// Everything needed to build and spin one wireframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Name of the height function to sample.
    pub surface: String,
    /// Per-frame rotation about the z axis (radians).
    pub rotation_angle: f32,
    /// Frames to run in headless mode.
    pub frames: u32,
    /// Grid sampling and topology.
    pub grid: CanvasParameters,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            surface: "elliptic_paraboloid".to_string(),
            rotation_angle: DEFAULT_ROTATION_ANGLE,
            frames: DEFAULT_FRAMES,
            grid: CanvasParameters::default(),
        }
    }
}

impl AnimationConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(content: &str) -> GridwireResult<Self> {
        toml::from_str(content).map_err(|e| GridwireError::Serialization(format!("TOML parse failed: {e}")))
    }

    /// Parses a JSON document.
    pub fn from_json_str(content: &str) -> GridwireResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| GridwireError::Serialization(format!("JSON parse failed: {e}")))
    }

    /// Loads a config file, choosing the format from its extension
    /// (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> GridwireResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(GridwireError::InvalidConfig(format!(
                    "Unsupported config format: {} (use .toml or .json)",
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), surface = %config.surface, "config loaded");
        Ok(config)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> GridwireResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| GridwireError::Serialization(format!("TOML serialization failed: {e}")))
    }
}
