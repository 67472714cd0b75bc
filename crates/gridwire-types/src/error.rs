//! Error types for gridwire.
//!
//! All crates return `GridwireResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for gridwire.
#[derive(Debug, Error)]
pub enum GridwireError {
    /// Grid dimensions exceed the fixed buffer capacity.
    #[error("Invalid dimensions: {nx}x{ny} exceeds the {max_x}x{max_y} maximum")]
    InvalidDimensions {
        nx: u32,
        ny: u32,
        max_x: u32,
        max_y: u32,
    },

    /// Grid cannot be sampled (fewer than two points on an axis).
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// A caller-supplied buffer is smaller than the data it must hold.
    #[error("Buffer too small: {required} elements required, capacity is {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },

    /// Raw topology tag outside the known set.
    #[error("Unknown topology tag: {0}")]
    UnknownTopology(u32),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GridwireError {
    /// Builds an [`GridwireError::InvalidDimensions`] against the fixed maxima.
    pub fn invalid_dimensions(nx: u32, ny: u32) -> Self {
        Self::InvalidDimensions {
            nx,
            ny,
            max_x: crate::constants::MAX_WIDTH,
            max_y: crate::constants::MAX_HEIGHT,
        }
    }
}

/// Convenience alias for `Result<T, GridwireError>`.
pub type GridwireResult<T> = Result<T, GridwireError>;
