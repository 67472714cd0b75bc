//! # gridwire-types
//!
//! Shared constants, identifiers, and error types for the gridwire
//! wireframe toolkit.
//!
//! This crate has no domain logic. It defines the vocabulary
//! that all other gridwire crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{GridwireError, GridwireResult};
pub use ids::PointId;
pub use scalar::Scalar;
