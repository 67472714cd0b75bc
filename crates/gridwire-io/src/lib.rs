//! # gridwire-io
//!
//! Animation configuration and its validation.
//!
//! Defines the boundary types that external systems (CLI, host bindings)
//! use to describe a wireframe animation, and the checks applied before
//! any buffer is touched.

pub mod contract;
pub mod validator;

pub use contract::AnimationConfig;
pub use validator::{validate_config, validate_parameters};
