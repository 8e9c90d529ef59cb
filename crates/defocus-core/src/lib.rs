//! Core math and optics primitives for `defocus-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec2`, `Pt3`, ...),
//! - composable pinhole camera models (projection + intrinsics),
//! - thin-lens optics (image distance, circle of confusion, depth of field),
//! - the simulation engine ([`SimCamera`]) that projects scene points and
//!   attaches a defocus blur radius to each.
//!
//! Pixel pipeline:
//! `pixel = K ∘ projection(dir)`
//!
//! The blur pipeline evaluates the Gaussian lens equation at the point depth
//! and at the focus distance, and turns the image-distance mismatch into a
//! circle-of-confusion size on the sensor.

/// Domain error type shared by all optics operations.
pub mod error;
/// Linear algebra type aliases and helpers.
pub mod math;
/// Camera and lens models.
pub mod models;
/// Point collections and projection results.
pub mod types;

pub use error::*;
pub use math::*;
pub use models::*;
pub use types::*;
