use thiserror::Error;

use crate::Real;

/// Errors produced by the image-formation formulas.
///
/// Every variant names the offending quantity so callers can report which
/// input put the computation outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// A physical parameter that must be positive was zero or negative.
    #[error("{field} must be positive, got {value}")]
    OutOfRange { field: &'static str, value: Real },
    /// The point sits at or behind the camera plane and cannot be projected.
    #[error("point depth must be positive for projection, got z={z}")]
    BehindCamera { z: Real },
    /// An object at exactly the focal length images at infinity.
    #[error("object distance {distance} equals the focal length; image distance is unbounded")]
    AtFocalLength { distance: Real },
    /// A zero image distance makes the circle of confusion undefined.
    #[error("image_distance is zero; circle of confusion is undefined")]
    ZeroImageDistance,
}
