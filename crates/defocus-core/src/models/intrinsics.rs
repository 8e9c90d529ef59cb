use nalgebra::{Matrix3, RealField, Vector2};
use serde::{Deserialize, Serialize};

use crate::{DomainError, Real};

/// Intrinsics that map normalized coordinates to pixel coordinates.
pub trait IntrinsicsModel<S: RealField + Copy> {
    /// Convert normalized image-plane coordinates into pixel coordinates.
    fn normalized_to_pixel(&self, n: &Vector2<S>) -> Vector2<S>;
    /// Convert pixel coordinates into normalized image-plane coordinates.
    fn pixel_to_normalized(&self, pixel: &Vector2<S>) -> Vector2<S>;
}

/// Standard skew-free pinhole intrinsics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FxFyCxCy<S: RealField + Copy> {
    /// Focal length in pixels along X.
    pub fx: S,
    /// Focal length in pixels along Y.
    pub fy: S,
    /// Principal point X coordinate in pixels.
    pub cx: S,
    /// Principal point Y coordinate in pixels.
    pub cy: S,
}

impl<S: RealField + Copy> FxFyCxCy<S> {
    /// Return the 3x3 camera intrinsics matrix K.
    pub fn k_matrix(&self) -> Matrix3<S> {
        Matrix3::new(
            self.fx,
            S::zero(),
            self.cx,
            S::zero(),
            self.fy,
            self.cy,
            S::zero(),
            S::zero(),
            S::one(),
        )
    }
}

impl FxFyCxCy<Real> {
    /// Check the `fx, fy > 0` invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.fx <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "fx",
                value: self.fx,
            });
        }
        if self.fy <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "fy",
                value: self.fy,
            });
        }
        Ok(())
    }
}

impl<S: RealField + Copy> IntrinsicsModel<S> for FxFyCxCy<S> {
    fn normalized_to_pixel(&self, n: &Vector2<S>) -> Vector2<S> {
        let u = self.fx * n.x + self.cx;
        let v = self.fy * n.y + self.cy;
        Vector2::new(u, v)
    }

    fn pixel_to_normalized(&self, pixel: &Vector2<S>) -> Vector2<S> {
        let nx = (pixel.x - self.cx) / self.fx;
        let ny = (pixel.y - self.cy) / self.fy;
        Vector2::new(nx, ny)
    }
}
