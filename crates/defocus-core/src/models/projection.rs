use nalgebra::{RealField, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Projection model from a camera direction to normalized coordinates.
pub trait ProjectionModel<S: RealField + Copy> {
    /// Project a direction in camera coordinates to normalized coordinates.
    ///
    /// Returns `None` when the direction is not projectable (at or behind
    /// the camera plane).
    fn project_dir(&self, dir_c: &Vector3<S>) -> Option<Vector2<S>>;
    /// Unproject normalized coordinates to a direction in camera coordinates.
    fn unproject_dir(&self, n: &Vector2<S>) -> Vector3<S>;
}

/// Classic pinhole projection model.
///
/// All rays pass through a single point; the model has infinite depth of
/// field, so it contributes no blur of its own.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Pinhole;

impl<S: RealField + Copy> ProjectionModel<S> for Pinhole {
    fn project_dir(&self, dir_c: &Vector3<S>) -> Option<Vector2<S>> {
        if dir_c.z <= S::zero() {
            return None;
        }
        Some(Vector2::new(dir_c.x / dir_c.z, dir_c.y / dir_c.z))
    }

    fn unproject_dir(&self, n: &Vector2<S>) -> Vector3<S> {
        Vector3::new(n.x, n.y, S::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn identity_intrinsics_reduce_to_ratio() {
        let p = Vector3::new(3.0_f64, -1.5, 2.0);
        let n = Pinhole.project_dir(&p).unwrap();
        assert!((n.x - 1.5).abs() < 1e-12);
        assert!((n.y + 0.75).abs() < 1e-12);
    }

    #[test]
    fn rejects_points_behind_camera() {
        assert!(Pinhole.project_dir(&Vector3::new(1.0_f64, 1.0, 0.0)).is_none());
        assert!(Pinhole
            .project_dir(&Vector3::new(1.0_f64, 1.0, -2.0))
            .is_none());
    }
}
