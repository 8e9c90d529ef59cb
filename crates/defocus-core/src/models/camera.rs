use super::{FxFyCxCy, IntrinsicsModel, Pinhole, ProjectionModel, ThinLens};
use crate::{DomainError, ProjectedPoint, Pt3, Real, Vec2, Vec3};

/// Geometric camera: projection model plus intrinsics.
#[derive(Clone, Copy, Debug)]
pub struct PinholeCamera<P, K>
where
    P: ProjectionModel<Real>,
    K: IntrinsicsModel<Real>,
{
    pub proj: P,
    pub k: K,
}

impl<P, K> PinholeCamera<P, K>
where
    P: ProjectionModel<Real>,
    K: IntrinsicsModel<Real>,
{
    pub fn new(proj: P, k: K) -> Self {
        Self { proj, k }
    }

    /// Project a camera-frame point to pixel coordinates.
    ///
    /// Fails when the point sits at or behind the camera plane.
    pub fn project_point(&self, p_c: &Pt3) -> Result<Vec2, DomainError> {
        let n = self
            .proj
            .project_dir(&p_c.coords)
            .ok_or(DomainError::BehindCamera { z: p_c.z })?;
        Ok(self.k.normalized_to_pixel(&n))
    }

    /// Unit-norm viewing ray through a pixel.
    pub fn ray(&self, px: &Vec2) -> Vec3 {
        let n = self.k.pixel_to_normalized(px);
        let dir = self.proj.unproject_dir(&n);
        dir / dir.norm()
    }

    /// Recover the camera-frame point imaged at `px` given its known depth.
    pub fn back_project(&self, px: &Vec2, z: Real) -> Result<Pt3, DomainError> {
        if z <= 0.0 {
            return Err(DomainError::BehindCamera { z });
        }
        let n = self.k.pixel_to_normalized(px);
        let dir = self.proj.unproject_dir(&n);
        // unproject_dir yields the z=1 ray; scale it to the requested depth.
        let scaled = dir * (z / dir.z);
        Ok(Pt3::from(scaled))
    }
}

/// Simulation engine combining pinhole geometry with a thin lens.
///
/// Both camera models share the same geometry, so a point lands on the same
/// pixel either way; the lens additionally spreads it over a blur disc. The
/// sensor-plane blur diameter is converted to pixels with the `fx / f`
/// scale (pixels per length unit on the sensor).
#[derive(Clone, Copy, Debug)]
pub struct SimCamera {
    camera: PinholeCamera<Pinhole, FxFyCxCy<Real>>,
    lens: ThinLens,
}

impl SimCamera {
    /// Build an engine after checking the intrinsics and lens invariants.
    pub fn new(k: FxFyCxCy<Real>, lens: ThinLens) -> Result<Self, DomainError> {
        k.validate()?;
        lens.validate()?;
        Ok(Self {
            camera: PinholeCamera::new(Pinhole, k),
            lens,
        })
    }

    pub fn camera(&self) -> &PinholeCamera<Pinhole, FxFyCxCy<Real>> {
        &self.camera
    }

    pub fn lens(&self) -> &ThinLens {
        &self.lens
    }

    /// Pixels per length unit on the sensor plane.
    pub fn pixels_per_unit(&self) -> Real {
        self.camera.k.fx / self.lens.focal_length
    }

    /// Project one point and attach its defocus blur radius in pixels.
    pub fn project_with_blur(&self, p_c: &Pt3) -> Result<ProjectedPoint, DomainError> {
        let uv = self.camera.project_point(p_c)?;
        let diameter = self.lens.defocus_diameter(p_c.z)?;
        Ok(ProjectedPoint {
            u: uv.x,
            v: uv.y,
            blur_radius: 0.5 * diameter * self.pixels_per_unit(),
        })
    }

    /// Project every point, failing on the first non-projectable one.
    pub fn project_all(&self, points: &[Pt3]) -> Result<Vec<ProjectedPoint>, DomainError> {
        points.iter().map(|p| self.project_with_blur(p)).collect()
    }

    /// Project the points that are projectable, skipping the rest.
    ///
    /// Each skipped point is logged with its index and the domain failure;
    /// no partial record is emitted for it. Returned entries carry the index
    /// of the source point.
    pub fn project_visible(&self, points: &[Pt3]) -> Vec<(usize, ProjectedPoint)> {
        let mut out = Vec::with_capacity(points.len());
        for (idx, p) in points.iter().enumerate() {
            match self.project_with_blur(p) {
                Ok(projected) => out.push((idx, projected)),
                Err(err) => log::warn!("skipping point {idx}: {err}"),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SimCamera {
        let k = FxFyCxCy {
            fx: 800.0,
            fy: 800.0,
            cx: 640.0,
            cy: 360.0,
        };
        let lens = ThinLens {
            focal_length: 50.0,
            f_number: 2.8,
            focus_distance: 1000.0,
        };
        SimCamera::new(k, lens).unwrap()
    }

    #[test]
    fn unit_intrinsics_give_normalized_coordinates() {
        let cam = PinholeCamera::new(
            Pinhole,
            FxFyCxCy {
                fx: 1.0,
                fy: 1.0,
                cx: 0.0,
                cy: 0.0,
            },
        );
        let px = cam.project_point(&Pt3::new(3.0, -4.0, 2.0)).unwrap();
        assert!((px.x - 1.5).abs() < 1e-12);
        assert!((px.y + 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_depth_is_a_domain_error() {
        let cam = engine();
        match cam.camera().project_point(&Pt3::new(1.0, 1.0, 0.0)) {
            Err(DomainError::BehindCamera { z }) => assert_eq!(z, 0.0),
            other => panic!("expected BehindCamera, got {other:?}"),
        }
    }

    #[test]
    fn back_projection_recovers_the_point() {
        let cam = engine();
        let p = Pt3::new(120.0, -75.0, 1800.0);
        let px = cam.camera().project_point(&p).unwrap();
        let p2 = cam.camera().back_project(&px, p.z).unwrap();
        assert!((p - p2).norm() < 1e-9);
    }

    #[test]
    fn visible_projection_skips_bad_points() {
        let cam = engine();
        let points = vec![
            Pt3::new(100.0, 0.0, 1000.0),
            Pt3::new(0.0, 0.0, -5.0),
            Pt3::new(-40.0, 20.0, 2000.0),
        ];
        let visible = cam.project_visible(&points);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].0, 0);
        assert_eq!(visible[1].0, 2);
        assert!(visible[0].1.blur_radius.abs() < 1e-12);
        assert!(visible[1].1.blur_radius > 0.0);
    }
}
