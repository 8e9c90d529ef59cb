//! Camera and lens model building blocks.
//!
//! Pixel formation is a two-stage pipeline:
//!
//! 1. `ProjectionModel`: map a 3D ray to normalized coordinates (pinhole).
//! 2. `IntrinsicsModel`: map normalized coordinates to pixels (K matrix).
//!
//! The combined mapping is `pixel = intrinsics(projection(dir))`.
//!
//! Defocus is modelled separately by [`ThinLens`], which relates object
//! depth to image distance and blur size. [`SimCamera`] ties both together.
//!
//! Parameter structs are provided for JSON serialization and for
//! constructing concrete engines with f64 precision.

mod camera;
mod intrinsics;
mod lens;
mod params;
mod projection;

pub use camera::*;
pub use intrinsics::*;
pub use lens::*;
pub use params::*;
pub use projection::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pt3;

    #[test]
    fn roundtrip_backproject_project() {
        let params = CameraParams {
            projection: ProjectionParams::Pinhole,
            intrinsics: IntrinsicsParams::FxFyCxCy {
                params: FxFyCxCy {
                    fx: 800.0,
                    fy: 810.0,
                    cx: 640.0,
                    cy: 360.0,
                },
            },
            lens: ThinLens {
                focal_length: 50.0,
                f_number: 2.8,
                focus_distance: 1200.0,
            },
        };
        let engine = params.build().unwrap();

        let px = crate::Vec2::new(1000.0, 200.0);
        let p = engine.camera().back_project(&px, 2.5).unwrap();
        let px2 = engine.camera().project_point(&p).unwrap();

        let err = (px2 - px).norm();
        assert!(err < 1e-9, "err={err}");
    }

    #[test]
    fn in_focus_point_has_zero_blur() {
        let params = CameraParams {
            projection: ProjectionParams::Pinhole,
            intrinsics: IntrinsicsParams::FxFyCxCy {
                params: FxFyCxCy {
                    fx: 800.0,
                    fy: 800.0,
                    cx: 640.0,
                    cy: 360.0,
                },
            },
            lens: ThinLens {
                focal_length: 50.0,
                f_number: 4.0,
                focus_distance: 1000.0,
            },
        };
        let engine = params.build().unwrap();

        let projected = engine
            .project_with_blur(&Pt3::new(120.0, -60.0, 1000.0))
            .unwrap();
        assert!(projected.blur_radius.abs() < 1e-12);
    }
}
