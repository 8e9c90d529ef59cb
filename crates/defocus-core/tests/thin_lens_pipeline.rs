//! Integration tests for the combined pinhole + thin-lens engine.
//!
//! Validates that pixel geometry and defocus blur stay consistent across
//! the full pipeline: identical coordinates for both camera models, zero
//! blur exactly on the focus plane, and blur/depth-of-field agreement.

use defocus_core::{DomainError, FxFyCxCy, Pt3, SimCamera, ThinLens};

fn engine(f_number: f64, focus_distance: f64) -> SimCamera {
    let intrinsics = FxFyCxCy {
        fx: 800.0,
        fy: 780.0,
        cx: 640.0,
        cy: 360.0,
    };
    let lens = ThinLens {
        focal_length: 50.0,
        f_number,
        focus_distance,
    };
    SimCamera::new(intrinsics, lens).expect("engine should build")
}

#[test]
fn pinhole_and_lens_share_pixel_geometry() {
    let cam = engine(2.8, 1000.0);
    let points = [
        Pt3::new(0.0, 0.0, 500.0),
        Pt3::new(200.0, 100.0, 1000.0),
        Pt3::new(-150.0, -80.0, 2500.0),
        Pt3::new(300.0, -200.0, 6000.0),
    ];

    for point in points {
        let pinhole_px = cam.camera().project_point(&point).unwrap();
        let projected = cam.project_with_blur(&point).unwrap();
        assert!((projected.u - pinhole_px.x).abs() < 1e-12);
        assert!((projected.v - pinhole_px.y).abs() < 1e-12);
    }
}

#[test]
fn blur_vanishes_only_on_the_focus_plane() {
    let cam = engine(2.8, 1000.0);

    let focused = cam
        .project_with_blur(&Pt3::new(50.0, -20.0, 1000.0))
        .unwrap();
    assert!(focused.blur_radius.abs() < 1e-12);

    for z in [300.0, 700.0, 1500.0, 4000.0] {
        let projected = cam.project_with_blur(&Pt3::new(0.0, 0.0, z)).unwrap();
        assert!(
            projected.blur_radius > 0.0,
            "z={z} should be out of focus, blur={}",
            projected.blur_radius
        );
    }
}

#[test]
fn blur_is_small_inside_the_depth_of_field() {
    let cam = engine(4.0, 1000.0);
    let coc_max = 0.03;
    let dof = cam.lens().depth_of_field(coc_max).unwrap();
    let max_blur_px = 0.5 * coc_max * cam.pixels_per_unit();

    // Just inside each bound the blur stays within the acceptable disc;
    // well outside it exceeds the disc.
    for z in [dof.near * 1.01, dof.far * 0.99] {
        let projected = cam.project_with_blur(&Pt3::new(0.0, 0.0, z)).unwrap();
        assert!(
            projected.blur_radius <= max_blur_px + 1e-9,
            "z={z} blur={} max={max_blur_px}",
            projected.blur_radius
        );
    }
    let outside = cam
        .project_with_blur(&Pt3::new(0.0, 0.0, dof.near * 0.5))
        .unwrap();
    assert!(outside.blur_radius > max_blur_px);
}

#[test]
fn engine_rejects_invalid_lens_up_front() {
    let intrinsics = FxFyCxCy {
        fx: 800.0,
        fy: 800.0,
        cx: 640.0,
        cy: 360.0,
    };
    let lens = ThinLens {
        focal_length: 0.0,
        f_number: 2.8,
        focus_distance: 1000.0,
    };
    assert!(matches!(
        SimCamera::new(intrinsics, lens),
        Err(DomainError::OutOfRange {
            field: "focal_length",
            ..
        })
    ));
}
