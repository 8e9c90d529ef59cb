//! Comparison panels and projected-point scatter plots.

use defocus_core::ProjectedPoint;
use image::{Rgb, RgbImage};

use crate::draw;

/// Marker color for pinhole points.
pub const PINHOLE_COLOR: Rgb<u8> = Rgb([31, 119, 180]);
/// Marker color for lens points.
pub const LENS_COLOR: Rgb<u8> = Rgb([214, 39, 40]);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const SEPARATOR: Rgb<u8> = Rgb([40, 40, 40]);

/// Compose two equally sized images side by side with a separator column.
pub fn comparison_panel(left: &RgbImage, right: &RgbImage) -> RgbImage {
    let h = left.height().max(right.height());
    let sep = 2;
    let w = left.width() + sep + right.width();
    let mut out = RgbImage::from_pixel(w, h, BACKGROUND);

    image::imageops::overlay(&mut out, left, 0, 0);
    for y in 0..h {
        for x in 0..sep {
            out.put_pixel(left.width() + x, y, SEPARATOR);
        }
    }
    image::imageops::overlay(&mut out, right, (left.width() + sep) as i64, 0);
    out
}

/// Plot projected points on a white canvas.
///
/// Each point is a disc centered on its pixel location. With `use_blur`
/// the disc radius is the point's blur radius (at least one pixel so the
/// point stays visible); without it every point is a sharp dot, the
/// pinhole rendition.
pub fn scatter_panel(
    points: &[ProjectedPoint],
    width: u32,
    height: u32,
    use_blur: bool,
    color: Rgb<u8>,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);
    for p in points {
        let r = if use_blur { p.blur_radius.max(1.0) } else { 1.0 };
        draw::fill_circle(&mut img, p.u, p.v, r, color);
    }
    img
}

/// Two-panel pinhole-vs-lens scatter comparison for one projected set.
pub fn compare_scatter(points: &[ProjectedPoint], width: u32, height: u32) -> RgbImage {
    let pinhole = scatter_panel(points, width, height, false, PINHOLE_COLOR);
    let lens = scatter_panel(points, width, height, true, LENS_COLOR);
    comparison_panel(&pinhole, &lens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<ProjectedPoint> {
        vec![
            ProjectedPoint {
                u: 20.0,
                v: 20.0,
                blur_radius: 0.0,
            },
            ProjectedPoint {
                u: 50.0,
                v: 30.0,
                blur_radius: 6.0,
            },
        ]
    }

    #[test]
    fn panel_widths_add_up() {
        let points = sample_points();
        let out = compare_scatter(&points, 100, 60);
        assert_eq!(out.dimensions(), (202, 60));
    }

    #[test]
    fn blurred_point_covers_a_larger_disc() {
        let points = sample_points();
        let lens = scatter_panel(&points, 100, 60, true, LENS_COLOR);
        // 5 pixels out from the blurred center is still inside its disc.
        assert_eq!(lens.get_pixel(55, 30), &LENS_COLOR);
        // The sharp point is a single dot; 5 pixels out is background.
        assert_ne!(lens.get_pixel(25, 20), &LENS_COLOR);
    }

    #[test]
    fn points_outside_the_canvas_are_clipped() {
        let points = vec![ProjectedPoint {
            u: -50.0,
            v: -50.0,
            blur_radius: 3.0,
        }];
        let out = scatter_panel(&points, 40, 40, true, LENS_COLOR);
        assert!(out.pixels().all(|p| *p == BACKGROUND));
    }
}
