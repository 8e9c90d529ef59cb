//! Schematic pinhole-vs-lens ray diagram.
//!
//! Two panels on one canvas: the left shows rays crossing at a pinhole,
//! the right shows rays refracted by a lens converging onto the image
//! plane. Geometry lives in a small abstract coordinate frame (x in 0..10,
//! y in 0..6) mapped into each panel.

use image::{Rgb, RgbImage};

use crate::draw;
use crate::panel::{LENS_COLOR, PINHOLE_COLOR};

const INK: Rgb<u8> = Rgb([0, 0, 0]);
const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

struct PanelFrame {
    x0: f64,
    y0: f64,
    w: f64,
    h: f64,
}

impl PanelFrame {
    fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        let px = self.x0 + x / 10.0 * self.w;
        let py = self.y0 + self.h - y / 6.0 * self.h;
        (px, py)
    }

    fn line(&self, img: &mut RgbImage, a: (f64, f64), b: (f64, f64), t: f64, c: Rgb<u8>) {
        let (x0, y0) = self.to_px(a.0, a.1);
        let (x1, y1) = self.to_px(b.0, b.1);
        draw::draw_line(img, x0, y0, x1, y1, t, c);
    }
}

/// Render the two-panel ray diagram.
pub fn ray_diagram(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, PAPER);
    let half = width as f64 / 2.0;
    let margin = 12.0;

    let frames = [
        PanelFrame {
            x0: margin,
            y0: margin,
            w: half - 2.0 * margin,
            h: height as f64 - 2.0 * margin,
        },
        PanelFrame {
            x0: half + margin,
            y0: margin,
            w: half - 2.0 * margin,
            h: height as f64 - 2.0 * margin,
        },
    ];

    for (i, frame) in frames.iter().enumerate() {
        // Object (arrow-less line) and image plane.
        frame.line(&mut img, (1.0, 1.0), (1.0, 5.0), 2.0, INK);
        frame.line(&mut img, (8.0, 0.5), (8.0, 5.5), 2.0, INK);

        if i == 0 {
            // Pinhole: rays cross at a single point and invert.
            let (px, py) = frame.to_px(5.0, 3.0);
            draw::fill_circle(&mut img, px, py, 3.0, INK);
            frame.line(&mut img, (1.0, 5.0), (5.0, 3.0), 1.5, PINHOLE_COLOR);
            frame.line(&mut img, (5.0, 3.0), (8.0, 1.5), 1.5, PINHOLE_COLOR);
            frame.line(&mut img, (1.0, 1.0), (5.0, 3.0), 1.5, PINHOLE_COLOR);
            frame.line(&mut img, (5.0, 3.0), (8.0, 4.5), 1.5, PINHOLE_COLOR);
        } else {
            // Lens: refracted rays converge on the image plane.
            let (cx, cy) = frame.to_px(5.0, 3.0);
            let (_, top) = frame.to_px(5.0, 4.5);
            draw::draw_ellipse(&mut img, cx, cy, frame.w * 0.02, cy - top, 2.0, INK);
            frame.line(&mut img, (1.0, 5.0), (5.0, 3.5), 1.5, LENS_COLOR);
            frame.line(&mut img, (5.0, 3.5), (8.0, 3.0), 1.5, LENS_COLOR);
            frame.line(&mut img, (1.0, 1.0), (5.0, 2.5), 1.5, LENS_COLOR);
            frame.line(&mut img, (5.0, 2.5), (8.0, 3.0), 1.5, LENS_COLOR);
        }
    }

    img
}
