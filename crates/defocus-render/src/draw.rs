//! Minimal rasterization helpers for diagrams and scatter panels.

use image::{Rgb, RgbImage};

pub(crate) fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Filled disc, clipped to the image bounds.
pub(crate) fn fill_circle(img: &mut RgbImage, cx: f64, cy: f64, r: f64, color: Rgb<u8>) {
    let r = r.max(0.5);
    let x0 = (cx - r).floor() as i64;
    let x1 = (cx + r).ceil() as i64;
    let y0 = (cy - r).floor() as i64;
    let y1 = (cy + r).ceil() as i64;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= r * r {
                put(img, x, y, color);
            }
        }
    }
}

/// Line segment of the given thickness, drawn by stepping along its length.
pub(crate) fn draw_line(
    img: &mut RgbImage,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    thickness: f64,
    color: Rgb<u8>,
) {
    let len = ((x1 - x0).powi(2) + (y1 - y0).powi(2)).sqrt();
    let steps = (len.ceil() as usize).max(1) * 2;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        fill_circle(img, x, y, thickness * 0.5, color);
    }
}

/// Ellipse outline traced by parameter stepping.
pub(crate) fn draw_ellipse(
    img: &mut RgbImage,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    thickness: f64,
    color: Rgb<u8>,
) {
    let steps = ((rx.max(ry) * std::f64::consts::TAU).ceil() as usize).max(16);
    for i in 0..steps {
        let a = std::f64::consts::TAU * i as f64 / steps as f64;
        let x = cx + rx * a.cos();
        let y = cy + ry * a.sin();
        fill_circle(img, x, y, thickness * 0.5, color);
    }
}
