//! Synthetic demo scene with a per-pixel depth map.
//!
//! The scene is deliberately simple: a sky gradient, a checkerboard ground
//! plane, a distant sun disc and stripe, and a close foreground block with
//! a circular badge. Depths are in meters, chosen so the foreground sits
//! near a typical close-focus distance while the background is several
//! meters out.

use image::{Rgb, RgbImage};

/// Float-RGB image plus depth map, in row-major order.
#[derive(Debug, Clone)]
pub struct Scene {
    width: u32,
    height: u32,
    color: Vec<[f32; 3]>,
    depth: Vec<f32>,
}

impl Scene {
    /// Create a flat scene filled with `color` at `depth`.
    pub fn filled(width: u32, height: u32, color: [f32; 3], depth: f32) -> Self {
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            color: vec![color; n],
            depth: vec![depth; n],
        }
    }

    /// Build the standard demo scene.
    pub fn synthetic(width: u32, height: u32) -> Self {
        let mut scene = Self::filled(width, height, [0.0, 0.0, 0.0], 5.0);
        let (w, h) = (width as f32, height as f32);

        // Sky gradient.
        for y in 0..height {
            let t = y as f32 / (h - 1.0).max(1.0);
            let sky = [0.65 - 0.35 * t, 0.85 - 0.45 * t, 1.0];
            for x in 0..width {
                scene.set(x, y, sky, 5.0);
            }
        }

        // Checkerboard ground plane.
        let ground_y = (h * 0.55) as u32;
        let tile = (width / 10).max(8);
        for y in ground_y..height {
            for x in 0..width {
                let even = ((x / tile) + (y / tile)) % 2 == 0;
                let shade = if even { 0.75 } else { 0.55 };
                scene.set(x, y, [shade, shade, shade], 6.0);
            }
        }

        // Sun disc, far background.
        scene.fill_disc(w * 0.8, h * 0.2, h * 0.2, [1.0, 0.9, 0.4], 8.0);

        // Distant dark stripe.
        let stripe_y0 = (h * 0.32) as u32;
        let stripe_y1 = (stripe_y0 + 10).min(height);
        for y in stripe_y0..stripe_y1 {
            for x in (w * 0.55) as u32..((w * 0.95) as u32).min(width) {
                scene.set(x, y, [0.1, 0.1, 0.1], 7.0);
            }
        }

        // Foreground block with a circular badge.
        for y in (h * 0.35) as u32..((h * 0.8) as u32).min(height) {
            for x in (w * 0.15) as u32..((w * 0.45) as u32).min(width) {
                scene.set(x, y, [0.2, 0.4, 0.9], 1.2);
            }
        }
        scene.fill_disc(w * 0.3, h * 0.55, h * 0.18, [0.97, 0.97, 0.97], 1.0);

        scene
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    fn set(&mut self, x: u32, y: u32, color: [f32; 3], depth: f32) {
        let i = self.idx(x, y);
        self.color[i] = color;
        self.depth[i] = depth;
    }

    fn fill_disc(&mut self, cx: f32, cy: f32, r: f32, color: [f32; 3], depth: f32) {
        let x0 = (cx - r).max(0.0) as u32;
        let x1 = ((cx + r) as u32 + 1).min(self.width);
        let y0 = (cy - r).max(0.0) as u32;
        let y1 = ((cy + r) as u32 + 1).min(self.height);
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set(x, y, color, depth);
                }
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Depth at a pixel.
    pub fn depth_at(&self, x: u32, y: u32) -> f32 {
        self.depth[self.idx(x, y)]
    }

    /// Minimum and maximum depth over the scene.
    pub fn depth_range(&self) -> (f32, f32) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &d in &self.depth {
            min = min.min(d);
            max = max.max(d);
        }
        (min, max)
    }

    /// Convert the float color buffer to an 8-bit RGB image.
    pub fn to_image(&self) -> RgbImage {
        let mut img = RgbImage::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.color[self.idx(x, y)];
                img.put_pixel(x, y, Rgb(quantize(c)));
            }
        }
        img
    }
}

fn quantize(c: [f32; 3]) -> [u8; 3] {
    let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [q(c[0]), q(c[1]), q(c[2])]
}
