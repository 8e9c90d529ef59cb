//! Depth-layered defocus rendering.
//!
//! The pinhole rendition is the scene itself: every depth is sharp. The
//! lens rendition quantizes the depth map into a small number of layers,
//! blurs each layer with a Gaussian whose size comes from the thin-lens
//! circle of confusion at the layer's depth, and composites the layers
//! back by depth mask.

use anyhow::Result;
use defocus_core::{Real, ThinLens};
use image::RgbImage;

use crate::Scene;

/// Number of depth layers used when quantizing the depth map.
const DEPTH_LAYERS: usize = 8;

/// Gaussian sigmas below this are visually indistinguishable from sharp.
const MIN_SIGMA: f32 = 0.05;

/// Pinhole camera rendition: everything is sharp.
pub fn render_pinhole(scene: &Scene) -> RgbImage {
    scene.to_image()
}

/// Thin-lens rendition with depth-dependent defocus blur.
///
/// `px_per_unit` converts the sensor-plane blur size into pixels (the
/// engine's `fx / f` scale). Layers whose depth the lens cannot image
/// (virtual image side) are rendered sharp and logged.
pub fn render_defocus(scene: &Scene, lens: &ThinLens, px_per_unit: Real) -> Result<RgbImage> {
    lens.validate()?;

    let sharp = scene.to_image();
    let (min_depth, max_depth) = scene.depth_range();
    let span = (max_depth - min_depth).max(f32::EPSILON);

    let layer_of = |depth: f32| -> usize {
        let t = ((depth - min_depth) / span) * DEPTH_LAYERS as f32;
        (t as usize).min(DEPTH_LAYERS - 1)
    };

    // One blurred copy per layer, sized by the circle of confusion at the
    // layer's mid depth.
    let mut layers: Vec<RgbImage> = Vec::with_capacity(DEPTH_LAYERS);
    for layer in 0..DEPTH_LAYERS {
        let mid = min_depth + span * (layer as f32 + 0.5) / DEPTH_LAYERS as f32;
        let sigma = match lens.defocus_diameter(mid as Real) {
            Ok(diameter) => (0.5 * diameter * px_per_unit) as f32,
            Err(err) => {
                log::warn!("layer {layer} (depth {mid:.3}) rendered sharp: {err}");
                0.0
            }
        };
        if sigma < MIN_SIGMA {
            layers.push(sharp.clone());
        } else {
            layers.push(image::imageops::blur(&sharp, sigma));
        }
    }

    let mut out = RgbImage::new(scene.width(), scene.height());
    for y in 0..scene.height() {
        for x in 0..scene.width() {
            let layer = layer_of(scene.depth_at(x, y));
            out.put_pixel(x, y, *layers[layer].get_pixel(x, y));
        }
    }
    Ok(out)
}
