//! Rendering support for `defocus-rs`.
//!
//! This crate contains:
//! - a synthetic demo scene with a per-pixel depth map,
//! - depth-layered defocus rendering driven by the thin-lens model,
//! - side-by-side comparison panels and projected-point scatter plots,
//! - a schematic pinhole-vs-lens ray diagram.
//!
//! All output goes through [`image`] RGB buffers; callers decide where to
//! save them.

mod draw;

/// Depth-layered defocus rendering.
pub mod defocus;
/// Schematic ray diagrams.
pub mod diagram;
/// Comparison panels and scatter plots.
pub mod panel;
/// Synthetic scene with depth map.
pub mod scene;

pub use defocus::*;
pub use diagram::*;
pub use panel::*;
pub use scene::*;
