//! Scene-point collections and projection results.
//!
//! [`PointSet`] is the canonical input shape for batch projection: a list of
//! camera-frame 3D points, serialized as a JSON array of `[x, y, z]`
//! triples. [`ProjectedPoint`] is the per-point result record.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::{Pt3, Real};

/// A projected scene point: pixel location plus defocus blur radius.
///
/// `blur_radius` is in pixels; it is zero for the pinhole rendition of the
/// same point and for points on the focus plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Pixel column.
    pub u: Real,
    /// Pixel row.
    pub v: Real,
    /// Defocus blur radius in pixels.
    pub blur_radius: Real,
}

/// A validated collection of camera-frame scene points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Pt3>,
}

impl PointSet {
    /// Construct a point set.
    ///
    /// # Errors
    ///
    /// Returns an error when the collection is empty or any coordinate is
    /// non-finite.
    pub fn new(points: Vec<Pt3>) -> Result<Self> {
        ensure!(!points.is_empty(), "need at least one point");
        for (idx, p) in points.iter().enumerate() {
            ensure!(
                p.x.is_finite() && p.y.is_finite() && p.z.is_finite(),
                "point {} has a non-finite coordinate: ({}, {}, {})",
                idx,
                p.x,
                p.y,
                p.z
            );
        }
        Ok(Self { points })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set is empty (never true for a validated set).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points as a slice.
    pub fn points(&self) -> &[Pt3] {
        &self.points
    }
}
