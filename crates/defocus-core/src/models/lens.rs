use serde::{Deserialize, Serialize};

use crate::{DomainError, Real};

/// Thin-lens parameters.
///
/// Units are not prescribed; focal length, focus distance and the derived
/// blur sizes are all expressed in the same length unit. Depths of scene
/// points handed to the engine must use that unit as well.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ThinLens {
    /// Focal length f.
    pub focal_length: Real,
    /// f-number N (focal length over aperture diameter).
    pub f_number: Real,
    /// Distance to the plane of perfect focus.
    pub focus_distance: Real,
}

/// Near/far limits of acceptable sharpness for a focused thin lens.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DofBounds {
    /// Nearest acceptably sharp distance.
    pub near: Real,
    /// Farthest acceptably sharp distance (`f64::INFINITY` at or beyond the
    /// hyperfocal distance).
    pub far: Real,
}

impl DofBounds {
    /// Width of the acceptably sharp interval.
    pub fn width(&self) -> Real {
        self.far - self.near
    }

    /// Whether a given object distance falls inside the bounds.
    pub fn contains(&self, distance: Real) -> bool {
        distance >= self.near && distance <= self.far
    }

    /// True when everything up to infinity is acceptably sharp.
    pub fn is_far_unbounded(&self) -> bool {
        self.far.is_infinite()
    }
}

impl ThinLens {
    /// Check the `f, N, d_o > 0` invariants.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.focal_length <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "focal_length",
                value: self.focal_length,
            });
        }
        if self.f_number <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "f_number",
                value: self.f_number,
            });
        }
        if self.focus_distance <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "focus_distance",
                value: self.focus_distance,
            });
        }
        Ok(())
    }

    /// Aperture diameter `A = f / N`.
    pub fn aperture(&self) -> Real {
        self.focal_length / self.f_number
    }

    /// Image distance for an object at `distance`, from the Gaussian lens
    /// equation `1/f = 1/d_o + 1/d_i`.
    ///
    /// An object closer than the focal length yields a negative (virtual)
    /// image distance; that is a valid solution of the equation and is
    /// returned as-is. Only `distance = f` (image at infinity) and
    /// non-positive distances are errors.
    pub fn image_distance_at(&self, distance: Real) -> Result<Real, DomainError> {
        if self.focal_length <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "focal_length",
                value: self.focal_length,
            });
        }
        if distance <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "object_distance",
                value: distance,
            });
        }
        let denom = distance - self.focal_length;
        if denom == 0.0 {
            return Err(DomainError::AtFocalLength { distance });
        }
        Ok(self.focal_length * distance / denom)
    }

    /// Image distance of the plane of perfect focus.
    pub fn image_distance(&self) -> Result<Real, DomainError> {
        self.image_distance_at(self.focus_distance)
    }

    /// Blur-disc diameter for an object at `distance`, on the sensor plane.
    ///
    /// Evaluates the lens equation at the object depth and at the focus
    /// distance, then applies [`circle_of_confusion`]. Zero for objects on
    /// the focus plane.
    pub fn defocus_diameter(&self, distance: Real) -> Result<Real, DomainError> {
        self.validate()?;
        let d_i_focus = self.image_distance()?;
        let d_i = self.image_distance_at(distance)?;
        if d_i <= 0.0 {
            // Virtual image: no real blur disc forms on the sensor side.
            return Err(DomainError::OutOfRange {
                field: "image_distance",
                value: d_i,
            });
        }
        circle_of_confusion(self.aperture(), d_i, d_i_focus)
    }

    /// Hyperfocal distance `H = f^2 / (N * c_max) + f`.
    pub fn hyperfocal_distance(&self, coc_max: Real) -> Result<Real, DomainError> {
        self.validate()?;
        if coc_max <= 0.0 {
            return Err(DomainError::OutOfRange {
                field: "coc_max",
                value: coc_max,
            });
        }
        let f = self.focal_length;
        Ok(f * f / (self.f_number * coc_max) + f)
    }

    /// Depth-of-field bounds for a maximum acceptable blur-disc diameter.
    ///
    /// `near = d_o (H - f) / (H + d_o - 2f)` and
    /// `far = d_o (H - f) / (H - d_o)` while the focus distance stays short
    /// of the hyperfocal distance; focusing at or beyond it extends the far
    /// limit to infinity.
    pub fn depth_of_field(&self, coc_max: Real) -> Result<DofBounds, DomainError> {
        let h = self.hyperfocal_distance(coc_max)?;
        let f = self.focal_length;
        let d_o = self.focus_distance;

        let near = d_o * (h - f) / (h + d_o - 2.0 * f);
        let far = if d_o < h {
            d_o * (h - f) / (h - d_o)
        } else {
            Real::INFINITY
        };
        Ok(DofBounds { near, far })
    }
}

/// Blur-disc diameter `c = A * |d_i - d_i_focus| / d_i`.
///
/// `aperture` is the lens opening diameter, `image_distance` the image
/// distance of the object and `focus_image_distance` the image distance of
/// the focus plane (where the sensor sits). Fails when `image_distance`
/// is zero.
pub fn circle_of_confusion(
    aperture: Real,
    image_distance: Real,
    focus_image_distance: Real,
) -> Result<Real, DomainError> {
    if image_distance == 0.0 {
        return Err(DomainError::ZeroImageDistance);
    }
    Ok(aperture * (image_distance - focus_image_distance).abs() / image_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lens_50_1000(n: Real) -> ThinLens {
        ThinLens {
            focal_length: 50.0,
            f_number: n,
            focus_distance: 1000.0,
        }
    }

    #[test]
    fn gaussian_lens_equation_reference_value() {
        // 1/d_i = 1/50 - 1/1000 => d_i = 1000/19
        let d_i = lens_50_1000(2.8).image_distance().unwrap();
        assert!((d_i - 52.631578947368425).abs() < 1e-9, "d_i={d_i}");
    }

    #[test]
    fn focus_at_focal_length_is_rejected() {
        let lens = ThinLens {
            focal_length: 50.0,
            f_number: 2.8,
            focus_distance: 50.0,
        };
        match lens.image_distance() {
            Err(DomainError::AtFocalLength { distance }) => {
                assert!((distance - 50.0).abs() < 1e-12)
            }
            other => panic!("expected AtFocalLength, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let lens = lens_50_1000(2.8);
        assert!(matches!(
            lens.image_distance_at(0.0),
            Err(DomainError::OutOfRange {
                field: "object_distance",
                ..
            })
        ));
        assert!(matches!(
            lens.image_distance_at(-3.0),
            Err(DomainError::OutOfRange { .. })
        ));
    }

    #[test]
    fn in_focus_circle_of_confusion_is_zero() {
        let c = circle_of_confusion(5.0, 52.63, 52.63).unwrap();
        assert_eq!(c, 0.0);
    }

    #[test]
    fn zero_image_distance_is_rejected() {
        assert!(matches!(
            circle_of_confusion(5.0, 0.0, 52.63),
            Err(DomainError::ZeroImageDistance)
        ));
    }

    #[test]
    fn defocus_grows_away_from_focus_plane() {
        let lens = lens_50_1000(2.8);
        let near = lens.defocus_diameter(400.0).unwrap();
        let nearer = lens.defocus_diameter(200.0).unwrap();
        let far = lens.defocus_diameter(4000.0).unwrap();
        let farther = lens.defocus_diameter(8000.0).unwrap();
        assert!(lens.defocus_diameter(1000.0).unwrap().abs() < 1e-12);
        assert!(nearer > near && near > 0.0);
        assert!(farther > far && far > 0.0);
    }

    #[test]
    fn stopping_down_widens_depth_of_field() {
        let coc = 0.03;
        let wide_open = lens_50_1000(1.4).depth_of_field(coc).unwrap();
        let stopped = lens_50_1000(8.0).depth_of_field(coc).unwrap();
        assert!(stopped.width() > wide_open.width());
        assert!(stopped.near < wide_open.near);
        assert!(stopped.far > wide_open.far);
    }

    #[test]
    fn bounds_bracket_the_focus_distance() {
        let lens = lens_50_1000(4.0);
        let dof = lens.depth_of_field(0.03).unwrap();
        assert!(dof.near < lens.focus_distance);
        assert!(dof.far > lens.focus_distance);
        assert!(dof.contains(lens.focus_distance));
    }

    #[test]
    fn focusing_past_hyperfocal_unbounds_the_far_limit() {
        let lens = lens_50_1000(8.0);
        let h = lens.hyperfocal_distance(0.03).unwrap();
        let past = ThinLens {
            focus_distance: h * 1.5,
            ..lens
        };
        let dof = past.depth_of_field(0.03).unwrap();
        assert!(dof.is_far_unbounded());
    }

    #[test]
    fn invalid_parameters_name_the_field() {
        let lens = ThinLens {
            focal_length: 50.0,
            f_number: -1.0,
            focus_distance: 1000.0,
        };
        match lens.depth_of_field(0.03) {
            Err(DomainError::OutOfRange { field, value }) => {
                assert_eq!(field, "f_number");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }
}
