//! # Shape Parameters
//!
//! Designer-facing inputs of a field-of-view fan. Values coming from an
//! editor are often out of range while being tuned, so the lenient
//! constructor clamps instead of failing; `try_new` only rejects values
//! that cannot be clamped meaningfully (NaN, infinities).

use std::f64::consts::FRAC_PI_2;

use ::config::constants::{DEFAULT_THICKNESS, EPSILON, MIN_RESOLUTION};
use serde::{Deserialize, Serialize};

use crate::error::{FovError, FovResult};

/// Inputs of a single fan build.
///
/// # Example
///
/// ```rust
/// use fov_mesh::ShapeParameters;
///
/// let params = ShapeParameters::new(10.0, 20f64.to_radians(), 4.0, 0.2, 1);
/// assert_eq!(params.resolution, 1);
/// assert!(params.thickness < params.range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Distance from the formation line to the front edge.
    pub range: f64,
    /// Angle of the side borders, in radians, within `[0, π/2]`.
    pub half_angle: f64,
    /// Formation width, the length of the front edge.
    pub width: f64,
    /// Distance between the outer and inner ribbon boundary.
    pub thickness: f64,
    /// Subdivision multiplier applied to every segment count.
    pub resolution: u32,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            range: 10.0,
            half_angle: 20f64.to_radians(),
            width: 4.0,
            thickness: DEFAULT_THICKNESS,
            resolution: MIN_RESOLUTION,
        }
    }
}

impl ShapeParameters {
    /// Creates parameters, clamping every value into its valid range.
    ///
    /// - NaN or infinite values fall back to the [`Default`] shape's value
    /// - `range` is floored at a tiny positive value
    /// - `half_angle` is clamped to `[0, π/2]`
    /// - `width` is floored at zero
    /// - `thickness` is kept positive and below `range` (half the range when it was not)
    /// - `resolution` is floored at 1
    pub fn new(range: f64, half_angle: f64, width: f64, thickness: f64, resolution: u32) -> Self {
        let defaults = Self::default();
        let range = finite_or(range, defaults.range).max(EPSILON);
        let half_angle = finite_or(half_angle, defaults.half_angle).clamp(0.0, FRAC_PI_2);
        let width = finite_or(width, defaults.width).max(0.0);
        let mut thickness = finite_or(thickness, defaults.thickness).max(EPSILON);
        if thickness >= range {
            thickness = range * 0.5;
        }
        let resolution = resolution.max(MIN_RESOLUTION);

        Self {
            range,
            half_angle,
            width,
            thickness,
            resolution,
        }
    }

    /// Creates parameters, rejecting NaN or infinite inputs and clamping the rest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fov_mesh::ShapeParameters;
    ///
    /// assert!(ShapeParameters::try_new(10.0, 0.3, f64::INFINITY, 0.2, 1).is_err());
    /// assert!(ShapeParameters::try_new(10.0, 0.3, 4.0, 0.2, 1).is_ok());
    /// ```
    pub fn try_new(
        range: f64,
        half_angle: f64,
        width: f64,
        thickness: f64,
        resolution: u32,
    ) -> FovResult<Self> {
        for (name, value) in [
            ("range", range),
            ("half_angle", half_angle),
            ("width", width),
            ("thickness", thickness),
        ] {
            if !value.is_finite() {
                return Err(FovError::NonFiniteParameter { name, value });
            }
        }
        Ok(Self::new(range, half_angle, width, thickness, resolution))
    }

    /// Returns a clamped copy; parameters deserialized or edited in place
    /// go through here before a build.
    pub fn sanitized(&self) -> Self {
        Self::new(
            self.range,
            self.half_angle,
            self.width,
            self.thickness,
            self.resolution,
        )
    }

    /// Returns true when clamping would change any value.
    pub fn needs_clamping(&self) -> bool {
        let clamped = self.sanitized();
        // NaN fields never compare equal, which also reports them here
        clamped != *self
    }

    /// Returns a copy with a different formation width.
    pub fn with_width(&self, width: f64) -> Self {
        Self::new(self.range, self.half_angle, width, self.thickness, self.resolution)
    }

    /// Radius of the inner boundary arc.
    #[inline]
    pub fn inner_range(&self) -> f64 {
        self.range - self.thickness
    }
}

#[inline]
fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
