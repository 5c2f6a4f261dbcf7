//! Formation row feeding the fan width.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One row of a unit formation.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use fov_mesh::FormationRow;
///
/// let row = FormationRow::new(6, DVec2::ONE, 0.5);
/// assert_eq!(row.width(), 8.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormationRow {
    /// Units side by side, at least one.
    pub unit_count: u32,
    /// Footprint of one unit; `x` is its width across the row.
    pub unit_size: DVec2,
    /// Gap between neighbouring units, never negative.
    pub spacing: f64,
}

impl Default for FormationRow {
    fn default() -> Self {
        Self {
            unit_count: 6,
            unit_size: DVec2::ONE,
            spacing: 0.0,
        }
    }
}

impl FormationRow {
    /// Creates a row, flooring the unit count at one and the spacing at zero.
    pub fn new(unit_count: u32, unit_size: DVec2, spacing: f64) -> Self {
        Self {
            unit_count: unit_count.max(1),
            unit_size: unit_size.max(DVec2::ZERO),
            spacing: spacing.max(0.0),
        }
    }

    /// Width of the row from the first unit's left edge to the last one's right edge.
    pub fn width(&self) -> f64 {
        let count = f64::from(self.unit_count.max(1));
        count * self.unit_size.x + (count - 1.0) * self.spacing
    }

    /// Returns a row with a different unit count.
    pub fn with_unit_count(&self, unit_count: u32) -> Self {
        Self::new(unit_count, self.unit_size, self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unit_has_no_spacing() {
        let row = FormationRow::new(1, DVec2::new(2.0, 1.0), 3.0);
        assert_eq!(row.width(), 2.0);
    }

    #[test]
    fn test_width_counts_gaps_between_units() {
        let row = FormationRow::new(4, DVec2::new(1.5, 1.0), 0.25);
        assert_eq!(row.width(), 4.0 * 1.5 + 3.0 * 0.25);
    }

    #[test]
    fn test_invalid_values_are_floored() {
        let row = FormationRow::new(0, DVec2::new(-1.0, 1.0), -2.0);
        assert_eq!(row.unit_count, 1);
        assert_eq!(row.spacing, 0.0);
        assert_eq!(row.width(), 0.0);
    }

    #[test]
    fn test_growing_the_row_widens_it() {
        let row = FormationRow::default();
        assert!(row.with_unit_count(8).width() > row.width());
    }
}
