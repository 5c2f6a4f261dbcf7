//! # Geometry Plan
//!
//! Tessellation bookkeeping for the fan ribbon: how many quads each boundary
//! section gets, how many vertices that produces and where each section
//! lives in the vertex buffer.
//!
//! ## Buffer Layout
//!
//! ```text
//! [left border][left arc][front][right arc][right border]
//!  (outer, inner) pairs throughout; the right half is the mirrored left half
//!  written from the far end of the buffer.
//! ```
//!
//! ## Counts
//!
//! ```text
//! border = resolution * round(range)                 (>= 1)
//! arc    = resolution * max(round((π/2 - a) * range), 0)
//! front  = resolution * max(round(width), 1)
//! ```
//!
//! Each section is capped at `MAX_SECTION_QUADS`, so the vertex count always
//! fits 32-bit indices.
//!
//! Quad counts use round-half-to-even so outer and inner boundaries get the
//! same subdivision for any input.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use ::config::constants::{needs_wide_indices, MAX_SECTION_QUADS, MIN_RESOLUTION};

use crate::params::ShapeParameters;

// =============================================================================
// INDEX FORMAT
// =============================================================================

/// Width of the integers stored in the index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    /// 16-bit indices.
    U16,
    /// 32-bit indices.
    U32,
}

impl IndexFormat {
    /// Picks the narrowest format able to address `vertex_count` vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fov_mesh::IndexFormat;
    ///
    /// assert_eq!(IndexFormat::for_vertex_count(100), IndexFormat::U16);
    /// assert_eq!(IndexFormat::for_vertex_count(40_000), IndexFormat::U32);
    /// ```
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if needs_wide_indices(vertex_count) {
            IndexFormat::U32
        } else {
            IndexFormat::U16
        }
    }

    /// Size of one index in bytes.
    pub fn byte_size(self) -> usize {
        match self {
            IndexFormat::U16 => 2,
            IndexFormat::U32 => 4,
        }
    }
}

// =============================================================================
// GEOMETRY PLAN
// =============================================================================

/// Segment, vertex and triangle counts of one fan build.
///
/// Vertex counts of the border and arc sections cover one side only; the
/// mirrored side has the same count.
///
/// # Example
///
/// ```rust
/// use fov_mesh::{GeometryPlan, ShapeParameters};
///
/// let params = ShapeParameters::new(10.0, 0.3491, 4.0, 0.2, 1);
/// let plan = GeometryPlan::compute(&params);
/// assert_eq!(plan.border_quad_count, 10);
/// assert_eq!(plan.front_quad_count, 4);
/// assert_eq!(plan.index_count, 3 * (plan.vertex_count - 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryPlan {
    /// Quads along one side border.
    pub border_quad_count: usize,
    /// Quads along one rounded corner.
    pub arc_quad_count: usize,
    /// Quads along the front edge.
    pub front_quad_count: usize,
    /// Vertices of one side border (outer and inner).
    pub border_vertex_count: usize,
    /// Vertices of one rounded corner, seam vertices excluded.
    pub arc_vertex_count: usize,
    /// Vertices of the front edge.
    pub front_vertex_count: usize,
    /// Vertices of the whole ribbon.
    pub vertex_count: usize,
    /// Triangles of the zig-zag strip.
    pub triangle_count: usize,
    /// Length of the index buffer.
    pub index_count: usize,
    /// Index width required by `vertex_count`.
    pub index_format: IndexFormat,
}

/// Computes the plan from raw shape values.
///
/// `thickness` does not influence any count; it is accepted so the plan and
/// the builder share one parameter list. Out-of-range values are clamped.
pub fn compute_plan(
    range: f64,
    half_angle: f64,
    width: f64,
    thickness: f64,
    resolution: u32,
) -> GeometryPlan {
    GeometryPlan::compute(&ShapeParameters::new(
        range, half_angle, width, thickness, resolution,
    ))
}

impl GeometryPlan {
    /// Computes the plan for `params`, clamping any out-of-range value first.
    pub fn compute(params: &ShapeParameters) -> Self {
        let params = params.sanitized();
        let resolution = params.resolution.max(MIN_RESOLUTION) as usize;

        let border_quad_count = section_quads(resolution, params.range).max(1);
        let arc_quad_count = section_quads(resolution, (FRAC_PI_2 - params.half_angle) * params.range);
        // A zero-width formation still gets one front quad per resolution step
        let front_quad_count = section_quads(resolution, params.width.max(1.0));

        let border_vertex_count = (border_quad_count + 1) * 2;
        // The first and last arc vertex coincide with the border end and the front start
        let arc_vertex_count = (arc_quad_count + 1).saturating_sub(2) * 2;
        let front_vertex_count = (front_quad_count + 1) * 2;

        let vertex_count = 2 * (border_vertex_count + arc_vertex_count) + front_vertex_count;
        let triangle_count = vertex_count.saturating_sub(2);

        let plan = Self {
            border_quad_count,
            arc_quad_count,
            front_quad_count,
            border_vertex_count,
            arc_vertex_count,
            front_vertex_count,
            vertex_count,
            triangle_count,
            index_count: triangle_count * 3,
            index_format: IndexFormat::for_vertex_count(vertex_count),
        };

        tracing::debug!(
            border = plan.border_quad_count,
            arc = plan.arc_quad_count,
            front = plan.front_quad_count,
            vertices = plan.vertex_count,
            format = ?plan.index_format,
            "Computed fan geometry plan"
        );

        plan
    }

    /// Total quad count around the ribbon, both sides included.
    #[inline]
    pub fn quad_count(&self) -> usize {
        2 * (self.border_quad_count + self.arc_quad_count) + self.front_quad_count
    }

    /// Number of outer/inner pairs on one side border.
    #[inline]
    pub fn border_pair_count(&self) -> usize {
        self.border_vertex_count / 2
    }

    /// Number of outer/inner pairs on one arc.
    #[inline]
    pub fn arc_pair_count(&self) -> usize {
        self.arc_vertex_count / 2
    }

    /// Number of outer/inner pairs on the front edge.
    #[inline]
    pub fn front_pair_count(&self) -> usize {
        self.front_vertex_count / 2
    }

    /// First buffer index of the left arc.
    #[inline]
    pub fn left_arc_start(&self) -> usize {
        self.border_vertex_count
    }

    /// First buffer index of the front edge.
    #[inline]
    pub fn front_start(&self) -> usize {
        self.border_vertex_count + self.arc_vertex_count
    }

    /// First buffer index of the right arc.
    #[inline]
    pub fn right_arc_start(&self) -> usize {
        self.front_start() + self.front_vertex_count
    }

    /// First buffer index of the right border.
    #[inline]
    pub fn right_border_start(&self) -> usize {
        self.right_arc_start() + self.arc_vertex_count
    }

    /// Number of vertices on the left half (border then arc).
    #[inline]
    pub fn side_vertex_count(&self) -> usize {
        self.border_vertex_count + self.arc_vertex_count
    }

    /// Buffer index holding the mirror image of left-side vertex `index`.
    ///
    /// Pairs are stored in reverse order from the far end while each pair keeps
    /// its (outer, inner) order, so the strip alternates outer/inner everywhere.
    /// Returns `None` for indices outside the left border and arc.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fov_mesh::{GeometryPlan, ShapeParameters};
    ///
    /// let plan = GeometryPlan::compute(&ShapeParameters::default());
    /// let last = plan.vertex_count - 1;
    /// assert_eq!(plan.mirrored_index(0), Some(last - 1));
    /// assert_eq!(plan.mirrored_index(1), Some(last));
    /// assert_eq!(plan.mirrored_index(plan.front_start()), None);
    /// ```
    pub fn mirrored_index(&self, index: usize) -> Option<usize> {
        if index >= self.side_vertex_count() {
            return None;
        }
        let pair = index / 2;
        Some(self.vertex_count - 2 - 2 * pair + index % 2)
    }
}

impl fmt::Display for GeometryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "border quads = {} | arc quads = {} | front quads = {} | quads = {} | \
             border vertices = {} | arc vertices = {} | front vertices = {} | vertices = {} | \
             triangles = {} | indices = {} ({:?})",
            self.border_quad_count,
            self.arc_quad_count,
            self.front_quad_count,
            self.quad_count(),
            self.border_vertex_count,
            self.arc_vertex_count,
            self.front_vertex_count,
            self.vertex_count,
            self.triangle_count,
            self.index_count,
            self.index_format,
        )
    }
}

/// Quads of one section: `resolution * round(length)`, capped at [`MAX_SECTION_QUADS`].
#[inline]
fn section_quads(resolution: usize, length: f64) -> usize {
    resolution
        .saturating_mul(round_to_count(length))
        .min(MAX_SECTION_QUADS)
}

/// Nearest-integer segment count of a continuous length, never negative.
#[inline]
fn round_to_count(value: f64) -> usize {
    let rounded = value.round_ties_even();
    if rounded > 0.0 {
        rounded as usize
    } else {
        0
    }
}
