//! # Shape Layout
//!
//! Continuous geometry of the left half of the fan, derived once per build
//! from the shape parameters and the plan, then threaded through the passes.
//!
//! ## Local Frame
//!
//! ```text
//!             front
//!         .-----------.
//!    arc /             \ arc
//!       /               \
//!       \ border  border /
//!        \               /
//!         o-------------o
//!     (-w/2, 0)      (w/2, 0)        +y forward, +x right
//! ```
//!
//! 2D points live in the ground plane; `x0y` lifts them to `(x, 0, y)`.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::{DVec2, DVec3};

use crate::params::ShapeParameters;
use crate::plan::GeometryPlan;

/// Derived start points, directions and steps of every boundary section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeLayout {
    /// Unit direction of the left border, pointing away from the formation line.
    pub border_direction: DVec2,
    /// Outer boundary start of the left border, also the left arc center.
    pub outer_border_start: DVec2,
    /// Inner boundary start of the left border.
    pub inner_border_start: DVec2,
    /// Distance between consecutive outer border vertices.
    pub border_outer_step: f64,
    /// Distance between consecutive inner border vertices.
    pub border_inner_step: f64,

    /// Outer arc radius.
    pub outer_radius: f64,
    /// Inner arc radius.
    pub inner_radius: f64,
    /// Angle of the first outer arc vertex (the border end).
    pub outer_arc_start: f64,
    /// Angle decrement between consecutive outer arc vertices.
    pub outer_arc_step: f64,
    /// Angle of the true inner border endpoint seen from the arc center.
    pub inner_arc_start: f64,
    /// Angle decrement between consecutive inner arc vertices.
    pub inner_arc_step: f64,

    /// Left end of the outer front edge.
    pub outer_front_start: DVec2,
    /// Left end of the inner front edge.
    pub inner_front_start: DVec2,
    /// Offset between consecutive front vertices.
    pub front_step: DVec2,
}

impl ShapeLayout {
    /// Derives the layout for already sanitized `params` and their `plan`.
    pub fn derive(params: &ShapeParameters, plan: &GeometryPlan) -> Self {
        let range = params.range;
        let thickness = params.thickness;
        let inner_radius = params.inner_range();

        // Border
        let border_angle = PI - params.half_angle;
        let border_direction = DVec2::from_angle(border_angle);
        let outer_border_start = DVec2::new(-params.width / 2.0, 0.0);
        let inner_border_start = outer_border_start + normal_cw(border_direction) * thickness;
        let inner_border_end = inner_border_start + border_direction * inner_radius;

        let border_quads = plan.border_quad_count as f64;
        let border_outer_step = range / border_quads;
        let border_inner_step = inner_border_start.distance(inner_border_end) / border_quads;

        // Arc: the inner span starts at the true inner border end, not at the outer angle
        let inner_arc_start = angle_of(inner_border_end - outer_border_start);
        let (outer_arc_step, inner_arc_step) = if plan.arc_quad_count > 0 {
            let arc_quads = plan.arc_quad_count as f64;
            (
                (border_angle - FRAC_PI_2) / arc_quads,
                (inner_arc_start - FRAC_PI_2) / arc_quads,
            )
        } else {
            (0.0, 0.0)
        };

        // Front
        let outer_front_start = outer_border_start + DVec2::new(0.0, range);
        let inner_front_start = outer_front_start - DVec2::new(0.0, thickness);
        let front_step = DVec2::new(params.width / plan.front_quad_count as f64, 0.0);

        Self {
            border_direction,
            outer_border_start,
            inner_border_start,
            border_outer_step,
            border_inner_step,
            outer_radius: range,
            inner_radius,
            outer_arc_start: border_angle,
            outer_arc_step,
            inner_arc_start,
            inner_arc_step,
            outer_front_start,
            inner_front_start,
            front_step,
        }
    }

    /// Arc center of the left rounded corner.
    #[inline]
    pub fn arc_center(&self) -> DVec2 {
        self.outer_border_start
    }
}

/// Lifts a ground-plane point to 3D at height zero.
#[inline]
pub fn x0y(point: DVec2) -> DVec3 {
    DVec3::new(point.x, 0.0, point.y)
}

/// Reflects a vertex across the forward axis: `v - 2 * project(v, right)`.
#[inline]
pub fn mirror(vertex: DVec3) -> DVec3 {
    vertex - 2.0 * vertex.project_onto(DVec3::X)
}

/// Clockwise normal of a 2D direction.
#[inline]
pub fn normal_cw(direction: DVec2) -> DVec2 {
    DVec2::new(direction.y, -direction.x)
}

/// Angle of a 2D direction in radians, measured from +x.
#[inline]
pub fn angle_of(direction: DVec2) -> f64 {
    direction.y.atan2(direction.x)
}
