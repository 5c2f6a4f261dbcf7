//! Border, arc and front passes.
//!
//! Each pass writes (outer, inner) pairs at the buffer range the plan
//! assigns to it. Border and arc pairs are mirrored into the right half.

use glam::{DVec2, DVec3};

use super::write_mirrored;
use crate::layout::{x0y, ShapeLayout};
use crate::plan::GeometryPlan;

/// Writes both side borders.
pub(super) fn write_border(vertices: &mut [DVec3], plan: &GeometryPlan, layout: &ShapeLayout) {
    let direction = layout.border_direction;

    for i in 0..plan.border_pair_count() {
        let t = i as f64;
        let outer = layout.outer_border_start + direction * (t * layout.border_outer_step);
        let inner = layout.inner_border_start + direction * (t * layout.border_inner_step);

        write_mirrored(vertices, plan, 2 * i, x0y(outer));
        write_mirrored(vertices, plan, 2 * i + 1, x0y(inner));
    }
}

/// Writes both rounded corners, seam vertices excluded.
///
/// Vertex `i` sits one step past the border end, so the last one stops one
/// step short of the front edge.
pub(super) fn write_arc(vertices: &mut [DVec3], plan: &GeometryPlan, layout: &ShapeLayout) {
    let center = layout.arc_center();
    let base = plan.left_arc_start();

    for i in 0..plan.arc_pair_count() {
        let t = (i + 1) as f64;
        let outer_angle = layout.outer_arc_start - t * layout.outer_arc_step;
        let inner_angle = layout.inner_arc_start - t * layout.inner_arc_step;

        let outer = center + DVec2::from_angle(outer_angle) * layout.outer_radius;
        let inner = center + DVec2::from_angle(inner_angle) * layout.inner_radius;

        write_mirrored(vertices, plan, base + 2 * i, x0y(outer));
        write_mirrored(vertices, plan, base + 2 * i + 1, x0y(inner));
    }
}

/// Writes the front edge from left to right.
pub(super) fn write_front(vertices: &mut [DVec3], plan: &GeometryPlan, layout: &ShapeLayout) {
    let base = plan.front_start();

    for i in 0..plan.front_pair_count() {
        let offset = layout.front_step * i as f64;
        vertices[base + 2 * i] = x0y(layout.outer_front_start + offset);
        vertices[base + 2 * i + 1] = x0y(layout.inner_front_start + offset);
    }
}
