//! # Field of View
//!
//! Owner-level facade: keeps the shape, the owner transform and the builder
//! configuration together, rebuilds the fan on demand and answers whether a
//! ground point lies inside the outer boundary.

use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;

use crate::builder::MeshBuilder;
use crate::config::BuilderConfig;
use crate::formation::FormationRow;
use crate::height::HeightQuery;
use crate::layout::angle_of;
use crate::mesh::FovMesh;
use crate::params::ShapeParameters;
use crate::transform::FovTransform;

/// Field of view of one formation.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use fov_mesh::{FieldOfView, NoTerrain, ShapeParameters};
///
/// let mut fov = FieldOfView::new(ShapeParameters::default());
/// assert!(fov.contains_local(DVec2::new(0.0, 5.0)));
/// assert!(!fov.contains_local(DVec2::new(0.0, -1.0)));
///
/// fov.set_width(8.0);
/// let mesh = fov.rebuild(&NoTerrain);
/// assert_eq!(mesh.plan().front_quad_count, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldOfView {
    params: ShapeParameters,
    transform: FovTransform,
    config: BuilderConfig,
}

impl FieldOfView {
    /// Creates a field of view at the world origin with default configuration.
    pub fn new(params: ShapeParameters) -> Self {
        Self {
            params: params.sanitized(),
            ..Self::default()
        }
    }

    /// Creates a field of view whose width follows `row`.
    pub fn for_formation(params: ShapeParameters, row: &FormationRow) -> Self {
        Self::new(params.with_width(row.width()))
    }

    /// Replaces the builder configuration.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Current shape parameters, already clamped.
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Current owner transform.
    pub fn transform(&self) -> &FovTransform {
        &self.transform
    }

    /// Builds the fan for the current state.
    pub fn rebuild(&self, query: &dyn HeightQuery) -> FovMesh {
        MeshBuilder::new()
            .with_config(self.config)
            .with_transform(self.transform)
            .build(&self.params, query)
    }

    /// Reacts to a formation width change. Callers rebuild afterwards.
    pub fn set_width(&mut self, width: f64) {
        tracing::debug!(old = self.params.width, new = width, "Formation width changed");
        self.params = self.params.with_width(width);
    }

    /// Replaces the shape parameters.
    pub fn set_params(&mut self, params: ShapeParameters) {
        self.params = params.sanitized();
    }

    /// Moves or turns the owner.
    pub fn set_transform(&mut self, transform: FovTransform) {
        self.transform = transform;
    }

    /// Returns true if the local ground point `(x, z)` lies inside the outer boundary.
    pub fn contains_local(&self, point: DVec2) -> bool {
        let half_width = self.params.width / 2.0;
        let range = self.params.range;

        if point.x.abs() <= half_width {
            return point.y >= 0.0 && point.y <= range;
        }

        // Fold the right side onto the left corner
        let offset = DVec2::new(-point.x.abs() + half_width, point.y);
        if offset.length() > range {
            return false;
        }
        let angle = angle_of(offset);
        (FRAC_PI_2..=PI - self.params.half_angle).contains(&angle)
    }

    /// Returns true if the world ground point `(x, z)` lies inside the outer boundary.
    pub fn contains_world(&self, point: DVec2) -> bool {
        self.contains_local(self.transform.world_to_local_xz(point))
    }
}
