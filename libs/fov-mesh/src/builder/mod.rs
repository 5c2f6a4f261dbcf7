//! # Mesh Builder
//!
//! Builds the field-of-view fan in four passes over one pre-sized vertex
//! buffer, then emits the zig-zag index buffer.
//!
//! ## Passes
//!
//! 1. Border: left side border, mirrored into the right border
//! 2. Arc: left rounded corner, mirrored into the right corner
//! 3. Front: the straight front edge, written once
//! 4. Height: every vertex lifted onto the terrain below it
//!
//! Every left-side vertex is written together with its mirror image, so the
//! fan is symmetric across the forward axis by construction.

use glam::DVec3;

use crate::config::BuilderConfig;
use crate::height::{apply_heights, HeightQuery, NoTerrain};
use crate::layout::{mirror, ShapeLayout};
use crate::mesh::{FovMesh, IndexBuffer};
use crate::params::ShapeParameters;
use crate::plan::GeometryPlan;
use crate::transform::FovTransform;

mod indices;
mod sections;

pub use indices::strip_indices;

/// Builds field-of-view fans for one owner.
///
/// # Example
///
/// ```rust
/// use fov_mesh::{MeshBuilder, NoTerrain, ShapeParameters};
///
/// let params = ShapeParameters::new(10.0, 0.3491, 4.0, 0.2, 1);
/// let mesh = MeshBuilder::new().build(&params, &NoTerrain);
/// assert_eq!(mesh.vertex_count(), 98);
/// assert_eq!(mesh.triangle_count(), 96);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshBuilder {
    config: BuilderConfig,
    transform: FovTransform,
}

impl MeshBuilder {
    /// Creates a builder with default configuration at the world origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the builder configuration.
    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Places the fan owner in the world; only the height pass uses it.
    pub fn with_transform(mut self, transform: FovTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Current owner transform.
    pub fn transform(&self) -> &FovTransform {
        &self.transform
    }

    /// Builds the fan for `params`, sampling terrain heights from `query`.
    ///
    /// Out-of-range parameters are clamped, never rejected, so a build always
    /// yields a mesh. Vertices without a terrain hit stay at height zero.
    pub fn build(&self, params: &ShapeParameters, query: &dyn HeightQuery) -> FovMesh {
        if params.needs_clamping() {
            tracing::warn!(?params, "Clamping out-of-range fan parameters");
        }
        let params = params.sanitized();
        let plan = GeometryPlan::compute(&params);
        let layout = ShapeLayout::derive(&params, &plan);

        let mut vertices = vec![DVec3::ZERO; plan.vertex_count];
        sections::write_border(&mut vertices, &plan, &layout);
        sections::write_arc(&mut vertices, &plan, &layout);
        sections::write_front(&mut vertices, &plan, &layout);
        let hits = apply_heights(&mut vertices, &self.transform, query, &self.config);

        let indices = strip_indices(plan.vertex_count);
        let indices = IndexBuffer::from_u32(indices, plan.index_format);

        tracing::debug!(
            vertices = plan.vertex_count,
            triangles = plan.triangle_count,
            height_hits = hits,
            "Built field-of-view mesh"
        );

        FovMesh::new(plan, vertices, indices)
    }

    /// Builds the fan without terrain sampling.
    pub fn build_flat(&self, params: &ShapeParameters) -> FovMesh {
        self.build(params, &NoTerrain)
    }
}

/// Builds a flat fan at the origin with default configuration.
///
/// # Example
///
/// ```rust
/// use fov_mesh::{build, ShapeParameters};
///
/// let mesh = build(&ShapeParameters::default());
/// assert!(mesh.vertices().iter().all(|v| v.y == 0.0));
/// ```
pub fn build(params: &ShapeParameters) -> FovMesh {
    MeshBuilder::default().build_flat(params)
}

/// Writes a left-side vertex and its mirror image.
#[inline]
fn write_mirrored(vertices: &mut [DVec3], plan: &GeometryPlan, index: usize, vertex: DVec3) {
    vertices[index] = vertex;
    if let Some(mirrored) = plan.mirrored_index(index) {
        vertices[mirrored] = mirror(vertex);
    }
}
