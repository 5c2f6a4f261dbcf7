//! # Height Queries
//!
//! Terrain sampling capability consumed by the height pass. The physics
//! backend stays outside this crate; anything able to answer "ground height
//! at world (x, z)" can drive the pass.
//!
//! ## Implementations
//!
//! - [`NoTerrain`]: never hits, leaves the fan flat
//! - closures `Fn(f64, f64) -> Option<f64>`
//! - [`RaycastHeightQuery`]: adapts a downward raycast against a layer mask

use ::config::constants::{GlobalConfig, RAY_DISTANCE, RAY_ORIGIN_HEIGHT, TERRAIN_LAYER_MASK};
use glam::{DVec2, DVec3};
use rayon::prelude::*;

use crate::error::{FovError, FovResult};

mod pass;

pub(crate) use pass::apply_heights;

// =============================================================================
// HEIGHT QUERY
// =============================================================================

/// Ground height lookup at a world-space XZ position.
///
/// `query_batch` must keep the per-point semantics of `query`: one result per
/// point, in order. Backends with native batching override it.
pub trait HeightQuery: Sync {
    /// Returns the ground height below `(world_x, world_z)`, or `None` on a miss.
    fn query(&self, world_x: f64, world_z: f64) -> Option<f64>;

    /// Queries every point, fanning the work over the rayon pool by default.
    fn query_batch(&self, points: &[DVec2]) -> Vec<Option<f64>> {
        points.par_iter().map(|p| self.query(p.x, p.y)).collect()
    }
}

impl<F> HeightQuery for F
where
    F: Fn(f64, f64) -> Option<f64> + Sync,
{
    fn query(&self, world_x: f64, world_z: f64) -> Option<f64> {
        self(world_x, world_z)
    }
}

/// Height query that never hits; the fan stays at height zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTerrain;

impl HeightQuery for NoTerrain {
    fn query(&self, _world_x: f64, _world_z: f64) -> Option<f64> {
        None
    }

    fn query_batch(&self, points: &[DVec2]) -> Vec<Option<f64>> {
        vec![None; points.len()]
    }
}

/// Samples `points` through `query`, sequentially or as a batch.
///
/// Fails when a batch implementation returns a result count different from
/// the point count.
pub fn sample_heights(
    query: &dyn HeightQuery,
    points: &[DVec2],
    batched: bool,
) -> FovResult<Vec<Option<f64>>> {
    let results = if batched {
        query.query_batch(points)
    } else {
        points.iter().map(|p| query.query(p.x, p.y)).collect()
    };

    if results.len() != points.len() {
        return Err(FovError::VertexCountMismatch {
            expected: points.len(),
            actual: results.len(),
        });
    }
    Ok(results)
}

// =============================================================================
// RAYCAST ADAPTER
// =============================================================================

/// Downward ray cast provided by a physics backend.
pub trait DownwardRaycast: Sync {
    /// Casts a ray from `origin` straight down for at most `max_distance`
    /// against colliders in `layer_mask`; returns the hit height.
    fn cast_down(&self, origin: DVec3, max_distance: f64, layer_mask: u32) -> Option<f64>;
}

/// Height query backed by downward ray casts from a fixed origin height.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use fov_mesh::{DownwardRaycast, HeightQuery, RaycastHeightQuery};
///
/// struct Plateau;
///
/// impl DownwardRaycast for Plateau {
///     fn cast_down(&self, origin: DVec3, max_distance: f64, _mask: u32) -> Option<f64> {
///         let ground = 4.0;
///         (origin.y - ground <= max_distance).then_some(ground)
///     }
/// }
///
/// let query = RaycastHeightQuery::new(Plateau);
/// assert_eq!(query.query(1.0, 2.0), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct RaycastHeightQuery<R> {
    raycast: R,
    origin_height: f64,
    max_distance: f64,
    layer_mask: u32,
}

impl<R: DownwardRaycast> RaycastHeightQuery<R> {
    /// Creates an adapter using the default terrain ray settings.
    pub fn new(raycast: R) -> Self {
        Self {
            raycast,
            origin_height: RAY_ORIGIN_HEIGHT,
            max_distance: RAY_DISTANCE,
            layer_mask: TERRAIN_LAYER_MASK,
        }
    }

    /// Creates an adapter using the ray settings of a shared configuration.
    pub fn from_config(raycast: R, config: &GlobalConfig) -> Self {
        Self::new(raycast)
            .with_origin_height(config.ray_origin_height)
            .with_max_distance(config.ray_distance)
    }

    /// Overrides the height rays start from.
    pub fn with_origin_height(mut self, origin_height: f64) -> Self {
        self.origin_height = origin_height;
        self
    }

    /// Overrides the maximum ray travel.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Overrides the collision layer mask.
    pub fn with_layer_mask(mut self, layer_mask: u32) -> Self {
        self.layer_mask = layer_mask;
        self
    }
}

impl<R: DownwardRaycast> HeightQuery for RaycastHeightQuery<R> {
    fn query(&self, world_x: f64, world_z: f64) -> Option<f64> {
        let origin = DVec3::new(world_x, self.origin_height, world_z);
        self.raycast
            .cast_down(origin, self.max_distance, self.layer_mask)
    }
}
