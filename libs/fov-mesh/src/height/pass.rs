//! Terrain-conforming height pass.

use glam::{DVec2, DVec3};

use super::{sample_heights, HeightQuery};
use crate::config::BuilderConfig;
use crate::transform::FovTransform;

/// Lifts every vertex onto the terrain below it.
///
/// Hits set the vertex height to `hit + ground_offset`; misses leave the
/// vertex untouched. A misbehaving batch query leaves the whole fan untouched.
/// Returns the number of vertices that received a height.
pub(crate) fn apply_heights(
    vertices: &mut [DVec3],
    transform: &FovTransform,
    query: &dyn HeightQuery,
    config: &BuilderConfig,
) -> usize {
    let points: Vec<DVec2> = vertices
        .iter()
        .map(|v| transform.local_to_world_xz(*v))
        .collect();
    let batched = points.len() >= config.parallel_threshold;

    let heights = match sample_heights(query, &points, batched) {
        Ok(heights) => heights,
        Err(err) => {
            tracing::warn!(%err, "Height query failed, keeping flat fan");
            return 0;
        }
    };

    let mut hits = 0;
    for (vertex, height) in vertices.iter_mut().zip(heights) {
        if let Some(height) = height {
            vertex.y = height + config.ground_offset;
            hits += 1;
        }
    }

    tracing::trace!(
        vertices = vertices.len(),
        hits,
        batched,
        "Applied terrain heights"
    );
    hits
}
