//! Zig-zag strip indexing.

/// Emits the triangle list of a strip over `vertex_count` vertices.
///
/// Triangle `i` is `[i, i+2, i+1]` for even `i` and `[i, i+1, i+2]` for odd
/// `i`, which keeps a consistent winding along alternating outer/inner
/// vertices.
///
/// Vertex counts beyond 32-bit addressing are truncated to the largest strip
/// u32 indices can express; plans never produce such counts.
///
/// # Example
///
/// ```rust
/// use fov_mesh::builder::strip_indices;
///
/// assert_eq!(strip_indices(4), vec![0, 2, 1, 1, 2, 3]);
/// assert!(strip_indices(2).is_empty());
/// ```
pub fn strip_indices(vertex_count: usize) -> Vec<u32> {
    let vertex_count = u32::try_from(vertex_count).unwrap_or(u32::MAX);
    let triangle_count = vertex_count.saturating_sub(2);
    let mut indices = Vec::with_capacity(triangle_count as usize * 3);

    for v in 0..triangle_count {
        if v % 2 == 0 {
            indices.extend_from_slice(&[v, v + 2, v + 1]);
        } else {
            indices.extend_from_slice(&[v, v + 1, v + 2]);
        }
    }

    indices
}
