//! # Fan Mesh Data
//!
//! Output buffers of a fan build: vertex positions and a zig-zag index buffer
//! whose integer width follows the plan.

use ::config::constants::U16_INDEX_LIMIT;
use glam::DVec3;

use crate::error::{FovError, FovResult};
use crate::plan::{GeometryPlan, IndexFormat};

// =============================================================================
// INDEX BUFFER
// =============================================================================

/// Index buffer stored at the width chosen by the plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    /// 16-bit indices.
    U16(Vec<u16>),
    /// 32-bit indices.
    U32(Vec<u32>),
}

impl IndexBuffer {
    /// Stores `indices` at `format`.
    ///
    /// Indices that do not fit 16 bits keep the buffer at 32 bits instead of
    /// wrapping.
    pub(crate) fn from_u32(indices: Vec<u32>, format: IndexFormat) -> Self {
        match format {
            IndexFormat::U16 => {
                let narrow: Result<Vec<u16>, _> =
                    indices.iter().map(|&i| u16::try_from(i)).collect();
                match narrow {
                    Ok(narrow) => IndexBuffer::U16(narrow),
                    Err(_) => {
                        tracing::warn!(
                            indices = indices.len(),
                            "Index exceeds 16 bits, keeping 32-bit buffer"
                        );
                        IndexBuffer::U32(indices)
                    }
                }
            }
            IndexFormat::U32 => IndexBuffer::U32(indices),
        }
    }

    /// Width of the stored indices.
    pub fn format(&self) -> IndexFormat {
        match self {
            IndexBuffer::U16(_) => IndexFormat::U16,
            IndexBuffer::U32(_) => IndexFormat::U32,
        }
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::U16(indices) => indices.len(),
            IndexBuffer::U32(indices) => indices.len(),
        }
    }

    /// Returns true if the buffer holds no index.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the index at `position`, widened to u32.
    pub fn get(&self, position: usize) -> Option<u32> {
        match self {
            IndexBuffer::U16(indices) => indices.get(position).map(|&i| u32::from(i)),
            IndexBuffer::U32(indices) => indices.get(position).copied(),
        }
    }

    /// Iterates over all indices widened to u32.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            IndexBuffer::U16(indices) => Box::new(indices.iter().map(|&i| u32::from(i))),
            IndexBuffer::U32(indices) => Box::new(indices.iter().copied()),
        }
    }
}

// =============================================================================
// FOV MESH
// =============================================================================

/// A built field-of-view fan.
///
/// All positions are f64 in the owner's local frame. Export to f32 only
/// happens through [`FovMesh::positions_f32`] for GPU upload.
///
/// # Example
///
/// ```rust
/// use fov_mesh::{MeshBuilder, NoTerrain, ShapeParameters};
///
/// let mesh = MeshBuilder::default().build(&ShapeParameters::default(), &NoTerrain);
/// assert_eq!(mesh.positions_f32().len(), mesh.vertex_count() * 3);
/// assert_eq!(mesh.indices().len(), mesh.triangle_count() * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FovMesh {
    plan: GeometryPlan,
    vertices: Vec<DVec3>,
    indices: IndexBuffer,
}

impl FovMesh {
    pub(crate) fn new(plan: GeometryPlan, vertices: Vec<DVec3>, indices: IndexBuffer) -> Self {
        Self {
            plan,
            vertices,
            indices,
        }
    }

    /// Plan the mesh was built from.
    #[inline]
    pub fn plan(&self) -> &GeometryPlan {
        &self.plan
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the index buffer.
    #[inline]
    pub fn indices(&self) -> &IndexBuffer {
        &self.indices
    }

    /// Width of the index buffer.
    #[inline]
    pub fn index_format(&self) -> IndexFormat {
        self.indices.format()
    }

    /// Returns the triangle at the given index.
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let base = index * 3;
        Some([
            self.indices.get(base)?,
            self.indices.get(base + 1)?,
            self.indices.get(base + 2)?,
        ])
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangle indices as u32 array for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices.iter().collect()
    }

    /// Exports triangle indices as u16 array.
    ///
    /// Fails for meshes whose plan required 32-bit indices.
    pub fn indices_u16(&self) -> FovResult<Vec<u16>> {
        match &self.indices {
            IndexBuffer::U16(indices) => Ok(indices.clone()),
            IndexBuffer::U32(_) => Err(FovError::IndexOverflow {
                vertex_count: self.vertices.len(),
                max: U16_INDEX_LIMIT / 2 - 1,
            }),
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Computes area-weighted vertex normals from the triangle faces.
    pub fn compute_normals(&self) -> Vec<DVec3> {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for index in 0..self.triangle_count() {
            let Some(tri) = self.triangle(index) else {
                break;
            };
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        normals
    }
}
