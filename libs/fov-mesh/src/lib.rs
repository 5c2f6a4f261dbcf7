//! # FOV Mesh
//!
//! Procedural field-of-view fan for units and formations: a thin ribbon
//! tracing the outline of the area a formation can see, conforming to the
//! terrain below it.
//!
//! ## Shape
//!
//! ```text
//!          .-------front-------.
//!    arc  /                     \  arc
//!        /                       \
//!        \  border       border  /
//!         \                     /
//!          o---- formation ----o
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ShapeParameters → GeometryPlan → ShapeLayout → border/arc/front passes
//!                → height pass (HeightQuery) → zig-zag indices → FovMesh
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use fov_mesh::{MeshBuilder, ShapeParameters};
//!
//! let params = ShapeParameters::new(10.0, 20f64.to_radians(), 4.0, 0.2, 1);
//! let ground = |_x: f64, _z: f64| Some(1.0);
//! let mesh = MeshBuilder::new().build(&params, &ground);
//!
//! assert_eq!(mesh.vertex_count(), mesh.plan().vertex_count);
//! assert!(mesh.vertices().iter().all(|v| v.y == 1.5));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod field_of_view;
pub mod formation;
pub mod height;
pub mod layout;
pub mod mesh;
pub mod params;
pub mod plan;
pub mod transform;

pub use builder::{build, MeshBuilder};
pub use crate::config::BuilderConfig;
pub use error::{FovError, FovResult};
pub use field_of_view::FieldOfView;
pub use formation::FormationRow;
pub use height::{sample_heights, DownwardRaycast, HeightQuery, NoTerrain, RaycastHeightQuery};
pub use mesh::{FovMesh, IndexBuffer};
pub use params::ShapeParameters;
pub use plan::{compute_plan, GeometryPlan, IndexFormat};
pub use transform::FovTransform;
