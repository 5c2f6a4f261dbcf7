//! # Error Types
//!
//! Error types for field-of-view mesh operations.
//!
//! ## Error Policy
//!
//! - Numeric anomalies in shape parameters are clamped, never surfaced
//! - Building a mesh never fails; errors only come from strict constructors
//!   and explicit conversions requested by the caller

use thiserror::Error;

use crate::config::BuilderConfigError;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around field-of-view mesh generation.
///
/// ## Example
///
/// ```rust
/// use fov_mesh::{FovError, ShapeParameters};
///
/// match ShapeParameters::try_new(f64::NAN, 0.3, 4.0, 0.2, 1) {
///     Err(FovError::NonFiniteParameter { name, .. }) => assert_eq!(name, "range"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum FovError {
    /// A shape parameter was NaN or infinite and cannot be clamped.
    #[error("Parameter '{name}' must be finite, got {value}")]
    NonFiniteParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Value that was supplied
        value: f64,
    },

    /// Builder configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] BuilderConfigError),

    /// 16-bit indices were requested for a mesh that needs 32-bit ones.
    #[error("Too many vertices for 16-bit indices: {vertex_count} (max: {max})")]
    IndexOverflow {
        /// Vertex count of the mesh
        vertex_count: usize,
        /// Largest vertex count 16-bit indices allow
        max: usize,
    },

    /// A batched height query returned the wrong number of results.
    #[error("Height query returned {actual} results for {expected} points")]
    VertexCountMismatch {
        /// Number of points queried
        expected: usize,
        /// Number of results returned
        actual: usize,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for field-of-view operations.
pub type FovResult<T> = Result<T, FovError>;

// =============================================================================
// TESTS
// =============================================================================
