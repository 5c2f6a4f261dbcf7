//! Centralized configuration values shared across the field-of-view pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Tolerance used when comparing a vertex with its mirrored counterpart.
///
/// # Examples
/// ```
/// use config::constants::{EPSILON, MIRROR_TOLERANCE};
/// assert!(MIRROR_TOLERANCE > EPSILON);
/// ```
pub const MIRROR_TOLERANCE: f64 = 1.0e-5;

// =============================================================================
// SHAPE CONSTANTS
// =============================================================================

/// Distance between the outer and inner boundary of the fan ribbon.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_THICKNESS;
/// assert!(DEFAULT_THICKNESS > 0.0);
/// ```
pub const DEFAULT_THICKNESS: f64 = 0.2;

/// Smallest subdivision multiplier accepted by the geometry plan.
///
/// # Examples
/// ```
/// use config::constants::MIN_RESOLUTION;
/// let requested = 0_u32;
/// assert_eq!(requested.max(MIN_RESOLUTION), 1);
/// ```
pub const MIN_RESOLUTION: u32 = 1;

/// Upper bound on the quads of a single boundary section.
///
/// Keeps the total vertex count well inside 32-bit index addressing for any
/// finite shape.
///
/// # Examples
/// ```
/// use config::constants::MAX_SECTION_QUADS;
/// // Five sections of two vertices per quad boundary still fit u32
/// assert!((5 * 2 * (MAX_SECTION_QUADS + 1)) < u32::MAX as usize);
/// ```
pub const MAX_SECTION_QUADS: usize = 1 << 20;

/// Exclusive byte budget of a 16-bit index buffer.
///
/// A mesh switches to 32-bit indices once `vertex_count * 2` reaches this value.
///
/// # Examples
/// ```
/// use config::constants::U16_INDEX_LIMIT;
/// let vertex_count = 40_000_usize;
/// assert!(vertex_count * 2 >= U16_INDEX_LIMIT);
/// ```
pub const U16_INDEX_LIMIT: usize = 65_536;

// =============================================================================
// TERRAIN CONSTANTS
// =============================================================================

/// Clearance added above the terrain hit so the fan does not z-fight the ground.
///
/// # Examples
/// ```
/// use config::constants::GROUND_OFFSET;
/// let hit = 3.0;
/// assert_eq!(hit + GROUND_OFFSET, 3.5);
/// ```
pub const GROUND_OFFSET: f64 = 0.5;

/// Height above the world origin from which downward terrain rays start.
///
/// # Examples
/// ```
/// use config::constants::{RAY_DISTANCE, RAY_ORIGIN_HEIGHT};
/// assert!(RAY_DISTANCE > RAY_ORIGIN_HEIGHT);
/// ```
pub const RAY_ORIGIN_HEIGHT: f64 = 32.0;

/// Maximum travel of a downward terrain ray.
///
/// # Examples
/// ```
/// use config::constants::RAY_DISTANCE;
/// assert_eq!(RAY_DISTANCE, 64.0);
/// ```
pub const RAY_DISTANCE: f64 = 64.0;

/// Physics layer mask the terrain lives on.
///
/// # Examples
/// ```
/// use config::constants::TERRAIN_LAYER_MASK;
/// assert_eq!(TERRAIN_LAYER_MASK.count_ones(), 1);
/// ```
pub const TERRAIN_LAYER_MASK: u32 = 1 << 8;

/// Below this vertex count the height pass runs sequentially.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_HEIGHT_THRESHOLD;
/// assert!(PARALLEL_HEIGHT_THRESHOLD > 0);
/// ```
pub const PARALLEL_HEIGHT_THRESHOLD: usize = 256;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the tunable values that can be shared between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.ray_distance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Clearance added on top of every terrain hit.
    pub ground_offset: f64,
    /// Height terrain rays start from.
    pub ray_origin_height: f64,
    /// Maximum travel of a terrain ray.
    pub ray_distance: f64,
    /// Vertex count from which the height pass is parallelised.
    pub parallel_threshold: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// clearance and ray distance.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.25, 16.0, 40.0, 128).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 128);
    /// ```
    pub fn new(
        ground_offset: f64,
        ray_origin_height: f64,
        ray_distance: f64,
        parallel_threshold: usize,
    ) -> Result<Self, ConfigError> {
        if !ground_offset.is_finite() || ground_offset < 0.0 {
            return Err(ConfigError::InvalidGroundOffset(ground_offset));
        }
        if !ray_origin_height.is_finite() {
            return Err(ConfigError::InvalidRayOrigin(ray_origin_height));
        }
        if !ray_distance.is_finite() || ray_distance <= 0.0 {
            return Err(ConfigError::InvalidRayDistance(ray_distance));
        }
        Ok(Self {
            ground_offset,
            ray_origin_height,
            ray_distance,
            parallel_threshold,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            ground_offset: GROUND_OFFSET,
            ray_origin_height: RAY_ORIGIN_HEIGHT,
            ray_distance: RAY_DISTANCE,
            parallel_threshold: PARALLEL_HEIGHT_THRESHOLD,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when the ground clearance is negative or not finite.
    InvalidGroundOffset(f64),
    /// Raised when the ray origin height is not finite.
    InvalidRayOrigin(f64),
    /// Raised when the ray distance is zero, negative or not finite.
    InvalidRayDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGroundOffset(value) => {
                write!(f, "ground_offset must be >= 0: {value}")
            }
            ConfigError::InvalidRayOrigin(value) => {
                write!(f, "ray_origin_height must be finite: {value}")
            }
            ConfigError::InvalidRayDistance(value) => {
                write!(f, "ray_distance must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true when a mesh with `vertex_count` vertices needs 32-bit indices.
///
/// # Example
///
/// ```rust
/// use config::constants::needs_wide_indices;
///
/// assert!(!needs_wide_indices(1_000));
/// assert!(needs_wide_indices(32_768));
/// ```
#[inline]
pub fn needs_wide_indices(vertex_count: usize) -> bool {
    vertex_count.saturating_mul(2) >= U16_INDEX_LIMIT
}
