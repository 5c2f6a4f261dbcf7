//! Mesh builder settings: terrain clearance and the vertex count from which
//! the height pass is batched on the rayon pool. Defaults come from the
//! shared `config` crate.

use ::config::constants::{
    ConfigError, GlobalConfig, GROUND_OFFSET, PARALLEL_HEIGHT_THRESHOLD, RAY_DISTANCE,
    RAY_ORIGIN_HEIGHT,
};
use serde::{Deserialize, Serialize};

/// Settings of the mesh builder.
///
/// # Examples
/// ```
/// use fov_mesh::config::BuilderConfig;
/// let cfg = BuilderConfig::default();
/// assert!(cfg.ground_offset >= 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Clearance added above every terrain hit.
    pub ground_offset: f64,
    /// Vertex count from which the height pass runs on the rayon pool.
    pub parallel_threshold: usize,
}

impl BuilderConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use fov_mesh::config::BuilderConfig;
    /// let cfg = BuilderConfig::new(0.25, 64).unwrap();
    /// assert_eq!(cfg.ground_offset, 0.25);
    /// assert!(BuilderConfig::new(-0.1, 64).is_err());
    /// ```
    pub fn new(ground_offset: f64, parallel_threshold: usize) -> Result<Self, BuilderConfigError> {
        GlobalConfig::new(
            ground_offset,
            RAY_ORIGIN_HEIGHT,
            RAY_DISTANCE,
            parallel_threshold,
        )
        .map(Self::from)
        .map_err(BuilderConfigError)
    }

    /// Returns a copy that always runs the height pass sequentially.
    pub fn sequential(self) -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..self
        }
    }
}

impl From<GlobalConfig> for BuilderConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            ground_offset: cfg.ground_offset,
            parallel_threshold: cfg.parallel_threshold,
        }
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            ground_offset: GROUND_OFFSET,
            parallel_threshold: PARALLEL_HEIGHT_THRESHOLD,
        }
    }
}

/// Builder settings were rejected by the shared configuration checks.
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderConfigError(pub ConfigError);

impl std::fmt::Display for BuilderConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for BuilderConfigError {}

#[cfg(test)]
mod tests;
