//! # Config Crate
//!
//! Centralized configuration constants for the field-of-view mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_THICKNESS, EPSILON, GROUND_OFFSET};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Terrain hits are lifted by the ground clearance
//! let hit = 2.0;
//! assert_eq!(hit + GROUND_OFFSET, 2.5);
//! assert!(DEFAULT_THICKNESS > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine-Agnostic**: No values tied to a particular physics backend
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
