//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_mirror_tolerance_larger_than_epsilon() {
    assert!(
        MIRROR_TOLERANCE >= EPSILON,
        "MIRROR_TOLERANCE should be >= EPSILON"
    );
}

// =============================================================================
// SHAPE TESTS
// =============================================================================

#[test]
fn test_default_thickness_is_thin() {
    // The ribbon is an outline, a unit-range fan must still have an inner boundary
    assert!(DEFAULT_THICKNESS > 0.0);
    assert!(DEFAULT_THICKNESS < 1.0);
}

#[test]
fn test_min_resolution_is_one() {
    assert_eq!(MIN_RESOLUTION, 1);
}

#[test]
fn test_section_cap_fits_u32_indices() {
    // Two borders, two arcs and the front, each (quads + 1) pairs at most
    let worst = 5 * 2 * (MAX_SECTION_QUADS + 1);
    assert!(u32::try_from(worst).is_ok());
}

#[test]
fn test_u16_index_limit_matches_u16_range() {
    assert_eq!(U16_INDEX_LIMIT, u16::MAX as usize + 1);
}

// =============================================================================
// TERRAIN TESTS
// =============================================================================

#[test]
fn test_ray_reaches_below_origin() {
    // Rays start above the origin and must be able to reach terrain below zero
    assert!(RAY_DISTANCE > RAY_ORIGIN_HEIGHT);
}

#[test]
fn test_ground_offset_non_negative() {
    assert!(GROUND_OFFSET >= 0.0);
}

#[test]
fn test_terrain_layer_is_single_bit() {
    assert!(TERRAIN_LAYER_MASK.is_power_of_two());
    assert_eq!(TERRAIN_LAYER_MASK.trailing_zeros(), 8);
}

// =============================================================================
// INDEX WIDTH TESTS
// =============================================================================

#[test]
fn test_needs_wide_indices_small_mesh() {
    assert!(!needs_wide_indices(0));
    assert!(!needs_wide_indices(4));
    assert!(!needs_wide_indices(32_767));
}

#[test]
fn test_needs_wide_indices_large_mesh() {
    assert!(needs_wide_indices(32_768));
    assert!(needs_wide_indices(usize::MAX));
}
