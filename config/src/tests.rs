//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON_TOLERANCE,
        "VERTEX_MERGE_EPSILON should be >= EPSILON_TOLERANCE"
    );
}

#[test]
fn test_unit_length_tolerance_is_loose_enough_for_f32() {
    assert!(UNIT_LENGTH_TOLERANCE > f64::from(f32::EPSILON));
}

// =============================================================================
// LOFT TESTS
// =============================================================================

#[test]
fn test_log_progression_grows() {
    let first = (1.0 + LOG_SCALE_OFFSET).ln();
    let last = (f64::from(DEFAULT_FOIL_COUNT) + LOG_SCALE_OFFSET).ln();
    assert!(first > 1.0);
    assert!(last > first);
}

#[test]
fn test_station_step_is_positive() {
    assert!(DEFAULT_STATION_Z_STEP > 0.0);
    assert!(DEFAULT_BASE_Z > 0.0);
}

// =============================================================================
// HUB TESTS
// =============================================================================

#[test]
fn test_hub_segments_cover_full_circle() {
    assert_eq!(DEFAULT_HUB_SEGMENTS * DEFAULT_HUB_ANGLE_STEP_DEGREES, 360);
}

#[test]
fn test_hub_dimensions_positive() {
    assert!(DEFAULT_HUB_RADIUS > 0.0);
    assert!(DEFAULT_HUB_HEIGHT > 0.0);
}

// =============================================================================
// OUTPUT TESTS
// =============================================================================

#[test]
fn test_default_color_in_unit_range() {
    for channel in DEFAULT_COLOR {
        assert!((0.0..=1.0).contains(&channel));
    }
}
