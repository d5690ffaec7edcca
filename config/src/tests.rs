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
fn test_plane_epsilon_larger_than_epsilon() {
    assert!(
        PLANE_EPSILON >= EPSILON,
        "PLANE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_convexity_epsilon_is_small() {
    assert!(CONVEXITY_EPSILON < PLANE_EPSILON);
}

// =============================================================================
// FONT TESTS
// =============================================================================

#[test]
fn test_font_covers_printable_ascii() {
    // Space through tilde
    let last = FONT_FIRST_CODE + FONT_GLYPH_COUNT as u32 - 1;
    assert_eq!(char::from_u32(last), Some('~'));
}

#[test]
fn test_font_design_size_matches_default_text_size() {
    // The default size renders text at 1:1
    assert_eq!(DEFAULT_TEXT_SIZE / FONT_DESIGN_SIZE, 1.0);
}

#[test]
fn test_stroke_break_is_negative_pair() {
    assert_eq!(FONT_STROKE_BREAK, (-1, -1));
}

// =============================================================================
// EXTRUSION TESTS
// =============================================================================

#[test]
fn test_default_profile_is_unit() {
    assert_eq!(DEFAULT_EXTRUDE_WIDTH, 1.0);
    assert_eq!(DEFAULT_EXTRUDE_HEIGHT, 1.0);
    assert_eq!(DEFAULT_CORNER_SEGMENTS, 8);
}

#[test]
fn test_clamp_corner_segments_bounds() {
    assert_eq!(clamp_corner_segments(0), MIN_CORNER_SEGMENTS);
    assert_eq!(clamp_corner_segments(u32::MAX), MAX_CORNER_SEGMENTS);
    assert_eq!(clamp_corner_segments(DEFAULT_CORNER_SEGMENTS), DEFAULT_CORNER_SEGMENTS);
}

#[test]
fn test_miter_limit_allows_right_angles() {
    // A 90 degree mitre is sqrt(2) half-widths long
    assert!(MITER_LIMIT > std::f64::consts::SQRT_2);
}

// =============================================================================
// TEXT TESTS
// =============================================================================

#[test]
fn test_default_text_style() {
    assert_eq!(DEFAULT_TEXT_WEIGHT, 3.0);
    assert_eq!(DEFAULT_TEXT_HEIGHT, 5.0);
    assert_eq!(DEFAULT_TEXT_SIZE, 20.0);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.1));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stack_budget_exceeds_red_zone() {
    assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
}
