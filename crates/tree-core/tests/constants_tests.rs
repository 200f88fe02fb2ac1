// Sanity checks for tuning constants and their relationships.

use tree_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn counts_and_dimensions_are_positive() {
    assert!(LEAF_COUNT > ORNAMENT_COUNT && ORNAMENT_COUNT > GIFT_COUNT);
    assert!(TREE_HEIGHT > 0.0 && TREE_RADIUS > 0.0);
    // scatter cloud is larger than the tree it dissolves from
    assert!(SCATTER_RADIUS > TREE_HEIGHT);
    assert!(STAR_SCATTER_HEIGHT > SCATTER_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_windows_and_factors_are_normalized() {
    assert!(GIFT_MIN_HEIGHT_FRAC >= 0.0 && GIFT_MIN_HEIGHT_FRAC < GIFT_MAX_HEIGHT_FRAC);
    assert!(GIFT_MAX_HEIGHT_FRAC <= 1.0);
    assert!(ORNAMENT_RADIUS_FACTOR > 0.0 && ORNAMENT_RADIUS_FACTOR <= 1.0);
    assert!(GIFT_RADIUS_FACTOR > 0.0 && GIFT_RADIUS_FACTOR <= 1.0);
    assert!(GIFT_JITTER > LEAF_JITTER && LEAF_JITTER > ORNAMENT_JITTER);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_rates_keep_interpolation_below_one() {
    assert!(SPEED_MIN > 0.0 && SPEED_MIN < SPEED_MAX);
    // at the 60 Hz baseline a frame never jumps straight to the target
    assert!(SPEED_MAX < 1.0);
    assert!(STAR_SPEED >= SPEED_MIN && STAR_SPEED < SPEED_MAX);
    assert!(ASSEMBLED_YAW_RATE > SCATTERED_YAW_RATE);
    assert!(BOB_AMPLITUDE > DRIFT_AMPLITUDE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_tree_but_not_past_starfield() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_POSITION[2] > SCATTER_RADIUS);
    assert!(CAMERA_FAR >= STARFIELD_RADIUS + STARFIELD_DEPTH);
    assert!(FOG_NEAR < FOG_FAR);
}

#[test]
fn hex_colors_unpack_per_channel() {
    assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
    assert_eq!(hex_rgb(0xFFFFFF), [1.0, 1.0, 1.0]);
    assert_eq!(hex_rgb(RED_VELVET), [139.0 / 255.0, 0.0, 0.0]);
    let gold = hex_rgb(GOLD_METALLIC);
    assert_eq!(gold[0], 1.0);
    assert!((gold[1] - 215.0 / 255.0).abs() < 1e-6);
    assert_eq!(gold[2], 0.0);
}
