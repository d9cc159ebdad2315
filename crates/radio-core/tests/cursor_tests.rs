// Host-side tests for pointer normalization and the cursor stylesheet rule.

use radio_core::*;

#[test]
fn viewport_center_is_zero_offset() {
    let o = pointer_offset(400.0, 300.0, 800.0, 600.0);
    assert!(o.length() < 1e-6);
}

#[test]
fn corners_map_to_half_offsets() {
    let tl = pointer_offset(0.0, 0.0, 800.0, 600.0);
    assert_eq!(tl, glam::Vec2::new(-0.5, -0.5));
    let br = pointer_offset(800.0, 600.0, 800.0, 600.0);
    assert_eq!(br, glam::Vec2::new(0.5, 0.5));
}

#[test]
fn degenerate_viewport_yields_zero() {
    assert_eq!(pointer_offset(10.0, 10.0, 0.0, 600.0), glam::Vec2::ZERO);
}

#[test]
fn right_edge_pointer_yaws_left() {
    let target = pointer_tilt_target(pointer_offset(800.0, 300.0, 800.0, 600.0));
    assert!((target.y + 0.05).abs() < 1e-6);
    assert!(target.x.abs() < 1e-6);
}

#[test]
fn cursor_rule_positions_pseudo_element() {
    assert_eq!(
        cursor_rule(12.0, 34.5),
        "body::after { left: 12px; top: 34.5px; }"
    );
}
