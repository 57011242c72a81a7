// Host-side tests for pointer normalization.

use mic_bloom::input::*;

#[test]
fn corners_and_center() {
    let (w, h) = (800.0, 600.0);
    assert_eq!(normalize_client(0.0, 0.0, w, h), PointerState { x: -1.0, y: 1.0 });
    assert_eq!(normalize_client(w, h, w, h), PointerState { x: 1.0, y: -1.0 });
    assert_eq!(normalize_client(400.0, 300.0, w, h), PointerState { x: 0.0, y: 0.0 });
}

#[test]
fn y_grows_upward() {
    let high = normalize_client(10.0, 50.0, 100.0, 100.0);
    let low = normalize_client(10.0, 90.0, 100.0, 100.0);
    assert!(high.y > low.y);
}

#[test]
fn outside_viewport_is_not_clamped() {
    let p = normalize_client(-100.0, 0.0, 100.0, 100.0);
    assert_eq!(p.x, -3.0);
}

#[test]
fn degenerate_viewport_maps_to_center() {
    assert_eq!(normalize_client(5.0, 5.0, 0.0, 100.0), PointerState::default());
    assert_eq!(normalize_client(5.0, 5.0, 100.0, f32::NAN), PointerState::default());
}
