use super::*;

fn track_60x50() -> TrackTransform {
    TrackTransform::new(Rect::new(0.0, 0.0, 60.0, 50.0))
}

#[test]
fn new_transform_is_identity_over_baseline() {
    let t = track_60x50();
    assert_eq!(t.matrix(), Affine::IDENTITY);
    assert_eq!(t.bounds(), t.baseline());
}

#[test]
fn scale_halves_extent() {
    let mut t = track_60x50();
    let b = t.scale(0.5, 0.5);
    assert_eq!(b.width(), 30.0);
    assert_eq!(b.height(), 25.0);
}

#[test]
fn translate_moves_origin() {
    let mut t = track_60x50();
    let b = t.translate(10.0, 20.0);
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (10.0, 20.0, 70.0, 70.0));
}

#[test]
fn quarter_turn_swaps_extent_about_center() {
    let mut t = track_60x50();
    let b = t.rotate(90.0);
    assert_eq!(b.width(), 50.0);
    assert_eq!(b.height(), 60.0);
    assert_eq!(b.center(), Point::new(30.0, 25.0));
}

#[test]
fn scale_after_translate_keeps_translation() {
    let mut t = track_60x50();
    t.translate(10.0, 20.0);
    let b = t.scale(0.5, 0.5);
    assert_eq!((b.x0, b.y0, b.x1, b.y1), (10.0, 20.0, 40.0, 45.0));
}

#[test]
fn operations_compose_in_call_order() {
    let mut a = track_60x50();
    a.scale(2.0, 1.0);
    let a_bounds = a.rotate(90.0);

    let mut b = track_60x50();
    b.rotate(90.0);
    let b_bounds = b.scale(2.0, 1.0);

    assert_eq!((a_bounds.width(), a_bounds.height()), (50.0, 120.0));
    assert_eq!((b_bounds.width(), b_bounds.height()), (100.0, 60.0));
}

#[test]
fn reset_returns_exact_baseline() {
    let mut t = track_60x50();
    t.scale(0.3, 1.7);
    t.rotate(33.0);
    t.translate(-4.25, 9.5);
    t.rotate(-12.0);
    let b = t.reset();
    assert_eq!(b, Rect::new(0.0, 0.0, 60.0, 50.0));
    assert_eq!(t.matrix(), Affine::IDENTITY);
    assert_eq!(t.bounds(), t.baseline());
}

#[test]
fn zero_scale_collapses_without_error() {
    let mut t = track_60x50();
    let b = t.scale(0.0, 0.0);
    assert_eq!(b.width(), 0.0);
    assert_eq!(b.height(), 0.0);
}

#[test]
fn negative_scale_inverts_bounds() {
    let mut t = track_60x50();
    let b = t.scale(-1.0, 1.0);
    assert_eq!(b.width(), -60.0);
    assert_eq!(b.height(), 50.0);
}

#[test]
fn rotation_snaps_quarter_turns() {
    assert_eq!(rotation(90.0).as_coeffs(), [0.0, 1.0, -1.0, 0.0, 0.0, 0.0]);
    assert_eq!(rotation(-90.0).as_coeffs(), [0.0, -1.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(rotation(360.0), Affine::IDENTITY);
}

#[test]
fn arbitrary_rotation_uses_bounding_box() {
    let m = rotation(45.0);
    let b = map_bounds(m, Rect::new(-1.0, -1.0, 1.0, 1.0));
    let half_diag = 2.0_f64.sqrt();
    assert!((b.width() - 2.0 * half_diag).abs() < 1e-12);
    assert!((b.height() - 2.0 * half_diag).abs() < 1e-12);
}

#[test]
fn compose_applies_next_after_current() {
    let t = Affine::translate(Vec2::new(5.0, 0.0));
    let s = Affine::scale(2.0);
    let m = compose(t, s);
    assert_eq!(m * Point::new(1.0, 0.0), Point::new(12.0, 0.0));
    assert_eq!(compose(identity(), t), t);
}

#[test]
fn two_quarter_turns_restore_extent() {
    let mut t = track_60x50();
    let b = t.rotate(90.0);
    assert_eq!((b.width(), b.height()), (50.0, 60.0));
    let b = t.rotate(90.0);
    assert_eq!(b, Rect::new(0.0, 0.0, 60.0, 50.0));
}

#[test]
fn half_turn_keeps_orientation() {
    let mut t = track_60x50();
    assert_eq!(t.rotate(180.0), Rect::new(0.0, 0.0, 60.0, 50.0));

    let mut near = track_60x50();
    let b = near.rotate(179.9999);
    assert!(b.width() > 0.0 && b.height() > 0.0);
    assert!((b.width() - 60.0).abs() < 1e-3);
}

#[test]
fn scale_after_half_turn_pivots_on_visual_top_left() {
    let mut t = track_60x50();
    t.rotate(180.0);
    assert_eq!(t.scale(0.5, 0.5), Rect::new(0.0, 0.0, 30.0, 25.0));
}

#[test]
fn reflection_survives_rotation() {
    let mut t = track_60x50();
    t.scale(-1.0, 1.0);
    let b = t.rotate(180.0);
    assert_eq!(b.width(), -60.0);
    assert_eq!(b.height(), 50.0);

    let b = t.scale(-1.0, 1.0);
    assert!(b.width() > 0.0);
}

#[test]
fn map_bounds_is_normalized_for_reflections() {
    let b = map_bounds(Affine::scale(-1.0), Rect::new(0.0, 0.0, 60.0, 50.0));
    assert_eq!(b, Rect::new(-60.0, -50.0, 0.0, 0.0));
}

#[test]
fn inverted_baseline_is_kept_at_identity() {
    let inverted = Rect::new(60.0, 50.0, 0.0, 0.0);
    let mut t = TrackTransform::new(inverted);
    assert_eq!(t.bounds(), inverted);
    t.translate(1.0, 1.0);
    assert_eq!(t.bounds(), Rect::new(61.0, 51.0, 1.0, 1.0));
}
