use super::*;

#[test]
fn clamp_inside_range_is_identity() {
    assert!((clamp(42.5) - 42.5).abs() < 1e-9);
}

#[test]
fn clamp_bounds_both_ends() {
    assert!((clamp(-12.0) - 0.0).abs() < 1e-9);
    assert!((clamp(131.0) - 100.0).abs() < 1e-9);
}

#[test]
fn clamp_nan_collapses_to_min() {
    let s = clamp(f64::NAN);
    assert!((s - 0.0).abs() < 1e-9, "NaN should clamp to 0, got {s}");
}

#[test]
fn clamp_range_custom_bounds() {
    assert!((clamp_range(7.0, 10.0, 20.0) - 10.0).abs() < 1e-9);
    assert!((clamp_range(27.0, 10.0, 20.0) - 20.0).abs() < 1e-9);
}

#[test]
fn lerp_midpoint() {
    let s = lerp(42.5, 40.0, 45.0, 0.0, 25.0);
    assert!((s - 12.5).abs() < 1e-9, "midpoint should be 12.5, got {s}");
}

#[test]
fn lerp_endpoints() {
    assert!((lerp(40.0, 40.0, 45.0, 0.0, 25.0) - 0.0).abs() < 1e-9);
    assert!((lerp(45.0, 40.0, 45.0, 0.0, 25.0) - 25.0).abs() < 1e-9);
}

#[test]
fn lerp_degenerate_range_returns_out_low() {
    for x in [-1000.0, 0.0, 80.0, 1e9] {
        let s = lerp(x, 80.0, 80.0, 50.0, 55.0);
        assert!(s.is_finite(), "degenerate lerp must be finite for x={x}");
        assert!((s - 50.0).abs() < 1e-9, "degenerate lerp should be 50, got {s}");
    }
}

const UP: &[Step] = &[Step::new(3.0, -5.0), Step::new(5.0, 0.0), Step::new(10.0, 5.0)];
const DOWN: &[Step] = &[Step::new(60.0, -10.0), Step::new(45.0, -5.0), Step::new(30.0, 0.0)];

#[test]
fn step_at_most_picks_first_matching_row() {
    assert!((step_at_most(Some(2.0), UP, 10.0, 5.0) - -5.0).abs() < 1e-9);
    assert!((step_at_most(Some(3.0), UP, 10.0, 5.0) - -5.0).abs() < 1e-9);
    assert!((step_at_most(Some(4.0), UP, 10.0, 5.0) - 0.0).abs() < 1e-9);
    assert!((step_at_most(Some(10.0), UP, 10.0, 5.0) - 5.0).abs() < 1e-9);
}

#[test]
fn step_at_most_beyond_and_absent() {
    assert!((step_at_most(Some(11.0), UP, 10.0, 5.0) - 10.0).abs() < 1e-9);
    assert!((step_at_most(None, UP, 10.0, 5.0) - 5.0).abs() < 1e-9);
}

#[test]
fn step_at_least_picks_first_matching_row() {
    assert!((step_at_least(Some(90.0), DOWN, 5.0, 5.0) - -10.0).abs() < 1e-9);
    assert!((step_at_least(Some(45.0), DOWN, 5.0, 5.0) - -5.0).abs() < 1e-9);
    assert!((step_at_least(Some(31.0), DOWN, 5.0, 5.0) - 0.0).abs() < 1e-9);
}

#[test]
fn step_at_least_below_and_absent() {
    assert!((step_at_least(Some(10.0), DOWN, 7.0, 3.0) - 7.0).abs() < 1e-9);
    assert!((step_at_least(None, DOWN, 7.0, 3.0) - 3.0).abs() < 1e-9);
}

fn curve() -> Vec<Band> {
    vec![
        Band {
            from: 10.0,
            to: 20.0,
            score_from: 0.0,
            score_to: 40.0,
        },
        Band {
            from: 20.0,
            to: 30.0,
            score_from: 60.0,
            score_to: 80.0,
        },
    ]
}

#[test]
fn interpolate_bands_floor_and_ceiling() {
    let c = curve();
    assert!((interpolate_bands(5.0, &c, 0.0, 100.0) - 0.0).abs() < 1e-9);
    assert!((interpolate_bands(10.0, &c, 0.0, 100.0) - 0.0).abs() < 1e-9);
    assert!((interpolate_bands(31.0, &c, 0.0, 100.0) - 100.0).abs() < 1e-9);
}

#[test]
fn interpolate_bands_jumps_between_bands() {
    let c = curve();
    let at_edge = interpolate_bands(20.0, &c, 0.0, 100.0);
    let past_edge = interpolate_bands(20.001, &c, 0.0, 100.0);
    assert!((at_edge - 40.0).abs() < 1e-9, "edge belongs to lower band, got {at_edge}");
    assert!(past_edge > 59.9, "just past edge starts the upper band, got {past_edge}");
}

#[test]
fn interpolate_bands_empty_curve_is_floor() {
    assert!((interpolate_bands(50.0, &[], 7.0, 100.0) - 7.0).abs() < 1e-9);
}
