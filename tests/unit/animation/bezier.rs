use super::*;

#[test]
fn identity_curve_tracks_input() {
    let c = CubicBezier::LINEAR;
    for i in 0..=200 {
        let t = i as f64 / 200.0;
        assert!((evaluate(t, &c) - t).abs() < 1e-4, "t={t}");
    }
}

#[test]
fn endpoints_are_exact_for_any_curve() {
    for c in [
        CubicBezier::EASE,
        CubicBezier::EASE_IN_OUT,
        CubicBezier::new(0.9, -3.0, 0.1, 4.0),
        CubicBezier::new(0.0, 1.0, 0.0, 1.0),
    ] {
        assert_eq!(evaluate(0.0, &c), 0.0);
        assert_eq!(evaluate(1.0, &c), 1.0);
        assert_eq!(evaluate(-2.0, &c), 0.0);
        assert_eq!(evaluate(7.0, &c), 1.0);
    }
}

#[test]
fn outputs_stay_in_unit_range_and_monotonic() {
    let c = CubicBezier::new(0.7, 0.0, 0.84, 0.0);
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = evaluate(i as f64 / 100.0, &c);
        assert!((0.0..=1.0).contains(&v));
        assert!(v + 1e-9 >= prev);
        prev = v;
    }
}

#[test]
fn ease_out_leads_linear() {
    let v = CubicBezier::EASE_OUT.evaluate(0.3);
    assert!(v > 0.3);
    let v = CubicBezier::EASE_IN.evaluate(0.3);
    assert!(v < 0.3);
}

#[test]
fn flat_start_falls_back_to_bisection() {
    // Zero slope at u = 0 stalls Newton for tiny inputs.
    let c = CubicBezier::new(1.0, 0.0, 1.0, 1.0);
    let v = c.evaluate(1e-6);
    assert!(v.is_finite());
    assert!((0.0..=1.0).contains(&v));
}
