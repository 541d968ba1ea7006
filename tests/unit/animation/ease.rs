use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::Ease,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn named_eases_hit_endpoints() {
    for e in ALL {
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert_eq!(e.apply(-1.0), 0.0);
        assert_eq!(e.apply(3.0), 1.0);
    }
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn keywords_follow_their_curves() {
    assert_eq!(Ease::EaseIn.curve(), Some(CubicBezier::EASE_IN));
    assert_eq!(Ease::OutCubic.curve(), None);
    let t = 0.3;
    assert_eq!(Ease::EaseOut.apply(t), evaluate(t, &CubicBezier::EASE_OUT));
    assert!(Ease::EaseIn.apply(t) < t);
    assert!(Ease::EaseOut.apply(t) > t);
}

#[test]
fn easing_deserializes_both_forms() {
    let e: Easing = serde_json::from_str("\"out-cubic\"").unwrap();
    assert_eq!(e, Easing::Named(Ease::OutCubic));
    let e: Easing = serde_json::from_str("\"ease-in-out\"").unwrap();
    assert_eq!(e, Easing::Named(Ease::EaseInOut));

    let e: Easing = serde_json::from_str(r#"{"x1":0.42,"y1":0,"x2":0.58,"y2":1}"#).unwrap();
    assert_eq!(e, Easing::Curve(CubicBezier::EASE_IN_OUT));
    assert_eq!(e.apply(1.0), 1.0);
}

#[test]
fn default_is_linear() {
    assert_eq!(Easing::default().apply(0.25), 0.25);
}
