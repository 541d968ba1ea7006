use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = MorphConfig::default();
    assert_eq!(c.duration, 600.0);
    assert_eq!(c.layer_stagger, 70.0);
    assert_eq!(c.group_stagger, 0.0);
    assert_eq!(c.intra_stagger, 18.0);
    assert_eq!(c.orbit_mode, OrbitMode::AutoManual);
    assert_eq!(c.orbit_direction, OrbitDirection::Shortest);
    assert_eq!(c.orbit_tolerance, 6.0);
    assert!(c.orbit_snap);
    assert_eq!(c.motion_profile, MotionProfile::Uniform);
    assert_eq!(c.property_timing, PropertyTiming::Balanced);
    assert_eq!(c.appear_style, AppearStyle::CollapseToCentroid);
    assert_eq!(c.morph_engine, EnginePreference::Auto);
    assert_eq!(c.max_segment_length(), 2.0);
}

#[test]
fn partial_json_fills_defaults() {
    let c = MorphConfig::from_json_str(
        r#"{
            "duration": 900,
            "morph_engine": "flubber",
            "appear_style": "bbox-to-shape",
            "orbit_mode": "off",
            "motion_profile": "focus-first",
            "property_timing": "shape-first",
            "property_curves": {"color": {"x1": 0.4, "y1": 0, "x2": 0.2, "y2": 1}},
            "easing": "in-out-cubic",
            "match_weights": {"color": 0.9}
        }"#,
    )
    .unwrap();
    assert_eq!(c.duration, 900.0);
    assert_eq!(c.morph_engine, EnginePreference::General);
    assert_eq!(c.appear_style, AppearStyle::BboxToShape);
    assert_eq!(c.orbit_mode, OrbitMode::Off);
    assert_eq!(c.motion_profile, MotionProfile::FocusFirst);
    assert_eq!(c.property_timing, PropertyTiming::ShapeFirst);
    assert!(c.property_curves.color.is_some());
    assert!(c.property_curves.shape.is_none());
    assert_eq!(c.match_weights.color, 0.9);
    assert_eq!(c.match_weights.position, 1.0);
    assert_eq!(c.intra_stagger, 18.0);
}

#[test]
fn sample_points_map_to_segment_length() {
    let mut c = MorphConfig {
        sample_points: Some(100),
        ..MorphConfig::default()
    };
    assert_eq!(c.max_segment_length(), 2.0);
    c.sample_points = Some(4);
    assert_eq!(c.max_segment_length(), 10.0);
    c.sample_points = Some(10_000);
    assert_eq!(c.max_segment_length(), 0.5);
}

#[test]
fn validation_rejects_bad_values() {
    let bad = MorphConfig {
        duration: 0.0,
        ..MorphConfig::default()
    };
    assert!(bad.validate().unwrap_err().to_string().contains("duration"));

    let bad = MorphConfig {
        layer_stagger: -1.0,
        ..MorphConfig::default()
    };
    assert!(bad.validate().is_err());

    let bad = MorphConfig {
        easing: Easing::Curve(CubicBezier::new(1.5, 0.0, 0.5, 1.0)),
        ..MorphConfig::default()
    };
    assert!(bad.validate().is_err());

    assert!(MorphConfig::from_json_str(r#"{"orbit_tolerance": -2}"#).is_err());
    assert!(MorphConfig::default().validate().is_ok());
}

#[test]
fn sanitize_restores_defaults() {
    let c = MorphConfig {
        duration: f64::NAN,
        intra_stagger: -5.0,
        ..MorphConfig::default()
    }
    .sanitized();
    assert_eq!(c.duration, 600.0);
    assert_eq!(c.intra_stagger, 18.0);
}
