use super::*;

fn square(x: f64, y: f64, s: f64) -> Shape {
    Shape::new(format!("M{x} {y} h{s} v{s} h-{s} Z")).with_fill("#336699")
}

#[test]
fn group_key_prefers_path_then_class_then_tag() {
    assert_eq!(group_key(&square(0.0, 0.0, 1.0).with_path_key("svg/g1")), "svg/g1");
    assert_eq!(group_key(&square(0.0, 0.0, 1.0).with_classes(["Card"])), "card");
    assert_eq!(group_key(&square(0.0, 0.0, 1.0).with_tag("rect")), "rect");
}

#[test]
fn appear_mode_builds_one_track_per_end_shape() {
    let end = vec![square(0.0, 0.0, 10.0), square(50.0, 0.0, 10.0)];
    let m = build_morph(None, &end, &MorphConfig::default());
    assert_eq!(m.tracks().len(), 2);
    for t in m.tracks() {
        assert_eq!(t.kind, TrackKind::Appear);
        assert_eq!(t.start_style.opacity, 0.0);
    }
    let s0 = m.sample(0.0);
    assert!(s0.iter().all(|s| s.opacity == 0.0));
    let s1 = m.sample(1.0);
    assert_eq!(s1[0].outline, end[0].outline);
    assert_eq!(s1[1].outline, end[1].outline);
}

#[test]
fn unmatched_start_disappears_to_nothing() {
    let start = vec![square(0.0, 0.0, 10.0)];
    let end: Vec<Shape> = Vec::new();
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    assert_eq!(m.tracks()[0].kind, TrackKind::Disappear);
    let s1 = m.sample(1.0);
    assert_eq!(s1[0].opacity, 0.0);
    assert!(s1[0].outline.contains('A'));
    assert_eq!(m.sample(0.0)[0].outline, start[0].outline);
}

#[test]
fn total_duration_includes_largest_delay() {
    let start = vec![square(0.0, 0.0, 100.0), square(200.0, 200.0, 2.0)];
    let end = vec![square(10.0, 0.0, 100.0), square(210.0, 200.0, 2.0)];
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    let max_delay = m.tracks().iter().map(Track::delay_ms).fold(0.0, f64::max);
    assert!(max_delay > 0.0);
    assert_eq!(m.total_duration_ms(), 600.0 + max_delay);
}

#[test]
fn local_progress_clamps_out_of_range() {
    let start = vec![square(0.0, 0.0, 10.0)];
    let end = vec![square(100.0, 0.0, 10.0)];
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    let t = &m.tracks()[0];
    assert_eq!(m.local_progress(t, -1.0), 0.0);
    assert_eq!(m.local_progress(t, 2.0), 1.0);
    assert_eq!(m.sample(-1.0), m.sample(0.0));
    assert_eq!(m.sample(3.0), m.sample(1.0));
}

#[test]
fn parallel_sampling_matches_serial() {
    let start: Vec<Shape> = (0..12).map(|i| square(i as f64 * 20.0, 0.0, 10.0)).collect();
    let end: Vec<Shape> = (0..12)
        .map(|i| square(i as f64 * 20.0, 40.0 + i as f64, 8.0).with_order(i))
        .collect();
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    for p in [0.0, 0.13, 0.5, 0.77, 1.0] {
        assert_eq!(m.sample(p), m.sample_par(p));
    }
}

#[test]
fn color_switch_and_blend() {
    let start = vec![square(0.0, 0.0, 10.0).with_id("a").with_fill("#000000")];
    let end = vec![square(0.0, 0.0, 10.0).with_id("a").with_fill("#ffffff")];
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    assert_eq!(m.sample(0.0)[0].fill.as_deref(), Some("#000000"));
    assert_eq!(m.sample(1.0)[0].fill.as_deref(), Some("#ffffff"));
    assert_eq!(m.sample(0.5)[0].fill.as_deref(), Some("rgba(128, 128, 128, 1)"));
}

#[test]
fn draw_on_only_for_open_stroke_only_appear() {
    let end = vec![
        Shape::new("M0 0 L100 0").with_stroke("#000"),
        Shape::new("M0 10 L100 10").with_stroke("#000").with_dasharray("4 4"),
        Shape::new("M0 20 H100 V30 H0 Z").with_stroke("#000"),
    ];
    let m = build_morph(None, &end, &MorphConfig::default());
    let kinds: Vec<EngineKind> = m.tracks().iter().map(|t| t.interpolator.kind()).collect();
    assert_eq!(kinds[0], EngineKind::DrawOn);
    assert_ne!(kinds[1], EngineKind::DrawOn);
    assert_ne!(kinds[2], EngineKind::DrawOn);
    let s0 = m.sample(0.0);
    assert!(s0[0].stroke_dasharray.is_some());
    assert_eq!(s0[1].stroke_dasharray.as_deref(), Some("4 4"));
    assert_eq!(s0[2].stroke_dashoffset, None);
}

#[test]
fn disappearing_open_stroke_stays_open() {
    let start = vec![Shape::new("M0 0 L100 0").with_stroke("#000")];
    let m = build_morph(Some(&start), &[], &MorphConfig::default());
    assert_eq!(m.tracks()[0].kind, TrackKind::Disappear);
    for p in [0.25, 0.5, 0.75] {
        let outline = &m.sample(p)[0].outline;
        assert!(!outline.contains(['Z', 'z']), "{outline}");
    }
}

#[test]
fn channels_follow_local_progress() {
    let start = vec![square(0.0, 0.0, 10.0)];
    let end = vec![square(100.0, 0.0, 10.0)];
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    let t = &m.tracks()[0];
    let ch = m.channels(t, 0.0);
    assert_eq!((ch.shape, ch.color, ch.opacity, ch.stroke), (0.0, 0.0, 0.0, 0.0));
    let ch = m.channels(t, 1.0);
    assert_eq!((ch.shape, ch.color, ch.opacity, ch.stroke), (1.0, 1.0, 1.0, 1.0));
    assert_eq!(m.sample(0.4)[0].progress, m.local_progress(t, 0.4));
}

#[test]
fn engine_counts_group_tracks() {
    let start = vec![square(0.0, 0.0, 10.0), square(50.0, 0.0, 10.0)];
    let end = vec![square(0.0, 20.0, 10.0), square(50.0, 20.0, 10.0)];
    let m = build_morph(Some(&start), &end, &MorphConfig::default());
    assert_eq!(m.engine_counts(), vec![(EngineKind::Aligned, 2)]);
    assert!(build_morph(None, &[], &MorphConfig::default()).engine_counts().is_empty());
}
