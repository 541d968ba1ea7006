use super::*;

fn square(x: f64, y: f64, s: f64) -> Shape {
    Shape::new(format!("M{x} {y} h{s} v{s} h-{s} Z")).with_fill("#000")
}

#[test]
fn path_distance_counts_shared_prefix() {
    assert_eq!(path_distance(None, None), 0.0);
    assert_eq!(path_distance(Some("a/b"), None), 1.0);
    assert_eq!(path_distance(Some("a/b/c"), Some("a/b/c")), 0.0);
    assert!((path_distance(Some("a/b/c"), Some("a/b/d")) - 1.0 / 3.0).abs() < 1e-12);
    assert!((path_distance(Some("a"), Some("a/b")) - 0.5).abs() < 1e-12);
}

#[test]
fn class_distance_is_jaccard() {
    let a = vec!["x".to_owned(), "y".to_owned()];
    let b = vec!["y".to_owned(), "z".to_owned()];
    assert!((class_distance(&a, &b) - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(class_distance(&[], &[]), 0.0);
    assert_eq!(class_distance(&a, &[]), 1.0);
}

#[test]
fn identical_shapes_cost_zero() {
    let f = Features::of(&square(0.0, 0.0, 10.0));
    assert_eq!(pair_cost(&f, &f, 10.0, &MatchWeights::DEFAULT), 0.0);
}

#[test]
fn nearer_shape_is_cheaper() {
    let a = Features::of(&square(0.0, 0.0, 10.0));
    let near = Features::of(&square(5.0, 0.0, 10.0));
    let far = Features::of(&square(90.0, 90.0, 10.0));
    let diag = scene_diagonal(&[a.clone(), near.clone(), far.clone()]);
    let w = MatchWeights::DEFAULT;
    assert!(pair_cost(&a, &near, diag, &w) < pair_cost(&a, &far, diag, &w));
}

#[test]
fn degenerate_outline_is_maximally_distant() {
    let a = Features::of(&square(0.0, 0.0, 10.0));
    let bad = Features::of(&Shape::new("garbage").with_fill("#000"));
    assert!(bad.bounds.empty);
    let w = MatchWeights::SPATIAL;
    let c = pair_cost(&a, &bad, 100.0, &w);
    assert!((c - (1.0 + 0.35 + 0.15)).abs() < 1e-12);
    assert_eq!(scene_diagonal(&[bad]), 1.0);
}
