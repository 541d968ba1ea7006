use super::*;
use crate::geom::bounds::Bounds;

#[test]
fn square_to_circle_keeps_ring_closed() {
    let m = ElasticMorph::new(
        "M0 0 H20 V20 H0 Z",
        "M0 10 A10 10 0 1 0 20 10 A10 10 0 1 0 0 10 Z",
        2.0,
        None,
    )
    .unwrap();
    let mid = m.at(0.5);
    assert!(mid.starts_with('M'));
    assert!(mid.ends_with('Z'));
    let b = Bounds::from_outline(&mid);
    assert!((b.center().x - 10.0).abs() < 0.5);
    assert!((b.center().y - 10.0).abs() < 0.5);
}

#[test]
fn translation_moves_every_point_halfway() {
    let m = ElasticMorph::new("M0 0 H10 V10 H0 Z", "M100 0 H110 V10 H100 Z", 2.0, None).unwrap();
    let b = Bounds::from_outline(&m.at(0.5));
    assert!((b.min_x - 50.0).abs() < 1e-6);
    assert!((b.max_x - 60.0).abs() < 1e-6);
    assert!((b.height() - 10.0).abs() < 1e-6);
}

#[test]
fn open_paths_stay_open_and_pick_direction() {
    let m = ElasticMorph::new("M0 0 L10 0", "M10 5 L0 5", 1.0, None).unwrap();
    let mid = m.at(0.5);
    assert!(!mid.contains('Z'));
    // Endpoints pair with the nearer end, so the midline keeps its full width.
    let b = Bounds::from_outline(&mid);
    assert!((b.width() - 10.0).abs() < 1e-6);
}

#[test]
fn forced_open_drops_close() {
    let m = ElasticMorph::new("M0 0 H10 V10 H0 Z", "M0 0 H20 V20 H0 Z", 2.0, Some(false)).unwrap();
    assert!(!m.at(0.3).contains('Z'));
}

#[test]
fn extra_ring_grows_from_centroid() {
    let m = ElasticMorph::new(
        "M0 0 H10 V10 H0 Z",
        "M0 0 H10 V10 H0 Z M50 50 H60 V60 H50 Z",
        2.0,
        None,
    )
    .unwrap();
    let early = m.at(0.0);
    assert_eq!(early.matches('M').count(), 2);
    assert!(early.contains("M55 55"));
}

#[test]
fn point_count_is_capped() {
    let m = ElasticMorph::new("M0 0 H100000 Z", "M0 0 H5 Z", 0.5, None).unwrap();
    assert_eq!(m.point_count(), MAX_POINTS);
}

#[test]
fn unparsable_outline_is_rejected() {
    assert!(ElasticMorph::new("bogus", "M0 0 L1 1", 2.0, None).is_none());
}
