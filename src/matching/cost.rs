//! Pairwise dissimilarity between shapes.

use std::collections::BTreeSet;

use crate::geom::bounds::Bounds;
use crate::geom::color::{Rgba, color_distance, parse_color};
use crate::scene::model::Shape;

use super::weights::MatchWeights;

/// Per-shape measurements reused across a cost matrix row or column.
#[derive(Debug, Clone)]
pub struct Features {
    pub bounds: Bounds,
    pub fill: Option<Rgba>,
    pub path_key: Option<String>,
    pub classes: Vec<String>,
}

impl Features {
    pub fn of(shape: &Shape) -> Self {
        Self {
            bounds: shape.bounds(),
            fill: parse_color(shape.fill.as_deref()),
            path_key: shape.path_key.clone().filter(|k| !k.is_empty()),
            classes: shape.class_tokens(),
        }
    }
}

/// Normalizing diagonal for a set of shapes; never zero.
pub fn scene_diagonal(features: &[Features]) -> f64 {
    let d = Bounds::union_all(features.iter().map(|f| &f.bounds)).diagonal();
    if d.is_finite() && d > 0.0 { d } else { 1.0 }
}

/// Structural dissimilarity: `1 - shared_prefix / longer_chain`.
pub fn path_distance(a: Option<&str>, b: Option<&str>) -> f64 {
    match (a, b) {
        (None, None) => 0.0,
        (Some(_), None) | (None, Some(_)) => 1.0,
        (Some(a), Some(b)) => {
            let xs: Vec<&str> = a.split('/').collect();
            let ys: Vec<&str> = b.split('/').collect();
            let common = xs.iter().zip(&ys).take_while(|(x, y)| x == y).count();
            let longest = xs.len().max(ys.len()).max(1);
            1.0 - common as f64 / longest as f64
        }
    }
}

/// Jaccard dissimilarity of two class sets.
pub fn class_distance(a: &[String], b: &[String]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 0.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => {
            let xs: BTreeSet<&str> = a.iter().map(String::as_str).collect();
            let ys: BTreeSet<&str> = b.iter().map(String::as_str).collect();
            let inter = xs.intersection(&ys).count();
            let union = xs.union(&ys).count().max(1);
            1.0 - inter as f64 / union as f64
        }
    }
}

/// Weighted cost of pairing `a` with `b`.
///
/// A degenerate outline on either side makes its geometric terms maximal.
pub fn pair_cost(a: &Features, b: &Features, diag: f64, w: &MatchWeights) -> f64 {
    let (pos, size, area) = if a.bounds.empty || b.bounds.empty {
        (1.0, 1.0, 1.0)
    } else {
        let ca = a.bounds.center();
        let cb = b.bounds.center();
        let pos = (ca - cb).hypot() / diag;
        let size = (a.bounds.width() - b.bounds.width())
            .hypot(a.bounds.height() - b.bounds.height())
            / diag;
        let (aa, ab) = (a.bounds.area(), b.bounds.area());
        let area = (aa - ab).abs() / aa.max(ab).max(1.0);
        (pos, size, area)
    };
    let color = color_distance(a.fill.as_ref(), b.fill.as_ref());
    let group = path_distance(a.path_key.as_deref(), b.path_key.as_deref());
    let class = class_distance(&a.classes, &b.classes);

    w.position * pos
        + w.size * size
        + w.area * area
        + w.color * color
        + w.group * group
        + w.class * class
}

#[cfg(test)]
#[path = "../../tests/unit/matching/cost.rs"]
mod tests;
