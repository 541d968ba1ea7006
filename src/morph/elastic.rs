//! Topology-tolerant interpolation over arc-length resampled point rings.

use std::fmt::Write;

use kurbo::{BezPath, PathEl, Point};

use crate::foundation::math::format_num;
use crate::geom::measure::ArcTable;
use crate::geom::outline::subpaths;

const MIN_CLOSED_POINTS: usize = 8;
const MIN_OPEN_POINTS: usize = 2;
const MAX_POINTS: usize = 500;

#[derive(Debug, Clone)]
struct RingPair {
    from: Vec<Point>,
    to: Vec<Point>,
    closed: bool,
}

#[derive(Debug, Clone)]
pub struct ElasticMorph {
    rings: Vec<RingPair>,
}

struct Ring {
    table: ArcTable,
    closed: bool,
}

impl Ring {
    fn of(path: &BezPath) -> Self {
        let closed = matches!(path.elements().last(), Some(PathEl::ClosePath));
        Self {
            table: ArcTable::new(path),
            closed,
        }
    }
}

impl ElasticMorph {
    /// `None` when either outline cannot be parsed or has no subpath.
    ///
    /// Rings pair in order; a ring without a partner grows from (or shrinks into) its own
    /// centroid.
    pub fn new(
        from: &str,
        to: &str,
        max_segment_length: f64,
        closed: Option<bool>,
    ) -> Option<Self> {
        let a: Vec<Ring> = subpaths(&BezPath::from_svg(from.trim()).ok()?)
            .iter()
            .map(Ring::of)
            .collect();
        let b: Vec<Ring> = subpaths(&BezPath::from_svg(to.trim()).ok()?)
            .iter()
            .map(Ring::of)
            .collect();
        if a.is_empty() || b.is_empty() {
            return None;
        }
        let seg = if max_segment_length.is_finite() && max_segment_length > 0.0 {
            max_segment_length
        } else {
            2.0
        };

        let count = a.len().max(b.len());
        let mut rings = Vec::with_capacity(count);
        for i in 0..count {
            let pair = match (a.get(i), b.get(i)) {
                (Some(ra), Some(rb)) => {
                    let closed = closed.unwrap_or(ra.closed || rb.closed);
                    let longest = ra.table.total_length().max(rb.table.total_length());
                    let n = point_count(longest, seg, closed);
                    let from = ra.table.sample_uniform(n, closed);
                    let to = align(&from, rb.table.sample_uniform(n, closed), closed);
                    RingPair { from, to, closed }
                }
                (Some(ra), None) => {
                    let closed = closed.unwrap_or(ra.closed);
                    let n = point_count(ra.table.total_length(), seg, closed);
                    let from = ra.table.sample_uniform(n, closed);
                    let to = vec![centroid(&from); n];
                    RingPair { from, to, closed }
                }
                (None, Some(rb)) => {
                    let closed = closed.unwrap_or(rb.closed);
                    let n = point_count(rb.table.total_length(), seg, closed);
                    let to = rb.table.sample_uniform(n, closed);
                    let from = vec![centroid(&to); n];
                    RingPair { from, to, closed }
                }
                (None, None) => continue,
            };
            rings.push(pair);
        }
        Some(Self { rings })
    }

    pub fn point_count(&self) -> usize {
        self.rings.iter().map(|r| r.from.len()).sum()
    }

    pub fn at(&self, t: f64) -> String {
        let mut out = String::new();
        for ring in &self.rings {
            for (i, (p, q)) in ring.from.iter().zip(&ring.to).enumerate() {
                let pt = p.lerp(*q, t);
                if !out.is_empty() {
                    out.push(' ');
                }
                let cmd = if i == 0 { 'M' } else { 'L' };
                let _ = write!(out, "{cmd}{} {}", format_num(pt.x), format_num(pt.y));
            }
            if ring.closed {
                out.push_str(" Z");
            }
        }
        out
    }
}

fn point_count(length: f64, seg: f64, closed: bool) -> usize {
    let min = if closed { MIN_CLOSED_POINTS } else { MIN_OPEN_POINTS };
    let raw = (length / seg).ceil();
    let n = if raw.is_finite() && raw > 0.0 { raw as usize } else { 0 };
    n.clamp(min, MAX_POINTS)
}

fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ORIGIN;
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    let n = points.len() as f64;
    Point::new(sx / n, sy / n)
}

fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum::<f64>()
        / 2.0
}

fn squared_cost(a: &[Point], b: &[Point], offset: usize) -> f64 {
    let n = b.len();
    a.iter()
        .enumerate()
        .map(|(i, p)| (*p - b[(i + offset) % n]).hypot2())
        .sum()
}

/// Reorder `to` so each point travels the least distance from its `from` partner.
///
/// Closed rings match winding and pick the best rotation; open rings only choose direction.
fn align(from: &[Point], mut to: Vec<Point>, closed: bool) -> Vec<Point> {
    if to.len() < 2 {
        return to;
    }
    if !closed {
        let straight = squared_cost(from, &to, 0);
        to.reverse();
        let reversed = squared_cost(from, &to, 0);
        if straight <= reversed {
            to.reverse();
        }
        return to;
    }

    if signed_area(from) * signed_area(&to) < 0.0 {
        to.reverse();
    }
    let best = (0..to.len())
        .map(|k| (k, squared_cost(from, &to, k)))
        .fold((0, f64::INFINITY), |acc, cur| if cur.1 < acc.1 { cur } else { acc })
        .0;
    to.rotate_left(best);
    to
}

#[cfg(test)]
#[path = "../../tests/unit/morph/elastic.rs"]
mod tests;
