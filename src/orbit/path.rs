use std::collections::BTreeSet;
use std::sync::Arc;

use kurbo::{BezPath, Point};

use crate::geom::bounds::Bounds;
use crate::geom::measure::ArcTable;
use crate::geom::outline::is_closed;
use crate::scene::model::Shape;

/// Samples used when projecting a point onto an orbit.
pub const PROJECTION_SAMPLES: usize = 120;

/// A closed, stroked outline usable as a travel path.
#[derive(Debug, Clone)]
pub struct OrbitPath {
    pub id: String,
    pub outline: String,
    pub bounds: Bounds,
    /// Half the smaller bounds side, at least 1.
    pub radius: f64,
    table: ArcTable,
}

/// Nearest sampled position on an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Arc-length fraction in `[0, 1]`.
    pub fraction: f64,
    pub distance: f64,
}

impl OrbitPath {
    pub fn new(id: impl Into<String>, outline: &str) -> Option<Self> {
        let path = BezPath::from_svg(outline.trim()).ok()?;
        let table = ArcTable::new(&path);
        let length = table.total_length();
        if !length.is_finite() || length <= 0.0 {
            return None;
        }
        let bounds = Bounds::from_path(&path);
        let radius = (bounds.width().min(bounds.height()) / 2.0).max(1.0);
        Some(Self {
            id: id.into(),
            outline: outline.to_owned(),
            bounds,
            radius,
            table,
        })
    }

    pub fn length(&self) -> f64 {
        self.table.total_length()
    }

    pub fn point_at_fraction(&self, f: f64) -> Point {
        self.table.point_at_fraction(f)
    }

    pub fn project(&self, p: Point) -> Projection {
        let mut best = Projection {
            fraction: 0.0,
            distance: f64::INFINITY,
        };
        for i in 0..=PROJECTION_SAMPLES {
            let f = i as f64 / PROJECTION_SAMPLES as f64;
            let d = (self.point_at_fraction(f) - p).hypot();
            if d < best.distance {
                best = Projection {
                    fraction: f,
                    distance: d,
                };
            }
        }
        best
    }
}

/// Orbit candidates among `shapes`: closed, stroked, identified and of positive length.
///
/// The first shape wins when several share an id.
pub fn collect_orbit_candidates<'a>(
    shapes: impl IntoIterator<Item = &'a Shape>,
) -> Vec<Arc<OrbitPath>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for shape in shapes {
        if !is_closed(&shape.outline) || !shape.has_stroke() {
            continue;
        }
        let Some(id) = shape.id.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
            continue;
        };
        if seen.contains(id) {
            continue;
        }
        if let Some(orbit) = OrbitPath::new(id, &shape.outline) {
            seen.insert(id.to_owned());
            out.push(Arc::new(orbit));
        }
    }
    out
}
