use kurbo::{BezPath, ParamCurveExtrema, PathEl, Point, Rect};
use serde::Serialize;

/// Axis-aligned bounds of an outline.
///
/// Malformed or empty outlines produce [`Bounds::EMPTY`], a zero-area box at the origin with
/// `empty` set so the matcher can treat it as maximally distant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// `true` when the outline contributed no finite point.
    pub empty: bool,
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
        empty: true,
    };

    pub fn from_rect(r: Rect) -> Self {
        if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
            return Self::EMPTY;
        }
        let r = r.abs();
        Self {
            min_x: r.x0,
            min_y: r.y0,
            max_x: r.x1,
            max_y: r.y1,
            empty: false,
        }
    }

    /// Parse outline text and measure it. Never fails.
    pub fn from_outline(d: &str) -> Self {
        match BezPath::from_svg(d.trim()) {
            Ok(path) => Self::from_path(&path),
            Err(_) => Self::EMPTY,
        }
    }

    /// Tight bounds of the path's segments; a path of bare move-tos falls back to its points.
    pub fn from_path(path: &BezPath) -> Self {
        let mut acc: Option<Rect> = None;
        for seg in path.segments() {
            let bb = seg.bounding_box();
            acc = Some(match acc {
                Some(r) => r.union(bb),
                None => bb,
            });
        }
        if acc.is_none() {
            for el in path.elements() {
                if let PathEl::MoveTo(p) = el {
                    let r = Rect::from_points(*p, *p);
                    acc = Some(match acc {
                        Some(a) => a.union(r),
                        None => r,
                    });
                }
            }
        }
        acc.map(Self::from_rect).unwrap_or(Self::EMPTY)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    pub fn area(&self) -> f64 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// Smallest bounds covering both; empty operands are ignored.
    pub fn union(&self, other: &Bounds) -> Bounds {
        match (self.empty, other.empty) {
            (true, true) => Self::EMPTY,
            (true, false) => *other,
            (false, true) => *self,
            (false, false) => Bounds {
                min_x: self.min_x.min(other.min_x),
                min_y: self.min_y.min(other.min_y),
                max_x: self.max_x.max(other.max_x),
                max_y: self.max_y.max(other.max_y),
                empty: false,
            },
        }
    }

    pub fn union_all<'a>(items: impl IntoIterator<Item = &'a Bounds>) -> Bounds {
        items
            .into_iter()
            .fold(Self::EMPTY, |acc, b| acc.union(b))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geom/bounds.rs"]
mod tests;
