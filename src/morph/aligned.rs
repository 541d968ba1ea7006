//! Command-aligned interpolation: both outlines share one command sequence, so numbers pair up
//! position by position.

use svgtypes::PathSegment;

use crate::foundation::math::lerp;
use crate::geom::outline::{parse_segments, write_outline};

#[derive(Debug, Clone)]
pub struct AlignedMorph {
    pairs: Vec<(PathSegment, PathSegment)>,
}

impl AlignedMorph {
    /// `None` unless both outlines parse to the same segment kinds in the same order, with the
    /// same absolute/relative form.
    pub fn new(from: &str, to: &str) -> Option<Self> {
        let a = parse_segments(from)?;
        let b = parse_segments(to)?;
        if a.len() != b.len() {
            return None;
        }
        let pairs: Vec<_> = a.into_iter().zip(b).collect();
        // One mismatched pair rejects the whole outline.
        if pairs.iter().any(|(x, y)| mix_segment(x, y, 0.5).is_none()) {
            return None;
        }
        Some(Self { pairs })
    }

    pub fn at(&self, t: f64) -> String {
        let segments: Vec<PathSegment> = self
            .pairs
            .iter()
            .filter_map(|(a, b)| mix_segment(a, b, t))
            .collect();
        write_outline(&segments)
    }
}

/// Blend two segments of the same kind. Arc flags switch at the midpoint.
fn mix_segment(a: &PathSegment, b: &PathSegment, t: f64) -> Option<PathSegment> {
    use PathSegment as S;
    let m = |p: f64, q: f64| lerp(p, q, t);
    let seg = match (*a, *b) {
        (S::MoveTo { abs, x, y }, S::MoveTo { abs: ab, x: bx, y: by }) if abs == ab => S::MoveTo {
            abs,
            x: m(x, bx),
            y: m(y, by),
        },
        (S::LineTo { abs, x, y }, S::LineTo { abs: ab, x: bx, y: by }) if abs == ab => S::LineTo {
            abs,
            x: m(x, bx),
            y: m(y, by),
        },
        (S::HorizontalLineTo { abs, x }, S::HorizontalLineTo { abs: ab, x: bx }) if abs == ab => {
            S::HorizontalLineTo { abs, x: m(x, bx) }
        }
        (S::VerticalLineTo { abs, y }, S::VerticalLineTo { abs: ab, y: by }) if abs == ab => {
            S::VerticalLineTo { abs, y: m(y, by) }
        }
        (
            S::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            },
            S::CurveTo {
                abs: ab,
                x1: bx1,
                y1: by1,
                x2: bx2,
                y2: by2,
                x: bx,
                y: by,
            },
        ) if abs == ab => S::CurveTo {
            abs,
            x1: m(x1, bx1),
            y1: m(y1, by1),
            x2: m(x2, bx2),
            y2: m(y2, by2),
            x: m(x, bx),
            y: m(y, by),
        },
        (
            S::SmoothCurveTo { abs, x2, y2, x, y },
            S::SmoothCurveTo {
                abs: ab,
                x2: bx2,
                y2: by2,
                x: bx,
                y: by,
            },
        ) if abs == ab => S::SmoothCurveTo {
            abs,
            x2: m(x2, bx2),
            y2: m(y2, by2),
            x: m(x, bx),
            y: m(y, by),
        },
        (
            S::Quadratic { abs, x1, y1, x, y },
            S::Quadratic {
                abs: ab,
                x1: bx1,
                y1: by1,
                x: bx,
                y: by,
            },
        ) if abs == ab => S::Quadratic {
            abs,
            x1: m(x1, bx1),
            y1: m(y1, by1),
            x: m(x, bx),
            y: m(y, by),
        },
        (S::SmoothQuadratic { abs, x, y }, S::SmoothQuadratic { abs: ab, x: bx, y: by })
            if abs == ab =>
        {
            S::SmoothQuadratic {
                abs,
                x: m(x, bx),
                y: m(y, by),
            }
        }
        (
            S::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            },
            S::EllipticalArc {
                abs: ab,
                rx: brx,
                ry: bry,
                x_axis_rotation: brot,
                large_arc: blarge,
                sweep: bsweep,
                x: bx,
                y: by,
            },
        ) if abs == ab => {
            let early = t < 0.5;
            S::EllipticalArc {
                abs,
                rx: m(rx, brx),
                ry: m(ry, bry),
                x_axis_rotation: m(x_axis_rotation, brot),
                large_arc: if early { large_arc } else { blarge },
                sweep: if early { sweep } else { bsweep },
                x: m(x, bx),
                y: m(y, by),
            }
        }
        (S::ClosePath { abs }, S::ClosePath { abs: ab }) if abs == ab => S::ClosePath { abs },
        _ => return None,
    };
    Some(seg)
}
