//! Outline text helpers: segment parsing and writing, primitive builders and translation.

use kurbo::{BezPath, Vec2};
use svgtypes::{PathParser, PathSegment};

use crate::foundation::math::format_num;

/// Parse outline text into path segments.
///
/// Compact number and flag forms (`1-2`, `.5.5`, `A5 5 0 0110 0`) and implicit command repeats are
/// handled by the parser. Returns `None` on the first syntax error.
pub fn parse_segments(d: &str) -> Option<Vec<PathSegment>> {
    PathParser::from(d).collect::<Result<Vec<_>, _>>().ok()
}

/// Command letter of a segment: upper case when absolute.
pub fn segment_letter(seg: &PathSegment) -> char {
    let (letter, abs) = match *seg {
        PathSegment::MoveTo { abs, .. } => ('M', abs),
        PathSegment::LineTo { abs, .. } => ('L', abs),
        PathSegment::HorizontalLineTo { abs, .. } => ('H', abs),
        PathSegment::VerticalLineTo { abs, .. } => ('V', abs),
        PathSegment::CurveTo { abs, .. } => ('C', abs),
        PathSegment::SmoothCurveTo { abs, .. } => ('S', abs),
        PathSegment::Quadratic { abs, .. } => ('Q', abs),
        PathSegment::SmoothQuadratic { abs, .. } => ('T', abs),
        PathSegment::EllipticalArc { abs, .. } => ('A', abs),
        PathSegment::ClosePath { abs } => ('Z', abs),
    };
    if abs { letter } else { letter.to_ascii_lowercase() }
}

/// Command letters of an outline with numbers stripped, e.g. `"MHVHZ"`.
///
/// Implicit repeats are spelled out, so `"M0 0 10 10"` gives `"ML"`.
pub fn command_signature(d: &str) -> Option<String> {
    Some(parse_segments(d)?.iter().map(segment_letter).collect())
}

/// Write segments back as outline text, one explicit command letter per segment.
pub fn write_outline(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for seg in segments {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push(segment_letter(seg));
        let nums: Vec<String> = match *seg {
            PathSegment::MoveTo { x, y, .. }
            | PathSegment::LineTo { x, y, .. }
            | PathSegment::SmoothQuadratic { x, y, .. } => vec![format_num(x), format_num(y)],
            PathSegment::HorizontalLineTo { x, .. } => vec![format_num(x)],
            PathSegment::VerticalLineTo { y, .. } => vec![format_num(y)],
            PathSegment::CurveTo {
                x1, y1, x2, y2, x, y, ..
            } => [x1, y1, x2, y2, x, y].map(format_num).to_vec(),
            PathSegment::SmoothCurveTo { x2, y2, x, y, .. } => {
                [x2, y2, x, y].map(format_num).to_vec()
            }
            PathSegment::Quadratic { x1, y1, x, y, .. } => [x1, y1, x, y].map(format_num).to_vec(),
            PathSegment::EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
                ..
            } => vec![
                format_num(rx),
                format_num(ry),
                format_num(x_axis_rotation),
                flag(large_arc).to_owned(),
                flag(sweep).to_owned(),
                format_num(x),
                format_num(y),
            ],
            PathSegment::ClosePath { .. } => Vec::new(),
        };
        out.push_str(&nums.join(" "));
    }
    out
}

fn flag(v: bool) -> &'static str {
    if v { "1" } else { "0" }
}

pub fn is_closed(d: &str) -> bool {
    d.trim_end().ends_with(['z', 'Z'])
}

pub fn rect_outline(x: f64, y: f64, width: f64, height: f64, radius: f64) -> String {
    let x2 = x + width;
    let y2 = y + height;
    if radius <= 0.0 {
        return format!(
            "M{} {} H{} V{} H{} Z",
            format_num(x),
            format_num(y),
            format_num(x2),
            format_num(y2),
            format_num(x)
        );
    }

    let rx = radius.min(width / 2.0).max(0.0);
    let ry = radius.min(height / 2.0).max(0.0);
    let (fx, fy) = (format_num(rx), format_num(ry));
    [
        format!("M{} {}", format_num(x + rx), format_num(y)),
        format!("H{}", format_num(x2 - rx)),
        format!("A{fx} {fy} 0 0 1 {} {}", format_num(x2), format_num(y + ry)),
        format!("V{}", format_num(y2 - ry)),
        format!("A{fx} {fy} 0 0 1 {} {}", format_num(x2 - rx), format_num(y2)),
        format!("H{}", format_num(x + rx)),
        format!("A{fx} {fy} 0 0 1 {} {}", format_num(x), format_num(y2 - ry)),
        format!("V{}", format_num(y + ry)),
        format!("A{fx} {fy} 0 0 1 {} {}", format_num(x + rx), format_num(y)),
        "Z".to_owned(),
    ]
    .join(" ")
}

/// Circle as two half arcs starting at the leftmost point.
pub fn circle_outline(cx: f64, cy: f64, r: f64) -> String {
    let fr = format_num(r);
    let x0 = format_num(cx - r);
    let x1 = format_num(cx + r);
    let y = format_num(cy);
    format!("M{x0} {y} A{fr} {fr} 0 1 0 {x1} {y} A{fr} {fr} 0 1 0 {x0} {y} Z")
}

/// Translate an outline. Unparsable outlines are returned unchanged.
///
/// Works segment by segment so arcs stay arcs and numbers keep the [`format_num`] form. Relative
/// segments are left alone apart from a leading relative move-to, which is measured from the
/// origin.
pub fn translate_outline(d: &str, delta: Vec2) -> String {
    if delta.x == 0.0 && delta.y == 0.0 {
        return d.to_owned();
    }
    let Some(mut segments) = parse_segments(d) else {
        return d.to_owned();
    };
    let (dx, dy) = (delta.x, delta.y);
    for (i, seg) in segments.iter_mut().enumerate() {
        match seg {
            PathSegment::MoveTo { abs, x, y } if *abs || i == 0 => {
                *x += dx;
                *y += dy;
            }
            PathSegment::LineTo { abs: true, x, y }
            | PathSegment::SmoothQuadratic { abs: true, x, y }
            | PathSegment::EllipticalArc { abs: true, x, y, .. } => {
                *x += dx;
                *y += dy;
            }
            PathSegment::HorizontalLineTo { abs: true, x } => *x += dx,
            PathSegment::VerticalLineTo { abs: true, y } => *y += dy,
            PathSegment::CurveTo {
                abs: true,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                *x1 += dx;
                *y1 += dy;
                *x2 += dx;
                *y2 += dy;
                *x += dx;
                *y += dy;
            }
            PathSegment::SmoothCurveTo {
                abs: true,
                x2,
                y2,
                x,
                y,
            } => {
                *x2 += dx;
                *y2 += dy;
                *x += dx;
                *y += dy;
            }
            PathSegment::Quadratic {
                abs: true,
                x1,
                y1,
                x,
                y,
            } => {
                *x1 += dx;
                *y1 += dy;
                *x += dx;
                *y += dy;
            }
            _ => {}
        }
    }
    write_outline(&segments)
}

/// Split a path into its subpaths, one per move-to.
pub fn subpaths(path: &BezPath) -> Vec<BezPath> {
    let mut out: Vec<BezPath> = Vec::new();
    for el in path.elements() {
        if matches!(el, kurbo::PathEl::MoveTo(_)) {
            out.push(BezPath::new());
        }
        // Elements before the first move-to have no start point.
        if let Some(last) = out.last_mut() {
            last.push(*el);
        }
    }
    out.retain(|p| !p.elements().is_empty());
    out
}

#[cfg(test)]
#[path = "../../tests/unit/geom/outline.rs"]
mod tests;
