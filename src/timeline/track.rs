use kurbo::{Point, Vec2};
use serde::Serialize;

use crate::foundation::math::{clamp01, lerp_exact};
use crate::geom::color::parse_color;
use crate::morph::Interpolator;
use crate::orbit::binder::OrbitBinding;
use crate::scene::model::Shape;

use super::schedule::Slot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Morph,
    Appear,
    Disappear,
}

/// Resolved style at one end of a track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleSnapshot {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub opacity: f64,
    pub stroke_dasharray: Option<String>,
}

impl StyleSnapshot {
    pub fn of(shape: &Shape) -> Self {
        Self {
            fill: shape.fill.clone(),
            stroke: shape.stroke.clone(),
            stroke_width: shape.stroke_width,
            fill_opacity: shape.fill_opacity,
            stroke_opacity: shape.stroke_opacity,
            opacity: shape.opacity,
            stroke_dasharray: shape.stroke_dasharray.clone(),
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Orbit travel attached to a track plus the residuals that pin it to the exact endpoints.
#[derive(Debug, Clone)]
pub struct OrbitMotion {
    pub binding: OrbitBinding,
    /// `start_center - orbit_point(0)`, zero when snapping is off.
    pub start_residual: Vec2,
    /// `end_center - orbit_point(1)`, zero when snapping is off.
    pub end_residual: Vec2,
}

/// One shape's start-to-end animation. Built once per morph and never mutated.
#[derive(Debug, Clone)]
pub struct Track {
    pub index: usize,
    pub kind: TrackKind,
    /// Stable key of the subject shape, if any.
    pub key: Option<String>,
    pub interpolator: Interpolator,
    pub start_style: StyleSnapshot,
    pub end_style: StyleSnapshot,
    pub group_key: String,
    pub order: usize,
    /// Subject area as a fraction of the scene, in `[0, 1]`.
    pub importance: f64,
    pub slot: Slot,
    pub start_center: Point,
    pub end_center: Point,
    pub orbit: Option<OrbitMotion>,
}

impl Track {
    pub fn start_outline(&self) -> &str {
        self.interpolator.from_outline()
    }

    pub fn end_outline(&self) -> &str {
        self.interpolator.to_outline()
    }

    pub fn delay_ms(&self) -> f64 {
        self.slot.delay.total()
    }
}

/// RGBA blend of two paints; exact strings at the ends and a hard switch at the midpoint when
/// either side has no resolvable color.
pub fn mix_paint(a: Option<&str>, b: Option<&str>, t: f64) -> Option<String> {
    if a == b || t <= 0.0 {
        return a.map(str::to_owned);
    }
    if t >= 1.0 {
        return b.map(str::to_owned);
    }
    match (parse_color(a), parse_color(b)) {
        (Some(ca), Some(cb)) => Some(ca.lerp(&cb, t).to_css()),
        (None, None) => b.or(a).map(str::to_owned),
        _ => {
            if t < 0.5 {
                a.map(str::to_owned)
            } else {
                b.map(str::to_owned)
            }
        }
    }
}

/// Linear blend of optional numeric style; a missing side takes `fallback`.
pub fn mix_number(a: Option<f64>, b: Option<f64>, fallback: f64, t: f64) -> Option<f64> {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    match (a, b) {
        (None, None) => None,
        (a, b) => Some(lerp_exact(a.unwrap_or(fallback), b.unwrap_or(fallback), t)),
    }
}

pub fn mix_opacity(a: f64, b: f64, t: f64) -> f64 {
    clamp01(lerp_exact(a, b, t))
}

/// Dash pattern switches at the midpoint.
pub fn mix_dash(a: Option<&str>, b: Option<&str>, t: f64) -> Option<String> {
    if t < 0.5 { a } else { b }.map(str::to_owned)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/track.rs"]
mod tests;
