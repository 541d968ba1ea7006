use std::sync::Arc;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::path::OrbitPath;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitMode {
    #[serde(rename = "off")]
    Off,
    #[serde(rename = "auto")]
    Auto,
    #[default]
    #[serde(rename = "auto+manual")]
    AutoManual,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitDirection {
    Cw,
    Ccw,
    #[default]
    Shortest,
}

/// Arc travel resolved for one track; read-only after setup.
#[derive(Debug, Clone)]
pub struct OrbitBinding {
    pub orbit: Arc<OrbitPath>,
    pub arc_length: f64,
    pub start_fraction: f64,
    pub end_fraction: f64,
    /// Signed arc-length fraction in `[-1, 1]`; positive runs with the outline's direction.
    pub signed_delta: f64,
}

/// Inputs to [`resolve`] for one moving shape.
#[derive(Debug, Clone, Copy)]
pub struct OrbitQuery<'a> {
    pub start_center: Point,
    pub end_center: Point,
    pub mode: OrbitMode,
    pub direction: OrbitDirection,
    /// Floor for the accepted projection distance.
    pub tolerance: f64,
    /// Explicit orbit id, tried first in `auto+manual`.
    pub manual: Option<&'a str>,
    /// Orbit never bound to, usually the moving shape's own outline.
    pub exclude: Option<&'a str>,
}

/// `cw` is the forward delta along the outline, `ccw` the backward one.
fn signed_delta(t0: f64, t1: f64, direction: OrbitDirection) -> f64 {
    let cw = (t1 - t0 + 1.0).rem_euclid(1.0);
    let ccw = (t0 - t1 + 1.0).rem_euclid(1.0);
    match direction {
        OrbitDirection::Cw => cw,
        OrbitDirection::Ccw => -ccw,
        OrbitDirection::Shortest => {
            if cw <= ccw {
                cw
            } else {
                -ccw
            }
        }
    }
}

fn bind(orbit: &Arc<OrbitPath>, q: &OrbitQuery<'_>, t0: f64, t1: f64) -> OrbitBinding {
    OrbitBinding {
        orbit: Arc::clone(orbit),
        arc_length: orbit.length(),
        start_fraction: t0,
        end_fraction: t1,
        signed_delta: signed_delta(t0, t1, q.direction),
    }
}

/// Find the orbit that best explains a move from `start_center` to `end_center`.
///
/// `auto` accepts a candidate when both centers project within
/// `max(tolerance, radius * 0.05)` and keeps the smallest total distance. A manual id that names
/// a candidate wins outright in `auto+manual`.
pub fn resolve(candidates: &[Arc<OrbitPath>], q: &OrbitQuery<'_>) -> Option<OrbitBinding> {
    if q.mode == OrbitMode::Off {
        return None;
    }
    let usable = |c: &&Arc<OrbitPath>| q.exclude != Some(c.id.as_str());

    if q.mode == OrbitMode::AutoManual
        && let Some(id) = q.manual
        && let Some(orbit) = candidates.iter().filter(usable).find(|c| c.id == id)
    {
        let p0 = orbit.project(q.start_center);
        let p1 = orbit.project(q.end_center);
        return Some(bind(orbit, q, p0.fraction, p1.fraction));
    }

    let floor = if q.tolerance.is_finite() {
        q.tolerance.max(0.0)
    } else {
        0.0
    };
    let mut best: Option<(f64, OrbitBinding)> = None;
    for orbit in candidates.iter().filter(usable) {
        let tol = floor.max(orbit.radius * 0.05);
        let p0 = orbit.project(q.start_center);
        let p1 = orbit.project(q.end_center);
        if p0.distance > tol || p1.distance > tol {
            continue;
        }
        let score = p0.distance + p1.distance;
        if best.as_ref().is_none_or(|(s, _)| score < *s) {
            best = Some((score, bind(orbit, q, p0.fraction, p1.fraction)));
        }
    }
    best.map(|(_, b)| b)
}

/// Arc fraction reached at `local` progress, wrapped into `[0, 1)`.
pub fn orbit_fraction(binding: &OrbitBinding, local: f64) -> f64 {
    (binding.start_fraction + binding.signed_delta * local).rem_euclid(1.0)
}

pub fn orbit_point(binding: &OrbitBinding, local: f64) -> Point {
    binding
        .orbit
        .point_at_fraction(orbit_fraction(binding, local))
}

#[cfg(test)]
#[path = "../../tests/unit/orbit/binder.rs"]
mod tests;
