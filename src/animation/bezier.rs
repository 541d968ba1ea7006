use serde::{Deserialize, Serialize};

use crate::foundation::math::clamp01;

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-6;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 12;

/// Cubic timing curve through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const LINEAR: CubicBezier = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
    pub const EASE: CubicBezier = CubicBezier::new(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: CubicBezier = CubicBezier::new(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn evaluate(&self, fraction: f64) -> f64 {
        evaluate(fraction, self)
    }
}

impl Default for CubicBezier {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Polynomial coefficients `(a, b, c)` of one axis: `((a*u + b)*u + c)*u`.
#[derive(Clone, Copy)]
struct Axis {
    a: f64,
    b: f64,
    c: f64,
}

impl Axis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    fn sample(self, u: f64) -> f64 {
        ((self.a * u + self.b) * u + self.c) * u
    }

    fn slope(self, u: f64) -> f64 {
        (3.0 * self.a * u + 2.0 * self.b) * u + self.c
    }

    /// Solve `sample(u) == x` for `u`: Newton first, bisection when the slope is too flat or
    /// Newton did not land within precision.
    fn solve(self, x: f64) -> f64 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = self.sample(u) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                return u.clamp(0.0, 1.0);
            }
            let d = self.slope(u);
            if d.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            u -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        let mut u = if u.is_finite() { u.clamp(0.0, 1.0) } else { x };
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            let delta = self.sample(u) - x;
            if delta.abs() < SUBDIVISION_PRECISION {
                return u;
            }
            if delta > 0.0 {
                hi = u;
            } else {
                lo = u;
            }
            u = (lo + hi) / 2.0;
        }
        u
    }
}

/// Evaluate `curve` at `fraction`.
///
/// The fraction is clamped to `[0, 1]` and the endpoints return exactly 0 and 1. Control points
/// are clamped to the unit square so the result always stays in range.
pub fn evaluate(fraction: f64, curve: &CubicBezier) -> f64 {
    let x = clamp01(fraction);
    if x == 0.0 || x == 1.0 {
        return x;
    }
    let ax = Axis::new(clamp01(curve.x1), clamp01(curve.x2));
    let ay = Axis::new(clamp01(curve.y1), clamp01(curve.y2));
    clamp01(ay.sample(ax.solve(x)))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bezier.rs"]
mod tests;
