//! Motion profile shaping and per-property progress channels.

use serde::{Deserialize, Serialize};

use crate::animation::bezier::{CubicBezier, evaluate};
use crate::animation::ease::Ease;
use crate::foundation::math::{clamp01, lerp, remap_window};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionProfile {
    #[default]
    Uniform,
    /// Important shapes finish early.
    FocusFirst,
    /// Small shapes finish late.
    DetailFirst,
}

impl MotionProfile {
    /// Reshape local progress by blending toward an eased curve in proportion to importance.
    pub fn reshape(self, p: f64, importance: f64) -> f64 {
        let p = clamp01(p);
        let importance = clamp01(importance);
        match self {
            Self::Uniform => p,
            Self::FocusFirst => blend(p, Ease::OutCubic.apply(p), importance),
            Self::DetailFirst => blend(p, Ease::InCubic.apply(p), 1.0 - importance),
        }
    }
}

fn blend(p: f64, eased: f64, w: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return p;
    }
    clamp01(lerp(p, eased, w))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyTiming {
    #[default]
    Balanced,
    ShapeFirst,
    ColorLag,
}

/// `[lo, hi]` sub-window of local progress in which a channel moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub lo: f64,
    pub hi: f64,
}

const FULL: Window = Window { lo: 0.0, hi: 1.0 };

/// Windows for shape, color, opacity and stroke, in that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetWindows {
    pub shape: Window,
    pub color: Window,
    pub opacity: Window,
    pub stroke: Window,
}

impl PropertyTiming {
    pub fn windows(self) -> PresetWindows {
        match self {
            Self::Balanced => PresetWindows {
                shape: FULL,
                color: FULL,
                opacity: FULL,
                stroke: FULL,
            },
            Self::ShapeFirst => PresetWindows {
                shape: Window { lo: 0.0, hi: 0.8 },
                color: Window { lo: 0.2, hi: 1.0 },
                opacity: Window { lo: 0.0, hi: 0.7 },
                stroke: Window { lo: 0.25, hi: 1.0 },
            },
            Self::ColorLag => PresetWindows {
                shape: Window { lo: 0.08, hi: 1.0 },
                color: Window { lo: 0.25, hi: 1.0 },
                opacity: FULL,
                stroke: Window { lo: 0.1, hi: 1.0 },
            },
        }
    }
}

/// Explicit per-channel curves; a present curve replaces the preset window for its channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyCurves {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<CubicBezier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CubicBezier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<CubicBezier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<CubicBezier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Channels {
    pub shape: f64,
    pub color: f64,
    pub opacity: f64,
    pub stroke: f64,
}

impl Channels {
    pub fn split(local: f64, timing: PropertyTiming, curves: &PropertyCurves) -> Self {
        let w = timing.windows();
        let one = |curve: Option<CubicBezier>, win: Window| match curve {
            Some(c) => evaluate(local, &c),
            None => remap_window(local, win.lo, win.hi),
        };
        Self {
            shape: one(curves.shape, w.shape),
            color: one(curves.color, w.color),
            opacity: one(curves.opacity, w.opacity),
            stroke: one(curves.stroke, w.stroke),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/channels.rs"]
mod tests;
