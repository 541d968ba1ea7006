use serde::{Deserialize, Serialize};

use super::bezier::{CubicBezier, evaluate};

/// Named timing functions.
///
/// The CSS keywords resolve to their standard cubic-bezier curves; the cubic polynomials are
/// exact and also drive motion profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    InCubic,
    OutCubic,
    InOutCubic,
}

impl Ease {
    pub fn curve(self) -> Option<CubicBezier> {
        match self {
            Self::Ease => Some(CubicBezier::EASE),
            Self::EaseIn => Some(CubicBezier::EASE_IN),
            Self::EaseOut => Some(CubicBezier::EASE_OUT),
            Self::EaseInOut => Some(CubicBezier::EASE_IN_OUT),
            Self::Linear | Self::InCubic | Self::OutCubic | Self::InOutCubic => None,
        }
    }

    /// Map progress `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if let Some(c) = self.curve() {
            return evaluate(t, &c);
        }
        match self {
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic if t < 0.5 => 4.0 * t * t * t,
            Self::InOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
            _ => t,
        }
    }
}

/// Global easing: a named function or an explicit timing curve.
///
/// Deserializes from `"ease-out"` or from `{"x1": .., "y1": .., "x2": .., "y2": ..}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Easing {
    Named(Ease),
    Curve(CubicBezier),
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Named(e) => e.apply(t),
            Self::Curve(c) => evaluate(t, c),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::Named(Ease::Linear)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
