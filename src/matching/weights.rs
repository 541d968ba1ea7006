use serde::{Deserialize, Serialize};

/// Relative influence of each term in the pairing cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub position: f64,
    pub size: f64,
    pub area: f64,
    pub color: f64,
    pub group: f64,
    pub class: f64,
}

impl MatchWeights {
    pub const DEFAULT: Self = Self {
        position: 1.0,
        size: 0.35,
        area: 0.15,
        color: 0.3,
        group: 0.25,
        class: 0.15,
    };

    /// Geometry only: structure and paint are ignored.
    pub const SPATIAL: Self = Self {
        position: 1.0,
        size: 0.35,
        area: 0.15,
        color: 0.0,
        group: 0.0,
        class: 0.0,
    };

    /// Non-finite or negative weights fall back to the default for that term.
    pub fn sanitized(self) -> Self {
        fn pick(v: f64, d: f64) -> f64 {
            if v.is_finite() && v >= 0.0 { v } else { d }
        }
        let d = Self::DEFAULT;
        Self {
            position: pick(self.position, d.position),
            size: pick(self.size, d.size),
            area: pick(self.area, d.area),
            color: pick(self.color, d.color),
            group: pick(self.group, d.group),
            class: pick(self.class, d.class),
        }
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
