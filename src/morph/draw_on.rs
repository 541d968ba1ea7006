use serde::Serialize;

use crate::foundation::math::{clamp01, format_num};
use crate::geom::measure::ArcTable;

/// Stroke-dash state for a drawn-on outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashState {
    pub dasharray: String,
    pub dashoffset: f64,
}

/// Reveals a fixed outline by sliding a single dash along it.
#[derive(Debug, Clone)]
pub struct DrawOn {
    length: f64,
}

impl DrawOn {
    /// `None` for outlines without measurable length.
    pub fn new(outline: &str) -> Option<Self> {
        let length = ArcTable::from_outline(outline)?.total_length();
        (length.is_finite() && length > 0.0).then_some(Self { length })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn dash_at(&self, t: f64) -> DashState {
        let t = clamp01(t);
        let len = format_num(self.length);
        let dashoffset = if t >= 1.0 { 0.0 } else { self.length * (1.0 - t) };
        DashState {
            dasharray: format!("{len} {len}"),
            dashoffset,
        }
    }
}
