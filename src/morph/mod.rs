//! Outline interpolation.
//!
//! [`build`] resolves the engine once per track; the returned [`Interpolator`] is a pure
//! function of the fraction.

pub mod aligned;
pub mod draw_on;
pub mod elastic;

use serde::{Deserialize, Serialize};

pub use aligned::AlignedMorph;
pub use draw_on::{DashState, DrawOn};
pub use elastic::ElasticMorph;

use crate::geom::outline::command_signature;

pub const DEFAULT_MAX_SEGMENT_LENGTH: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnginePreference {
    #[default]
    Auto,
    #[serde(alias = "flubber")]
    General,
    #[serde(alias = "d3")]
    Aligned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphOptions {
    /// Resampling density for the general engine, in outline units per point.
    pub max_segment_length: f64,
    /// Force rings open or closed; `None` follows each outline.
    pub closed: Option<bool>,
    pub engine: EnginePreference,
    /// Reveal the end outline with a dash instead of interpolating geometry.
    pub draw_on: bool,
}

impl Default for MorphOptions {
    fn default() -> Self {
        Self {
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            closed: None,
            engine: EnginePreference::Auto,
            draw_on: false,
        }
    }
}

/// Engine picked for a track, for logs and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    Identical,
    Aligned,
    General,
    DrawOn,
    Switch,
}

#[derive(Debug, Clone)]
enum Strategy {
    Identical,
    Aligned(AlignedMorph),
    General(ElasticMorph),
    DrawOn(DrawOn),
    /// Neither outline could be resampled; jump at the midpoint.
    Switch,
}

#[derive(Debug, Clone)]
pub struct Interpolator {
    from: String,
    to: String,
    strategy: Strategy,
}

/// Build the interpolator from `from` to `to`.
pub fn build(from: &str, to: &str, opts: &MorphOptions) -> Interpolator {
    let strategy = select(from, to, opts);
    // A drawn-on outline is already in place at the start.
    let from = if matches!(strategy, Strategy::DrawOn(_)) {
        to
    } else {
        from
    };
    Interpolator {
        from: from.to_owned(),
        to: to.to_owned(),
        strategy,
    }
}

fn select(from: &str, to: &str, opts: &MorphOptions) -> Strategy {
    if opts.draw_on
        && let Some(d) = DrawOn::new(to)
    {
        return Strategy::DrawOn(d);
    }
    if from == to {
        return Strategy::Identical;
    }
    if opts.engine != EnginePreference::General
        && command_signature(from).is_some_and(|s| Some(s) == command_signature(to))
        && let Some(m) = AlignedMorph::new(from, to)
    {
        return Strategy::Aligned(m);
    }
    match ElasticMorph::new(from, to, opts.max_segment_length, opts.closed) {
        Some(m) => Strategy::General(m),
        None => Strategy::Switch,
    }
}

impl Interpolator {
    pub fn kind(&self) -> EngineKind {
        match self.strategy {
            Strategy::Identical => EngineKind::Identical,
            Strategy::Aligned(_) => EngineKind::Aligned,
            Strategy::General(_) => EngineKind::General,
            Strategy::DrawOn(_) => EngineKind::DrawOn,
            Strategy::Switch => EngineKind::Switch,
        }
    }

    pub fn from_outline(&self) -> &str {
        &self.from
    }

    pub fn to_outline(&self) -> &str {
        &self.to
    }

    /// Outline at fraction `t`; the exact input strings at the ends.
    pub fn at(&self, t: f64) -> String {
        if t.is_nan() || t <= 0.0 {
            return self.from.clone();
        }
        if t >= 1.0 {
            return self.to.clone();
        }
        match &self.strategy {
            Strategy::Identical | Strategy::DrawOn(_) => self.to.clone(),
            Strategy::Aligned(m) => m.at(t),
            Strategy::General(m) => m.at(t),
            Strategy::Switch => {
                if t < 0.5 {
                    self.from.clone()
                } else {
                    self.to.clone()
                }
            }
        }
    }

    /// Dash state for draw-on tracks.
    pub fn dash_at(&self, t: f64) -> Option<DashState> {
        match &self.strategy {
            Strategy::DrawOn(d) => Some(d.dash_at(t)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/mod.rs"]
mod tests;
