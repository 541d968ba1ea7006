use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::bezier::CubicBezier;
use crate::animation::ease::Easing;
use crate::foundation::error::{MorphError, MorphResult};
use crate::matching::weights::MatchWeights;
use crate::morph::{DEFAULT_MAX_SEGMENT_LENGTH, EnginePreference};
use crate::orbit::binder::{OrbitDirection, OrbitMode};

use super::appear::AppearStyle;
use super::channels::{MotionProfile, PropertyCurves, PropertyTiming};
use super::schedule::{LayerStrategy, Stagger};

/// Options for one morph computation. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Per-track duration in milliseconds.
    pub duration: f64,
    pub easing: Easing,
    /// Resampling density hint; more points mean shorter segments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_points: Option<u32>,
    pub match_weights: MatchWeights,
    pub appear_style: AppearStyle,
    pub morph_engine: EnginePreference,
    pub layer_strategy: LayerStrategy,
    pub layer_stagger: f64,
    pub group_stagger: f64,
    pub intra_stagger: f64,
    pub grouping: bool,
    pub orbit_mode: OrbitMode,
    pub orbit_direction: OrbitDirection,
    pub orbit_tolerance: f64,
    pub orbit_snap: bool,
    pub motion_profile: MotionProfile,
    pub property_timing: PropertyTiming,
    pub property_curves: PropertyCurves,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            duration: 600.0,
            easing: Easing::default(),
            sample_points: None,
            match_weights: MatchWeights::default(),
            appear_style: AppearStyle::default(),
            morph_engine: EnginePreference::default(),
            layer_strategy: LayerStrategy::default(),
            layer_stagger: 70.0,
            group_stagger: 0.0,
            intra_stagger: 18.0,
            grouping: true,
            orbit_mode: OrbitMode::default(),
            orbit_direction: OrbitDirection::default(),
            orbit_tolerance: 6.0,
            orbit_snap: true,
            motion_profile: MotionProfile::default(),
            property_timing: PropertyTiming::default(),
            property_curves: PropertyCurves::default(),
        }
    }
}

fn check_non_negative(field: &str, v: f64) -> MorphResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(MorphError::validation(format!(
            "{field} must be a finite, non-negative number (got {v})"
        )))
    }
}

fn check_curve(field: &str, c: &CubicBezier) -> MorphResult<()> {
    let all_finite = [c.x1, c.y1, c.x2, c.y2].iter().all(|v| v.is_finite());
    if !all_finite || !(0.0..=1.0).contains(&c.x1) || !(0.0..=1.0).contains(&c.x2) {
        return Err(MorphError::validation(format!(
            "{field} control points must be finite with x1, x2 in [0, 1]"
        )));
    }
    Ok(())
}

fn or_default(v: f64, d: f64) -> f64 {
    if v.is_finite() && v >= 0.0 { v } else { d }
}

impl MorphConfig {
    pub fn from_json_str(s: &str) -> MorphResult<Self> {
        let cfg: MorphConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MorphResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            MorphError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> MorphResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(MorphError::validation(format!(
                "duration must be a finite, positive number of milliseconds (got {})",
                self.duration
            )));
        }
        check_non_negative("layer_stagger", self.layer_stagger)?;
        check_non_negative("group_stagger", self.group_stagger)?;
        check_non_negative("intra_stagger", self.intra_stagger)?;
        check_non_negative("orbit_tolerance", self.orbit_tolerance)?;
        if let Easing::Curve(c) = &self.easing {
            check_curve("easing", c)?;
        }
        let curves = [
            ("property_curves.shape", self.property_curves.shape),
            ("property_curves.color", self.property_curves.color),
            ("property_curves.opacity", self.property_curves.opacity),
            ("property_curves.stroke", self.property_curves.stroke),
        ];
        for (field, c) in curves {
            if let Some(c) = c {
                check_curve(field, &c)?;
            }
        }
        Ok(())
    }

    /// Copy with out-of-range scalars replaced by their defaults.
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        Self {
            duration: if self.duration.is_finite() && self.duration > 0.0 {
                self.duration
            } else {
                d.duration
            },
            layer_stagger: or_default(self.layer_stagger, d.layer_stagger),
            group_stagger: or_default(self.group_stagger, d.group_stagger),
            intra_stagger: or_default(self.intra_stagger, d.intra_stagger),
            orbit_tolerance: or_default(self.orbit_tolerance, d.orbit_tolerance),
            match_weights: self.match_weights.sanitized(),
            ..self.clone()
        }
    }

    /// Max segment length for the general engine: `clamp(200 / max(8, n), 0.5, 10)`.
    pub fn max_segment_length(&self) -> f64 {
        match self.sample_points {
            Some(n) if n > 0 => (200.0 / f64::from(n.max(8))).clamp(0.5, 10.0),
            _ => DEFAULT_MAX_SEGMENT_LENGTH,
        }
    }

    pub fn stagger(&self) -> Stagger {
        Stagger {
            layer_ms: self.layer_stagger,
            group_ms: self.group_stagger,
            intra_ms: self.intra_stagger,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
