use std::sync::Arc;

use kurbo::{Point, Vec2};
use rayon::prelude::*;
use serde::Serialize;

use crate::foundation::math::clamp01;
use crate::geom::bounds::Bounds;
use crate::geom::outline::{is_closed, translate_outline};
use crate::matching::matcher::match_shapes;
use crate::morph::{self, EngineKind, MorphOptions};
use crate::orbit::binder::{OrbitQuery, orbit_point, resolve};
use crate::orbit::path::{OrbitPath, collect_orbit_candidates};
use crate::scene::model::Shape;

use super::appear::{appear_outline, collapse_outline};
use super::channels::Channels;
use super::config::MorphConfig;
use super::schedule::{ScheduleItem, Slot, schedule};
use super::track::{
    OrbitMotion, StyleSnapshot, Track, TrackKind, mix_dash, mix_number, mix_opacity, mix_paint,
};

const DEFAULT_STROKE_WIDTH: f64 = 1.0;
const DEFAULT_CHANNEL_OPACITY: f64 = 1.0;
/// Centers closer than this count as not moving.
const STATIONARY_EPSILON: f64 = 1e-9;

/// One track's state at a progress value; what a renderer writes onto its element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSample {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub kind: TrackKind,
    pub outline: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub opacity: f64,
    pub stroke_dasharray: Option<String>,
    pub stroke_dashoffset: Option<f64>,
    /// Local progress after delay and motion profile.
    pub progress: f64,
}

/// A built morph: immutable tracks plus the timing needed to sample them.
#[derive(Debug, Clone)]
pub struct Morph {
    tracks: Vec<Track>,
    config: MorphConfig,
    total_ms: f64,
}

struct Draft<'a> {
    kind: TrackKind,
    /// Shape the track is "about": the end shape, or the start shape for a disappear.
    subject: &'a Shape,
    start: Option<&'a Shape>,
    end: Option<&'a Shape>,
    start_outline: String,
    end_outline: String,
    start_style: StyleSnapshot,
    end_style: StyleSnapshot,
}

/// Group key: structural path, else first class token, else tag.
fn group_key(shape: &Shape) -> String {
    shape
        .path_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .or_else(|| shape.first_class())
        .unwrap_or_else(|| shape.tag.clone())
}

fn draw_on_eligible(shape: &Shape) -> bool {
    shape.has_stroke()
        && !shape.has_fill()
        && shape.stroke_dasharray.is_none()
        && !is_closed(&shape.outline)
}

fn appear_draft<'a>(end: &'a Shape, cfg: &MorphConfig) -> Draft<'a> {
    Draft {
        kind: TrackKind::Appear,
        subject: end,
        start: None,
        end: Some(end),
        start_outline: appear_outline(&end.outline, cfg.appear_style),
        end_outline: end.outline.clone(),
        start_style: StyleSnapshot::of(end).with_opacity(0.0),
        end_style: StyleSnapshot::of(end),
    }
}

fn drafts<'a>(start: Option<&'a [Shape]>, end: &'a [Shape], cfg: &MorphConfig) -> Vec<Draft<'a>> {
    let Some(start) = start else {
        return end.iter().map(|e| appear_draft(e, cfg)).collect();
    };

    let res = match_shapes(start, end, &cfg.match_weights);
    let mut out = Vec::with_capacity(
        res.pairs.len() + res.unmatched_end.len() + res.unmatched_start.len(),
    );
    for p in &res.pairs {
        out.push(Draft {
            kind: TrackKind::Morph,
            subject: p.end,
            start: Some(p.start),
            end: Some(p.end),
            start_outline: p.start.outline.clone(),
            end_outline: p.end.outline.clone(),
            start_style: StyleSnapshot::of(p.start),
            end_style: StyleSnapshot::of(p.end),
        });
    }
    for e in &res.unmatched_end {
        out.push(appear_draft(e, cfg));
    }
    for s in &res.unmatched_start {
        out.push(Draft {
            kind: TrackKind::Disappear,
            subject: s,
            start: Some(s),
            end: None,
            start_outline: s.outline.clone(),
            end_outline: collapse_outline(&s.outline),
            start_style: StyleSnapshot::of(s),
            end_style: StyleSnapshot::of(s).with_opacity(0.0),
        });
    }
    out
}

fn bind_orbit(
    draft: &Draft<'_>,
    candidates: &[Arc<OrbitPath>],
    start_center: Point,
    end_center: Point,
    cfg: &MorphConfig,
) -> Option<OrbitMotion> {
    if draft.kind != TrackKind::Morph
        || (end_center - start_center).hypot() <= STATIONARY_EPSILON
    {
        return None;
    }
    let (start, end) = (draft.start?, draft.end?);
    let q = OrbitQuery {
        start_center,
        end_center,
        mode: cfg.orbit_mode,
        direction: end.orbit_dir.or(start.orbit_dir).unwrap_or(cfg.orbit_direction),
        tolerance: cfg.orbit_tolerance,
        manual: end.orbit_id().or_else(|| start.orbit_id()),
        exclude: end.id.as_deref().or(start.id.as_deref()),
    };
    let binding = resolve(candidates, &q)?;
    let (start_residual, end_residual) = if cfg.orbit_snap {
        (
            start_center - orbit_point(&binding, 0.0),
            end_center - orbit_point(&binding, 1.0),
        )
    } else {
        (Vec2::ZERO, Vec2::ZERO)
    };
    tracing::debug!(
        orbit = %binding.orbit.id,
        start = binding.start_fraction,
        end = binding.end_fraction,
        delta = binding.signed_delta,
        "orbit bound"
    );
    Some(OrbitMotion {
        binding,
        start_residual,
        end_residual,
    })
}

/// Build every track for a morph from `start` to `end`.
///
/// With no `start` scene every end shape appears. Matching, interpolator construction,
/// orbit binding and scheduling all happen here; sampling afterwards is pure.
#[tracing::instrument(skip_all, fields(start = start.map(<[Shape]>::len), end = end.len()))]
pub fn build_morph(start: Option<&[Shape]>, end: &[Shape], config: &MorphConfig) -> Morph {
    let cfg = config.sanitized();
    let drafts = drafts(start, end, &cfg);

    let candidates = match start {
        Some(s) => collect_orbit_candidates(end.iter().chain(s)),
        None => Vec::new(),
    };

    let bounds: Vec<Bounds> = drafts.iter().map(|d| d.subject.bounds()).collect();
    let reference_area = Bounds::union_all(&bounds).area();

    let items: Vec<ScheduleItem> = drafts
        .iter()
        .zip(&bounds)
        .map(|(d, b)| ScheduleItem {
            importance: if reference_area > 0.0 {
                clamp01(b.area() / reference_area)
            } else {
                0.0
            },
            order: d.subject.order,
            group_key: group_key(d.subject),
        })
        .collect();
    let slots: Vec<Slot> = schedule(&items, cfg.layer_strategy, cfg.grouping, &cfg.stagger());

    let base_opts = MorphOptions {
        max_segment_length: cfg.max_segment_length(),
        closed: None,
        engine: cfg.morph_engine,
        draw_on: false,
    };

    let mut tracks = Vec::with_capacity(drafts.len());
    for (index, ((draft, item), slot)) in drafts.into_iter().zip(items).zip(slots).enumerate() {
        let draw_on = draft.kind == TrackKind::Appear && draw_on_eligible(draft.subject);
        // A collapse circle never closes an open subject.
        let open = match draft.kind {
            TrackKind::Appear => !is_closed(&draft.end_outline),
            TrackKind::Disappear => !is_closed(&draft.start_outline),
            TrackKind::Morph => {
                !is_closed(&draft.start_outline) && !is_closed(&draft.end_outline)
            }
        };
        let opts = MorphOptions {
            draw_on,
            closed: open.then_some(false),
            ..base_opts
        };
        let interpolator = morph::build(&draft.start_outline, &draft.end_outline, &opts);

        let start_center = Bounds::from_outline(interpolator.from_outline()).center();
        let end_center = Bounds::from_outline(interpolator.to_outline()).center();
        let orbit = bind_orbit(&draft, &candidates, start_center, end_center, &cfg);

        tracing::debug!(
            index,
            kind = ?draft.kind,
            engine = ?interpolator.kind(),
            layer = slot.layer,
            delay_ms = slot.delay.total(),
            "track built"
        );

        tracks.push(Track {
            index,
            kind: draft.kind,
            key: draft.subject.stable_key().map(str::to_owned),
            interpolator,
            start_style: draft.start_style,
            end_style: draft.end_style,
            group_key: item.group_key,
            order: item.order,
            importance: item.importance,
            slot,
            start_center,
            end_center,
            orbit,
        });
    }

    let max_delay = tracks.iter().map(Track::delay_ms).fold(0.0, f64::max);
    let total_ms = cfg.duration + max_delay;
    tracing::debug!(tracks = tracks.len(), total_ms, "morph built");

    Morph {
        tracks,
        config: cfg,
        total_ms,
    }
}

impl Morph {
    /// Borrow the built tracks.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Borrow the configuration this morph was built with.
    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Duration plus the largest track delay, in milliseconds.
    pub fn total_duration_ms(&self) -> f64 {
        self.total_ms
    }

    /// Number of tracks per interpolation engine, in first-seen order.
    pub fn engine_counts(&self) -> Vec<(EngineKind, usize)> {
        let mut out: Vec<(EngineKind, usize)> = Vec::new();
        for t in &self.tracks {
            let k = t.interpolator.kind();
            match out.iter_mut().find(|(e, _)| *e == k) {
                Some((_, n)) => *n += 1,
                None => out.push((k, 1)),
            }
        }
        out
    }

    /// Local progress of `track` at global `progress`, after delay and motion profile.
    pub fn local_progress(&self, track: &Track, progress: f64) -> f64 {
        let p = clamp01(progress);
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }
        let time = self.config.easing.apply(p) * self.total_ms;
        let local = clamp01((time - track.delay_ms()) / self.config.duration);
        self.config.motion_profile.reshape(local, track.importance)
    }

    /// Per-property progress of `track` at global `progress`.
    pub fn channels(&self, track: &Track, progress: f64) -> Channels {
        Channels::split(
            self.local_progress(track, progress),
            self.config.property_timing,
            &self.config.property_curves,
        )
    }

    /// Frame values of one track at global `progress`.
    pub fn sample_track(&self, track: &Track, progress: f64) -> TrackSample {
        let local = self.local_progress(track, progress);
        let ch = self.channels(track, progress);

        let mut outline = track.interpolator.at(ch.shape);
        if let Some(motion) = &track.orbit
            && ch.shape > 0.0
            && ch.shape < 1.0
        {
            let f = ch.shape;
            let target = orbit_point(&motion.binding, f)
                + motion.start_residual * (1.0 - f)
                + motion.end_residual * f;
            let current = Bounds::from_outline(&outline);
            if !current.empty {
                outline = translate_outline(&outline, target - current.center());
            }
        }

        let (s, e) = (&track.start_style, &track.end_style);
        let dash = track.interpolator.dash_at(ch.shape);
        let (stroke_dasharray, stroke_dashoffset) = match dash {
            Some(d) => (Some(d.dasharray), Some(d.dashoffset)),
            None => (
                mix_dash(
                    s.stroke_dasharray.as_deref(),
                    e.stroke_dasharray.as_deref(),
                    ch.stroke,
                ),
                None,
            ),
        };

        TrackSample {
            index: track.index,
            key: track.key.clone(),
            kind: track.kind,
            outline,
            fill: mix_paint(s.fill.as_deref(), e.fill.as_deref(), ch.color),
            stroke: mix_paint(s.stroke.as_deref(), e.stroke.as_deref(), ch.color),
            stroke_width: mix_number(
                s.stroke_width,
                e.stroke_width,
                DEFAULT_STROKE_WIDTH,
                ch.stroke,
            ),
            fill_opacity: mix_number(
                s.fill_opacity,
                e.fill_opacity,
                DEFAULT_CHANNEL_OPACITY,
                ch.stroke,
            ),
            stroke_opacity: mix_number(
                s.stroke_opacity,
                e.stroke_opacity,
                DEFAULT_CHANNEL_OPACITY,
                ch.stroke,
            ),
            opacity: mix_opacity(s.opacity, e.opacity, ch.opacity),
            stroke_dasharray,
            stroke_dashoffset,
            progress: local,
        }
    }

    /// Every track at global `progress`. Pure; callable in any order.
    pub fn sample(&self, progress: f64) -> Vec<TrackSample> {
        self.tracks
            .iter()
            .map(|t| self.sample_track(t, progress))
            .collect()
    }

    /// Same output as [`Morph::sample`], with tracks sampled on the rayon pool.
    pub fn sample_par(&self, progress: f64) -> Vec<TrackSample> {
        self.tracks
            .par_iter()
            .map(|t| self.sample_track(t, progress))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/composer.rs"]
mod tests;
