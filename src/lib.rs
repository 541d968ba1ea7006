//! Smart-animate computes transitions between two vector scenes.
//!
//! The pipeline is deterministic and renderer-agnostic:
//!
//! - Load a start and end [`Scene`] of flattened shapes
//! - [`match_shapes`] pairs them; unmatched shapes appear or disappear
//! - [`build_morph`] turns the correspondence into scheduled, orbit-aware tracks
//! - [`Morph::sample`] resolves every track at a progress value, or a
//!   [`PlaybackDriver`] steps it from a clock into a [`SampleSink`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod foundation;
pub mod geom;
pub mod matching;
pub mod morph;
pub mod orbit;
pub mod playback;
pub mod scene;
pub mod timeline;

pub use crate::animation::bezier::CubicBezier;
pub use crate::animation::ease::{Ease, Easing};
pub use crate::foundation::error::{MorphError, MorphResult};
pub use crate::foundation::{BezPath, Point, Rect, Vec2};
pub use crate::matching::{MatchKind, MatchResult, MatchWeights, MatchedPair, match_shapes};
pub use crate::morph::{EngineKind, EnginePreference, Interpolator, MorphOptions};
pub use crate::orbit::{OrbitDirection, OrbitMode};
pub use crate::playback::{
    Clock, InMemorySink, JsonLinesSink, ManualClock, PlayState, PlaybackDriver, SampleSink,
    SinkConfig, SystemClock,
};
pub use crate::scene::{Scene, Shape};
pub use crate::timeline::{
    AppearStyle, LayerStrategy, Morph, MorphConfig, MotionProfile, PropertyCurves,
    PropertyTiming, TrackKind, TrackSample, build_morph,
};
