pub mod appear;
pub mod channels;
pub mod composer;
pub mod config;
pub mod schedule;
pub mod track;

pub use appear::AppearStyle;
pub use channels::{Channels, MotionProfile, PropertyCurves, PropertyTiming};
pub use composer::{Morph, TrackSample, build_morph};
pub use config::MorphConfig;
pub use schedule::LayerStrategy;
pub use track::{Track, TrackKind};
