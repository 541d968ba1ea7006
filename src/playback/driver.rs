use crate::foundation::error::{MorphError, MorphResult};
use crate::foundation::math::clamp01;
use crate::timeline::composer::{Morph, TrackSample};

use super::clock::{Clock, SystemClock};
use super::sink::{SampleSink, SinkConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Playing,
    Paused,
    Finished,
}

type ProgressCallback = Box<dyn FnMut(f64) + Send>;

/// Turns wall-clock time or an external tween into progress and samples the morph.
///
/// The driver owns no animation-library state; an external tween calls
/// [`PlaybackDriver::advance_to`] once per frame, a frame loop calls [`PlaybackDriver::tick`].
/// Progress may move backward at any time.
pub struct PlaybackDriver<C: Clock = SystemClock> {
    morph: Morph,
    clock: C,
    state: PlayState,
    progress: f64,
    segment_from: f64,
    segment_started_ms: f64,
    on_progress: Option<ProgressCallback>,
}

impl PlaybackDriver<SystemClock> {
    pub fn new(morph: Morph) -> Self {
        Self::with_clock(morph, SystemClock::new())
    }
}

impl<C: Clock> PlaybackDriver<C> {
    pub fn with_clock(morph: Morph, clock: C) -> Self {
        Self {
            morph,
            clock,
            state: PlayState::Idle,
            progress: 0.0,
            segment_from: 0.0,
            segment_started_ms: 0.0,
            on_progress: None,
        }
    }

    /// Called with the new progress every time it changes.
    pub fn on_progress(&mut self, f: impl FnMut(f64) + Send + 'static) {
        self.on_progress = Some(Box::new(f));
    }

    pub fn morph(&self) -> &Morph {
        &self.morph
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Resume from the current progress towards 1.
    pub fn play(&mut self) {
        if self.state == PlayState::Playing {
            return;
        }
        self.segment_from = self.progress;
        self.segment_started_ms = self.clock.now_ms();
        self.state = PlayState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.tick();
            if self.state == PlayState::Playing {
                self.state = PlayState::Paused;
            }
        }
    }

    /// Jump to `progress`; playback continues from there if it was running.
    pub fn seek(&mut self, progress: f64) -> Vec<TrackSample> {
        self.set_progress(progress);
        if self.state == PlayState::Playing {
            self.segment_from = self.progress;
            self.segment_started_ms = self.clock.now_ms();
        } else if self.state == PlayState::Finished && self.progress < 1.0 {
            self.state = PlayState::Paused;
        }
        self.morph.sample(self.progress)
    }

    /// Advance from the clock. `None` unless playing.
    pub fn tick(&mut self) -> Option<Vec<TrackSample>> {
        if self.state != PlayState::Playing {
            return None;
        }
        let total = self.morph.total_duration_ms();
        let elapsed = (self.clock.now_ms() - self.segment_started_ms).max(0.0);
        let fraction = if total > 0.0 {
            clamp01(elapsed / total)
        } else {
            1.0
        };
        let progress = self.segment_from + (1.0 - self.segment_from) * fraction;
        self.set_progress(progress);
        if fraction >= 1.0 {
            self.state = PlayState::Finished;
        }
        tracing::trace!(progress = self.progress, elapsed, "tick");
        Some(self.morph.sample(self.progress))
    }

    /// Set progress from an external tween.
    pub fn advance_to(&mut self, progress: f64) -> Vec<TrackSample> {
        self.set_progress(progress);
        self.morph.sample(self.progress)
    }

    /// Step the whole timeline at `fps` into `sink`, ends included. Returns the frame count.
    pub fn render_offline(&mut self, sink: &mut dyn SampleSink, fps: f64) -> MorphResult<usize> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(MorphError::validation(format!(
                "fps must be a finite, positive number (got {fps})"
            )));
        }
        let total = self.morph.total_duration_ms();
        let steps = ((total / 1000.0) * fps).ceil().max(1.0) as usize;
        sink.begin(SinkConfig {
            fps,
            frame_count: steps + 1,
            track_count: self.morph.tracks().len(),
            duration_ms: total,
        })?;
        for i in 0..=steps {
            let p = i as f64 / steps as f64;
            self.set_progress(p);
            let samples = self.morph.sample_par(p);
            sink.push(i, p, &samples)?;
        }
        sink.end()?;
        Ok(steps + 1)
    }

    fn set_progress(&mut self, progress: f64) {
        self.progress = clamp01(progress);
        if let Some(cb) = self.on_progress.as_mut() {
            cb(self.progress);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
