use std::io::Write;

use serde::Serialize;

use crate::foundation::error::MorphResult;
use crate::timeline::composer::TrackSample;

/// Configuration provided to a [`SampleSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SinkConfig {
    pub fps: f64,
    /// Frames that will be pushed, both ends included.
    pub frame_count: usize,
    pub track_count: usize,
    pub duration_ms: f64,
}

/// Consumer of sampled frames.
///
/// Ordering contract: `push` is called with strictly increasing frame indices.
pub trait SampleSink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()>;
    fn push(&mut self, frame: usize, progress: f64, samples: &[TrackSample]) -> MorphResult<()>;
    fn end(&mut self) -> MorphResult<()>;
}

/// One captured frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub frame: usize,
    pub progress: f64,
    pub tracks: Vec<TrackSample>,
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<Frame>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration passed to `begin`, if it was called.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Whether `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl SampleSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> MorphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push(&mut self, frame: usize, progress: f64, samples: &[TrackSample]) -> MorphResult<()> {
        self.frames.push(Frame {
            frame,
            progress,
            tracks: samples.to_vec(),
        });
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(Serialize)]
struct FrameRef<'a> {
    frame: usize,
    progress: f64,
    tracks: &'a [TrackSample],
}

/// Writes one JSON object per frame, newline separated.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SampleSink for JsonLinesSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> MorphResult<()> {
        Ok(())
    }

    fn push(&mut self, frame: usize, progress: f64, samples: &[TrackSample]) -> MorphResult<()> {
        let line = FrameRef {
            frame,
            progress,
            tracks: samples,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn end(&mut self) -> MorphResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
