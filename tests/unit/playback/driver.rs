use std::sync::{Arc, Mutex};

use super::*;
use crate::playback::clock::ManualClock;
use crate::playback::sink::{InMemorySink, JsonLinesSink};
use crate::scene::model::Shape;
use crate::timeline::composer::build_morph;
use crate::timeline::config::MorphConfig;

fn morph() -> Morph {
    let start = vec![Shape::new("M0 0 H10 V10 H0 Z").with_fill("#000")];
    let end = vec![Shape::new("M100 0 H110 V10 H100 Z").with_fill("#000")];
    build_morph(Some(&start), &end, &MorphConfig::default())
}

#[test]
fn tick_follows_clock_until_finished() {
    let mut d = PlaybackDriver::with_clock(morph(), ManualClock::new());
    assert!(d.tick().is_none());
    d.play();
    d.clock_mut().advance(300.0);
    d.tick().unwrap();
    assert!((d.progress() - 0.5).abs() < 1e-12);
    d.clock_mut().advance(1000.0);
    let s = d.tick().unwrap();
    assert_eq!(d.progress(), 1.0);
    assert_eq!(d.state(), PlayState::Finished);
    assert_eq!(s[0].outline, "M100 0 H110 V10 H100 Z");
}

#[test]
fn pause_and_resume_continue_from_current() {
    let mut d = PlaybackDriver::with_clock(morph(), ManualClock::new());
    d.play();
    d.clock_mut().advance(150.0);
    d.pause();
    assert_eq!(d.state(), PlayState::Paused);
    assert!((d.progress() - 0.25).abs() < 1e-12);
    d.clock_mut().advance(10_000.0);
    assert!(d.tick().is_none());
    d.play();
    d.clock_mut().advance(300.0);
    d.tick().unwrap();
    // Resumed segments cover the remaining range over the full duration.
    assert!((d.progress() - 0.625).abs() < 1e-12);
}

#[test]
fn seek_can_move_backward() {
    let mut d = PlaybackDriver::with_clock(morph(), ManualClock::new());
    let late = d.seek(0.9);
    let early = d.seek(0.1);
    assert_eq!(d.progress(), 0.1);
    assert_ne!(late, early);
    assert_eq!(d.seek(-4.0), d.morph().sample(0.0));
}

#[test]
fn callback_sees_every_change() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut d = PlaybackDriver::with_clock(morph(), ManualClock::new());
    d.on_progress(move |p| sink.lock().unwrap().push(p));
    d.advance_to(0.3);
    d.advance_to(0.2);
    d.seek(2.0);
    assert_eq!(*seen.lock().unwrap(), vec![0.3, 0.2, 1.0]);
}

#[test]
fn offline_render_covers_both_ends() {
    let mut d = PlaybackDriver::with_clock(morph(), ManualClock::new());
    let mut sink = InMemorySink::new();
    let n = d.render_offline(&mut sink, 10.0).unwrap();
    assert_eq!(n, 7);
    assert_eq!(sink.frames().len(), 7);
    assert_eq!(sink.config().unwrap().frame_count, 7);
    assert!(sink.is_ended());
    assert_eq!(sink.frames()[0].tracks[0].outline, "M0 0 H10 V10 H0 Z");
    assert_eq!(sink.frames()[6].tracks[0].outline, "M100 0 H110 V10 H100 Z");
    assert!(d.render_offline(&mut sink, 0.0).is_err());
}

#[test]
fn json_lines_sink_writes_one_line_per_frame() {
    let mut d = PlaybackDriver::with_clock(morph(), ManualClock::new());
    let mut sink = JsonLinesSink::new(Vec::new());
    d.render_offline(&mut sink, 5.0).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    let last: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
    assert_eq!(last["progress"], 1.0);
    assert_eq!(last["tracks"][0]["outline"], "M100 0 H110 V10 H100 Z");
}
