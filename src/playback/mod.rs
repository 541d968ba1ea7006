pub mod clock;
pub mod driver;
pub mod sink;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{PlayState, PlaybackDriver};
pub use sink::{Frame, InMemorySink, JsonLinesSink, SampleSink, SinkConfig};
