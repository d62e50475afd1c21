// glspin/src/frame_stats.rs
//
//! Frame timing.

use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts frames and reports the count once per second.
#[derive(Clone, Debug)]
pub struct FrameCounter {
    frame_count: u64,
    last_frame: Instant,
    last_report: Instant,
}

/// What happened on one call to [`FrameCounter::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    /// Time since the previous frame.
    pub elapsed: Duration,
    /// Frames counted over the last reporting interval, if one just ended.
    pub frames_per_second: Option<u64>,
}

impl FrameCounter {
    pub fn new(now: Instant) -> FrameCounter {
        FrameCounter { frame_count: 0, last_frame: now, last_report: now }
    }

    /// Records a frame finishing at `now`.
    ///
    /// The count is reported and reset before this frame is added to it, so the first report
    /// covers the frames rendered before the interval ran out.
    pub fn tick(&mut self, now: Instant) -> FrameTick {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let mut frames_per_second = None;
        if now.saturating_duration_since(self.last_report) >= REPORT_INTERVAL {
            frames_per_second = Some(self.frame_count);
            self.frame_count = 0;
            self.last_report = now;
        }

        self.frame_count += 1;
        FrameTick { elapsed, frames_per_second }
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
