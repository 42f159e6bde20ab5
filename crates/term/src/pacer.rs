use std::time::Duration;

/// Fixed-interval frame pacing.
///
/// Times are plain microsecond counters so the pacing rules can be tested
/// without a clock.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval_us: u64,
    frame_start_us: u64,
    frames: u64,
}

impl FramePacer {
    pub fn new(interval_us: u64) -> Self {
        Self {
            interval_us,
            frame_start_us: 0,
            frames: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_micros(self.interval_us)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Mark the start of a frame.
    pub fn begin_frame(&mut self, now_us: u64) {
        self.frame_start_us = now_us;
        self.frames += 1;
    }

    /// Time left until the next frame is due.
    ///
    /// - Zero once the interval has elapsed (late frames do not borrow from the next one).
    /// - A clock that appears to go backwards counts as no time elapsed.
    pub fn remaining(&self, now_us: u64) -> Duration {
        let elapsed = now_us.saturating_sub(self.frame_start_us);
        Duration::from_micros(self.interval_us.saturating_sub(elapsed))
    }
}
