//! Frame Timing
//!
//! A small monotonic clock for frame drivers that do not already have one
//! (headless tuning runs, tests). Each [`FrameClock::tick`] yields the delta
//! to feed into [`crate::FrameInput`].

use std::time::{Duration, Instant};

/// Monotonic per-frame clock.
pub struct FrameClock {
    start_time: Instant,
    last_tick: Instant,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Starts the clock now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_tick: now,
            frame_count: 0,
        }
    }

    /// Marks a frame boundary and returns the delta since the previous tick,
    /// in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        self.frame_count += 1;
        delta.as_secs_f32()
    }

    /// Time since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Number of ticks so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
