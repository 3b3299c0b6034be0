//! Progress Smoothing
//!
//! The raw scroll signal arrives as discrete jumps (wheel ticks, bar drags).
//! This smoother chases it exponentially so the animated progress — and
//! everything derived from it — stays continuous.

/// Lagged, frame-rate-independent progress in [0, 1].
#[derive(Debug, Clone)]
pub struct ProgressSmoother {
    value: f32,
    rate: f32,
}

impl ProgressSmoother {
    /// Starts at progress 0 with the given chase rate (per second).
    #[must_use]
    pub fn new(rate: f32) -> Self {
        Self { value: 0.0, rate }
    }

    /// Advances the animated progress toward `raw` over `delta` seconds.
    ///
    /// `raw` is clamped into [0, 1] on ingestion. A non-finite or
    /// non-positive delta skips the advance for this frame only; state is
    /// never corrupted by a paused or resuming frame driver.
    pub fn advance(&mut self, raw: f32, delta: f32) -> f32 {
        let raw = raw.clamp(0.0, 1.0);
        if delta.is_finite() && delta > 0.0 {
            let k = (delta * self.rate).min(1.0);
            self.value += (raw - self.value) * k;
            self.value = self.value.clamp(0.0, 1.0);
        }
        self.value
    }

    /// Current animated progress.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Snaps the animated progress, bypassing the smoothing.
    pub fn reset(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }
}
