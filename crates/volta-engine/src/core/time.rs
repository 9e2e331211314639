/// Fixed-interval timer accumulator.
/// Converts variable frame deltas into a whole number of period firings,
/// so fixed-rate effects stay consistent regardless of frame time.
pub struct IntervalTimer {
    /// Seconds between firings.
    period: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl IntervalTimer {
    pub fn new(period: f32) -> Self {
        Self {
            period,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of firings due.
    pub fn fire(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 firings per frame)
        self.accumulator = self.accumulator.min(self.period * 10.0);
        let firings = (self.accumulator / self.period) as u32;
        self.accumulator -= firings as f32 * self.period;
        firings
    }

    /// Drop any accumulated time. Safe to call on an already-clean timer.
    pub fn rearm(&mut self) {
        self.accumulator = 0.0;
    }

    /// Seconds between firings.
    pub fn period(&self) -> f32 {
        self.period
    }
}
