//! Frame-driven timer for widget animation.

/// Accumulates elapsed milliseconds and reports interval expirations.
/// No wall clock inside; the frame loop feeds it elapsed time.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    interval_ms: u32,
    accumulated: u32,
}

impl FrameTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated: 0,
        }
    }

    /// Feed elapsed time; returns how many intervals expired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulated += elapsed_ms;
        let fired = self.accumulated / self.interval_ms;
        self.accumulated %= self.interval_ms;
        fired
    }
}
