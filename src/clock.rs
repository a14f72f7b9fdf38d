//! Frame timestamps to frame deltas.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Turns the host's monotonically increasing frame timestamps into `dt`.
///
/// The first frame has no predecessor and yields 0. Deltas are clamped to
/// `[0, max_dt]` so a stalled or backgrounded page does not make the shape
/// jump when it resumes.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f64,
}

impl FrameClock {
    #[must_use]
    pub fn new(max_dt: f64) -> Self {
        Self { last_ms: None, max_dt }
    }

    /// Record `now_ms` and return the milliseconds since the previous call.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) if now_ms.is_finite() => (now_ms - last).clamp(0.0, self.max_dt),
            _ => 0.0,
        };
        if now_ms.is_finite() {
            self.last_ms = Some(now_ms);
        }
        dt
    }

    /// Forget the previous timestamp; the next frame yields 0.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    #[must_use]
    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }
}
