use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Measures how many frames the runner actually draws per second.
#[derive(Debug)]
pub struct FrameMeter {
    frames: u32,
    window_start: Instant,
}

impl FrameMeter {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            frames: 0,
            window_start: start,
        }
    }

    /// Record a drawn frame at `now`.
    ///
    /// Returns `Some(fps)` once a full window has elapsed since the last report.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < WINDOW {
            return None;
        }
        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

impl Default for FrameMeter {
    fn default() -> Self {
        Self::new()
    }
}
