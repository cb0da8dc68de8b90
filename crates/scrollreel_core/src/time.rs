#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

/// Upper bound for a single frame step. A backgrounded tab can resume after
/// seconds; the intro slide and scrub smoothing must not jump that far.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);

/// Frame clock for the browser's animation loop.
pub struct Timer {
    last_update: Instant,
    /// Time since last tick, capped to [`MAX_FRAME_DELTA`]
    pub delta: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            delta: Duration::ZERO,
        }
    }

    /// Updates the timer; called once per animation frame.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now
            .saturating_duration_since(self.last_update)
            .min(MAX_FRAME_DELTA);
        self.last_update = now;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_is_zero_until_ticked() {
        let timer = Timer::new();
        assert_eq!(timer.dt_seconds(), 0.0);
    }

    #[test]
    fn long_pause_is_capped() {
        let mut timer = Timer::new();
        timer.last_update = Instant::now()
            .checked_sub(Duration::from_secs(5))
            .expect("clock has run for five seconds");
        timer.tick();
        assert_eq!(timer.delta, MAX_FRAME_DELTA);
        assert_eq!(timer.dt_seconds(), 0.25);
    }
}
