/// Smoothed progress closer than this to its target snaps onto it, so a
/// settled scroll position yields exact endpoint values.
const SNAP_EPSILON: f32 = 1e-4;

/// Raw progress of `scroll` through the `[start, end]` offset window,
/// clamped to [0, 1].
///
/// A window with no extent (`end <= start`) is a step: 0 before `start`,
/// 1 from `start` onward.
#[must_use]
pub fn raw_progress(scroll: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span <= 0.0 {
        return if scroll >= start { 1.0 } else { 0.0 };
    }
    ((scroll - start) / span).clamp(0.0, 1.0)
}

/// Exponential smoothing of raw progress with a time constant of `lag`
/// seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubSmoother {
    value: f32,
    lag: f32,
}

impl ScrubSmoother {
    #[must_use]
    pub fn new(lag: f32) -> Self {
        Self { value: 0.0, lag }
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }

    /// Moves the smoothed value toward `target` over a frame of `dt` seconds.
    /// Returns `true` if the value changed.
    pub fn update(&mut self, target: f32, dt: f32) -> bool {
        let target = target.clamp(0.0, 1.0);
        let previous = self.value;

        let next = if self.lag <= 0.0 {
            target
        } else {
            let alpha = 1.0 - (-dt.max(0.0) / self.lag).exp();
            previous + (target - previous) * alpha
        };

        self.value = if (target - next).abs() < SNAP_EPSILON {
            target
        } else {
            next.clamp(0.0, 1.0)
        };

        self.value != previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_lag_snaps() {
        let mut s = ScrubSmoother::new(0.0);
        assert!(s.update(0.7, 0.016));
        assert_eq!(s.value(), 0.7);
        assert!(!s.update(0.7, 0.016));
    }

    #[test]
    fn lag_eases_and_settles_exactly() {
        let mut s = ScrubSmoother::new(0.2);
        s.update(1.0, 1.0 / 60.0);
        assert!(s.value() > 0.0 && s.value() < 0.2);

        for _ in 0..300 {
            s.update(1.0, 1.0 / 60.0);
        }
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn zero_dt_holds_value() {
        let mut s = ScrubSmoother::new(0.2);
        assert!(!s.update(1.0, 0.0));
        assert_eq!(s.value(), 0.0);
    }
}
