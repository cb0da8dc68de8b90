//! Intro timeline.
//!
//! Runs once after the model import completes: holds the loading overlay for
//! [`IntroTiming::delay`] seconds, then slides it off-screen over
//! [`IntroTiming::duration`] seconds. An import that neither completes nor
//! fails within [`IntroTiming::load_timeout`] seconds is treated as failed.
//! The state machine only moves forward:
//!
//! ```text
//! Idle -> Loading -> SlidingOut -> Complete
//!            \
//!             -> Failed (rejected or timed out)
//! ```

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroTiming {
    /// Hold before the slide starts, in seconds.
    pub delay: f32,
    /// Slide duration in seconds.
    pub duration: f32,
    /// Final horizontal offset of the overlay, in percent of its width.
    pub travel_percent: f32,
    pub easing: Easing,
    /// Seconds to wait for the import before giving up; `0` waits forever.
    pub load_timeout: f32,
}

impl Default for IntroTiming {
    fn default() -> Self {
        Self {
            delay: 1.0,
            duration: 0.8,
            travel_percent: 150.0,
            easing: Easing::Power4InOut,
            load_timeout: 60.0,
        }
    }
}

impl IntroTiming {
    /// Total time from import completion to the end of the slide.
    #[must_use]
    pub fn total(&self) -> f32 {
        self.delay + self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IntroState {
    Idle,
    Loading,
    SlidingOut { elapsed: f32 },
    Complete,
    Failed(String),
}

/// What one [`IntroSequencer::update`] asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntroUpdate {
    /// New horizontal overlay offset in percent, if it moved this frame.
    pub overlay_offset: Option<f32>,
    /// Set on exactly one update: the one that finished the slide.
    pub completed: bool,
    /// Set on the update that gave up waiting for the import. The reason is
    /// in [`IntroState::Failed`].
    pub timed_out: bool,
}

#[derive(Debug, Clone)]
pub struct IntroSequencer {
    timing: IntroTiming,
    state: IntroState,
    // Seconds spent in `Loading`.
    waited: f32,
}

impl IntroSequencer {
    #[must_use]
    pub fn new(timing: IntroTiming) -> Self {
        Self {
            timing,
            state: IntroState::Idle,
            waited: 0.0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &IntroState {
        &self.state
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state == IntroState::Complete
    }

    /// `Idle -> Loading`. Returns `false` in any other state.
    pub fn begin_loading(&mut self) -> bool {
        if self.state != IntroState::Idle {
            return false;
        }
        self.state = IntroState::Loading;
        true
    }

    /// `Loading -> SlidingOut`, fired by import completion.
    pub fn asset_loaded(&mut self) -> bool {
        if self.state != IntroState::Loading {
            return false;
        }
        info!("Asset loaded, starting intro slide");
        self.state = IntroState::SlidingOut { elapsed: 0.0 };
        true
    }

    /// `Loading -> Failed`. The overlay is left in place.
    pub fn asset_failed(&mut self, reason: impl Into<String>) -> bool {
        if self.state != IntroState::Loading {
            return false;
        }
        let reason = reason.into();
        error!("Asset load failed, intro halted: {reason}");
        self.state = IntroState::Failed(reason);
        true
    }

    /// Advances the load timeout or the slide by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> IntroUpdate {
        let dt = dt.max(0.0);
        match self.state {
            IntroState::Loading => self.wait_for_load(dt),
            IntroState::SlidingOut { elapsed } => self.slide(elapsed + dt),
            _ => IntroUpdate::default(),
        }
    }

    fn wait_for_load(&mut self, dt: f32) -> IntroUpdate {
        let timeout = self.timing.load_timeout;
        self.waited += dt;
        if timeout <= 0.0 || self.waited < timeout {
            return IntroUpdate::default();
        }

        let timed_out = self.asset_failed(format!("no response after {timeout}s"));
        IntroUpdate {
            timed_out,
            ..IntroUpdate::default()
        }
    }

    fn slide(&mut self, elapsed: f32) -> IntroUpdate {
        let timing = self.timing;

        if elapsed >= timing.total() {
            info!("Intro complete");
            self.state = IntroState::Complete;
            return IntroUpdate {
                overlay_offset: Some(timing.travel_percent),
                completed: true,
                timed_out: false,
            };
        }

        self.state = IntroState::SlidingOut { elapsed };

        if elapsed < timing.delay {
            return IntroUpdate::default();
        }

        let t = (elapsed - timing.delay) / timing.duration;
        IntroUpdate {
            overlay_offset: Some(timing.travel_percent * timing.easing.apply(t)),
            completed: false,
            timed_out: false,
        }
    }
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self::new(IntroTiming::default())
    }
}
