//! Scroll-bound animation for scrollreel.
//!
//! Two sequencers live here:
//!
//! - [`ScrollSequencer`]: an ordered list of [`KeyframeEntry`] records per
//!   transform property. Each frame, every entry's progress is derived from
//!   the scroll offset relative to its trigger region, smoothed by the entry's
//!   scrub lag, and the property is interpolated toward the entry's target.
//! - [`IntroSequencer`]: the one-shot, time based overlay slide that runs
//!   after the model finishes importing and unlocks the scroll sequencer.

pub mod anchor;
pub mod easing;
pub mod entry;
pub mod intro;
pub mod progress;
pub mod region;
pub mod sequencer;
pub mod values;

pub use anchor::{Anchor, Edge};
pub use easing::Easing;
pub use entry::{KeyframeEntry, TargetProperty};
pub use intro::{IntroSequencer, IntroState, IntroTiming, IntroUpdate};
pub use progress::{ScrubSmoother, raw_progress};
pub use region::{RegionBounds, RegionLayout, StaticLayout};
pub use sequencer::ScrollSequencer;
pub use values::Interpolatable;
