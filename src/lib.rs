//! # scrollreel
//!
//! Scroll-driven choreography for a single-page 3D showcase: a model is
//! imported into a JS-side viewer, a loading overlay slides away, and from
//! then on scrolling through the page's sections moves the model through a
//! fixed sequence of poses.
//!
//! This umbrella crate re-exports the workspace:
//!
//! - [`base`]: `Transform`, errors, typed event channels, frame timer
//! - [`animation`]: anchors, keyframe entries, scroll and intro sequencers
//! - [`app`]: configuration, debug panel binding, the `Stage` context and
//!   (on wasm32) the `WebStage` browser front-end

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use scrollreel_animation as animation;
pub use scrollreel_app as app;
pub use scrollreel_core as base;

pub use scrollreel_animation::{
    Anchor, Edge, IntroSequencer, IntroState, IntroTiming, KeyframeEntry, RegionBounds,
    RegionLayout, ScrollSequencer, StaticLayout, TargetProperty,
};
pub use scrollreel_app::{
    LoaderEvent, LoadingOverlay, PanelBinding, PanelChange, PanelField, SceneViewer, Stage,
    StageConfig,
};
pub use scrollreel_core::{EventHub, ReelError, Result, Transform};

#[cfg(target_arch = "wasm32")]
pub use scrollreel_app::web::WebStage;

pub mod prelude {
    pub use crate::{
        Anchor, LoaderEvent, LoadingOverlay, PanelChange, PanelField, SceneViewer, Stage,
        StageConfig, TargetProperty, Transform,
    };
    pub use glam::Vec3;
}
