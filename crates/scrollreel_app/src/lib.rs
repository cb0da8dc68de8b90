//! Application layer for scrollreel.
//!
//! [`Stage`] is the explicit application context: it owns the model's
//! [`Transform`](scrollreel_core::Transform), the scroll and intro
//! sequencers and the debug panel binding, and talks to the outside world
//! only through the [`SceneViewer`] / [`LoadingOverlay`] capabilities and
//! typed event channels. The `web` module (wasm32 only) binds all of it to
//! the DOM and the page's JS viewer.

pub mod config;
pub mod panel;
pub mod sequence;
pub mod stage;
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::StageConfig;
pub use panel::{AxisOptions, FieldDescriptor, PanelBinding, PanelChange, PanelField};
pub use sequence::authored_sequence;
pub use stage::Stage;
pub use viewer::{LoaderEvent, LoadingOverlay, SceneViewer};
