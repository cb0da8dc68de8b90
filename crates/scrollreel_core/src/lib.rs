//! Core types shared by every scrollreel crate.
//!
//! - [`Transform`]: position + Euler rotation of the single staged object
//! - [`ReelError`] / [`Result`]: error taxonomy
//! - [`EventHub`] / [`Subscription`]: typed publish/subscribe channels
//! - [`Timer`]: frame timing

pub mod errors;
pub mod events;
pub mod time;
pub mod transform;

pub use errors::{ReelError, Result};
pub use events::{EventHub, Subscription};
pub use time::Timer;
pub use transform::Transform;
