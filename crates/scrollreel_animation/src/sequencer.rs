use glam::Vec3;
use log::{info, warn};
use scrollreel_core::Transform;

use crate::anchor::Anchor;
use crate::entry::{KeyframeEntry, TargetProperty};
use crate::progress::{ScrubSmoother, raw_progress};
use crate::region::RegionLayout;
use crate::values::Interpolatable;

#[derive(Debug, Clone)]
struct EntryState {
    entry: KeyframeEntry,
    smoother: ScrubSmoother,
    // Latched when the region is first found missing; progress stays 0.
    inert: bool,
}

/// Scroll timeline: ordered keyframe entries evaluated per property track.
///
/// Entries for the same property are chained in registration order: entry
/// `k` starts from entry `k - 1`'s target, and the first entry starts from
/// the rest pose captured by [`activate`](Self::activate). Each track writes
/// the interpolation of its most recently active entry (the last one with
/// non-zero progress). Position and rotation are independent tracks.
#[derive(Debug, Clone, Default)]
pub struct ScrollSequencer {
    entries: Vec<EntryState>,
    // [position, rotation] at activation; `None` while inert.
    rest_pose: Option<[Vec3; 2]>,
}

impl ScrollSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequencer from an authored list, preserving its order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = KeyframeEntry>) -> Self {
        let mut sequencer = Self::new();
        for entry in entries {
            sequencer.register_entry(entry);
        }
        sequencer
    }

    /// Appends an entry to its property's track. Returns the entry index.
    pub fn register_entry(&mut self, entry: KeyframeEntry) -> usize {
        self.entries.push(EntryState {
            smoother: ScrubSmoother::new(entry.scrub),
            entry,
            inert: false,
        });
        self.entries.len() - 1
    }

    pub fn register(
        &mut self,
        region: impl Into<String>,
        start: Anchor,
        end: Anchor,
        scrub: f32,
        property: TargetProperty,
        target: Vec3,
    ) -> usize {
        self.register_entry(KeyframeEntry::new(
            region, start, end, scrub, property, target,
        ))
    }

    /// Starts responding to scroll ticks, taking `transform` as the value
    /// each track's first entry interpolates from.
    pub fn activate(&mut self, transform: &Transform) {
        self.rest_pose = Some([transform.position, transform.rotation]);
        for state in &mut self.entries {
            state.smoother.reset();
        }
        info!(
            "Scroll sequencer active with {} keyframe entries",
            self.entries.len()
        );
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.rest_pose.is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &KeyframeEntry> {
        self.entries.iter().map(|state| &state.entry)
    }

    /// Smoothed progress of the entry at `index`.
    #[must_use]
    pub fn progress(&self, index: usize) -> Option<f32> {
        self.entries.get(index).map(|state| state.smoother.value())
    }

    /// Per-frame recomputation.
    ///
    /// `scroll` is the scroll container's offset, or `None` if the page has
    /// no scroll container. Returns `true` if any property of `transform`
    /// was written, in which case the caller owes the viewer a render-dirty
    /// notification.
    pub fn tick(
        &mut self,
        scroll: Option<f32>,
        layout: &dyn RegionLayout,
        dt: f32,
        transform: &mut Transform,
    ) -> bool {
        let Some(rest_pose) = self.rest_pose else {
            return false;
        };
        let Some(scroll) = scroll else {
            return false;
        };

        let viewport_height = layout.viewport_height();
        let mut dirty = [false; 2];

        for state in &mut self.entries {
            let bounds = if state.inert {
                None
            } else {
                layout.region(&state.entry.region)
            };
            let raw = match bounds {
                Some(bounds) => {
                    let start = state.entry.start.scroll_offset(bounds, viewport_height);
                    let end = state.entry.end.scroll_offset(bounds, viewport_height);
                    raw_progress(scroll, start, end)
                }
                None => {
                    if !state.inert {
                        warn!(
                            "Trigger region '{}' not found; its keyframe stays inert",
                            state.entry.region
                        );
                        state.inert = true;
                    }
                    0.0
                }
            };

            if state.smoother.update(raw, dt) {
                dirty[state.entry.property.index()] = true;
            }
        }

        let mut wrote = false;
        for property in TargetProperty::ALL {
            if dirty[property.index()] {
                let value = self.evaluate(property, rest_pose[property.index()]);
                property.write(transform, value);
                wrote = true;
            }
        }
        wrote
    }

    /// Value of `property`'s track given current progress, starting the
    /// chain from `rest`.
    fn evaluate(&self, property: TargetProperty, rest: Vec3) -> Vec3 {
        let mut from = rest;
        let mut value = rest;

        for state in self
            .entries
            .iter()
            .filter(|state| state.entry.property == property)
        {
            let progress = state.smoother.value();
            if progress > 0.0 {
                value = Vec3::interpolate_clamped(from, state.entry.target, progress);
            }
            from = state.entry.target;
        }

        value
    }
}
