use glam::Vec3;
use scrollreel_core::Transform;
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;

/// Transform component a keyframe entry drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetProperty {
    Position, // Maps to transform.position
    Rotation, // Maps to transform.rotation (Euler XYZ, radians)
}

impl TargetProperty {
    pub const ALL: [TargetProperty; 2] = [TargetProperty::Position, TargetProperty::Rotation];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            TargetProperty::Position => 0,
            TargetProperty::Rotation => 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn read(self, transform: &Transform) -> Vec3 {
        match self {
            TargetProperty::Position => transform.position,
            TargetProperty::Rotation => transform.rotation,
        }
    }

    #[inline]
    pub fn write(self, transform: &mut Transform, value: Vec3) {
        match self {
            TargetProperty::Position => transform.position = value,
            TargetProperty::Rotation => transform.rotation = value,
        }
    }
}

/// One scroll-bound transition: while the page scrolls from `start` to `end`
/// of `region`, `property` moves toward `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyframeEntry {
    pub region: String,
    pub start: Anchor,
    pub end: Anchor,
    /// Smoothing lag in seconds applied to raw scroll progress.
    pub scrub: f32,
    pub property: TargetProperty,
    pub target: Vec3,
}

impl KeyframeEntry {
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        start: Anchor,
        end: Anchor,
        scrub: f32,
        property: TargetProperty,
        target: Vec3,
    ) -> Self {
        Self {
            region: region.into(),
            start,
            end,
            scrub,
            property,
            target,
        }
    }
}
