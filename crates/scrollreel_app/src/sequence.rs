use glam::Vec3;
use scrollreel_animation::{Anchor, KeyframeEntry, TargetProperty};

const SCRUB: f32 = 0.2;

/// The page's hand-authored scroll choreography, in evaluation order.
#[must_use]
pub fn authored_sequence() -> Vec<KeyframeEntry> {
    use TargetProperty::{Position, Rotation};

    let section = |region: &str, property, target: [f32; 3]| {
        KeyframeEntry::new(
            region,
            Anchor::TOP_BOTTOM,
            Anchor::TOP_TOP,
            SCRUB,
            property,
            Vec3::from_array(target),
        )
    };

    vec![
        // The first section is on screen at load, so its pose is a step at scroll 0.
        KeyframeEntry::new(
            "first",
            Anchor::TOP_TOP,
            Anchor::TOP_TOP,
            SCRUB,
            Position,
            Vec3::new(-0.9, -0.43, 0.0),
        ),
        section("second", Position, [-1.36, -0.02, -0.22]),
        section("second", Rotation, [0.0, 0.0, -1.57]),
        section("third", Position, [0.38, -0.11, -1.06]),
        section("third", Rotation, [0.403, 0.957, -0.421]),
        section("fourth", Position, [0.92, -0.31, 0.66]),
        section("fourth", Rotation, [0.0, 1.641, 0.0]),
        section("fifth", Position, [-0.1, -0.11, 0.99]),
        section("fifth", Rotation, [-0.785, 2.329, 0.903]),
        section("sixth", Position, [0.16, -0.3, -0.56]),
        section("sixth", Rotation, [-0.261, 4.911, -0.277]),
    ]
}

/// Trigger region ids referenced by `entries`, first-seen order, no repeats.
#[must_use]
pub fn region_ids(entries: &[KeyframeEntry]) -> Vec<String> {
    let mut ids: Vec<String> = Vec::new();
    for entry in entries {
        if !ids.contains(&entry.region) {
            ids.push(entry.region.clone());
        }
    }
    ids
}
