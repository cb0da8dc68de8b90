use glam::Vec3;

/// Transform of the staged model.
///
/// Holds the position and the XYZ Euler rotation (radians) of the one object
/// the page animates, plus a shadow copy of the last state handed to the
/// viewer so callers can ask whether anything moved since then.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,

    last_position: Vec3,
    last_rotation: Vec3,
    force_update: bool,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,

            last_position: Vec3::ZERO,
            last_rotation: Vec3::ZERO,
            force_update: true,
        }
    }

    #[must_use]
    pub fn from_position_rotation(position: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            rotation,
            ..Self::new()
        }
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
    }

    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32) {
        self.rotation = Vec3::new(x, y, z);
    }

    /// Returns `true` if position or rotation changed since the previous call
    /// (or since [`mark_dirty`](Self::mark_dirty)), and syncs the shadow state.
    pub fn take_changed(&mut self) -> bool {
        let changed = self.position != self.last_position
            || self.rotation != self.last_rotation
            || self.force_update;

        if changed {
            self.last_position = self.position;
            self.last_rotation = self.rotation;
            self.force_update = false;
        }

        changed
    }

    /// Forces the next [`take_changed`](Self::take_changed) to report a change.
    pub fn mark_dirty(&mut self) {
        self.force_update = true;
    }

    /// Position and rotation packed as `[px, py, pz, rx, ry, rz]`.
    #[must_use]
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_transform_reports_change_once() {
        let mut t = Transform::new();
        assert!(t.take_changed());
        assert!(!t.take_changed());
    }

    #[test]
    fn writes_are_detected() {
        let mut t = Transform::new();
        t.take_changed();
        t.set_rotation(0.0, 1.57, 0.0);
        assert!(t.take_changed());
        assert!(!t.take_changed());

        t.mark_dirty();
        assert!(t.take_changed());
    }
}
