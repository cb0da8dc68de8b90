//! Debug panel binding.
//!
//! The panel edits two vector fields, `position` and `rotation`. Every change
//! overwrites the matching transform component as-is: no smoothing, no
//! clamping. Widget limits are advisory and only describe the input range.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use scrollreel_animation::TargetProperty;
use scrollreel_core::{ReelError, Transform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelField {
    Position,
    Rotation,
}

impl PanelField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PanelField::Position => "position",
            PanelField::Rotation => "rotation",
        }
    }

    #[must_use]
    pub fn property(self) -> TargetProperty {
        match self {
            PanelField::Position => TargetProperty::Position,
            PanelField::Rotation => TargetProperty::Rotation,
        }
    }
}

impl FromStr for PanelField {
    type Err = ReelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(PanelField::Position),
            "rotation" => Ok(PanelField::Rotation),
            other => Err(ReelError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for PanelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input options applied to each of a field's x/y/z components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
    pub step: f32,
}

/// What the panel widget needs to render one bound field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub field: PanelField,
    pub initial: Vec3,
    pub options: AxisOptions,
}

/// A change event emitted by the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelChange {
    pub field: PanelField,
    pub value: Vec3,
}

impl PanelChange {
    #[must_use]
    pub fn new(field: PanelField, value: Vec3) -> Self {
        Self { field, value }
    }

    /// Builds a change from the panel's field key.
    pub fn parse(field: &str, x: f32, y: f32, z: f32) -> scrollreel_core::Result<Self> {
        Ok(Self::new(field.parse()?, Vec3::new(x, y, z)))
    }
}

#[derive(Debug, Clone)]
pub struct PanelBinding {
    fields: [FieldDescriptor; 2],
}

impl PanelBinding {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: [
                FieldDescriptor {
                    field: PanelField::Position,
                    initial: Vec3::ZERO,
                    options: AxisOptions {
                        min: None,
                        max: None,
                        step: 0.01,
                    },
                },
                FieldDescriptor {
                    field: PanelField::Rotation,
                    initial: Vec3::ZERO,
                    options: AxisOptions {
                        min: Some(-6.28),
                        max: Some(6.28),
                        step: 0.001,
                    },
                },
            ],
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, field: PanelField) -> &FieldDescriptor {
        match field {
            PanelField::Position => &self.fields[0],
            PanelField::Rotation => &self.fields[1],
        }
    }

    /// Overwrites the edited transform component with the panel value.
    pub fn apply(&self, change: &PanelChange, transform: &mut Transform) {
        change.field.property().write(transform, change.value);
    }
}

impl Default for PanelBinding {
    fn default() -> Self {
        Self::new()
    }
}
