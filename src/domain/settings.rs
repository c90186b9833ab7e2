use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Result, SandboxError};

/// Creation parameters for bodies spawned by the object tool.
///
/// Values are copied into each new body; later edits never reach bodies
/// that already exist. Bounds shown by the panel widgets are hints only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectSettings {
    pub size: f64,
    pub mass: f64,
    pub density: f64,
    pub restitution: f64,
    pub friction: f64,
    #[serde(alias = "frictionAir")]
    pub air_friction: f64,
}

impl Default for ObjectSettings {
    fn default() -> Self {
        Self {
            size: 25.0,
            mass: 100.0,
            density: 10.0,
            restitution: 0.5,
            friction: 0.001,
            air_friction: 0.0,
        }
    }
}

/// One editable field of [`ObjectSettings`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectField {
    Size,
    Mass,
    Density,
    Restitution,
    Friction,
    AirFriction,
}

/// Input widget hints (`min`/`max`/`step` attributes)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldHint {
    pub min: f64,
    pub max: Option<f64>,
    pub step: Option<f64>,
}

impl ObjectField {
    pub const ALL: [ObjectField; 6] = [
        ObjectField::Size,
        ObjectField::Mass,
        ObjectField::Density,
        ObjectField::Restitution,
        ObjectField::Friction,
        ObjectField::AirFriction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectField::Size => "size",
            ObjectField::Mass => "mass",
            ObjectField::Density => "density",
            ObjectField::Restitution => "restitution",
            ObjectField::Friction => "friction",
            ObjectField::AirFriction => "airFriction",
        }
    }

    pub fn hint(self) -> FieldHint {
        match self {
            ObjectField::Size | ObjectField::Mass | ObjectField::Density => FieldHint {
                min: 0.0,
                max: None,
                step: None,
            },
            ObjectField::Restitution | ObjectField::Friction | ObjectField::AirFriction => FieldHint {
                min: 0.0,
                max: Some(1.0),
                step: Some(0.1),
            },
        }
    }
}

impl FromStr for ObjectField {
    type Err = SandboxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "size" => Ok(ObjectField::Size),
            "mass" => Ok(ObjectField::Mass),
            "density" => Ok(ObjectField::Density),
            "restitution" => Ok(ObjectField::Restitution),
            "friction" => Ok(ObjectField::Friction),
            "airFriction" | "frictionAir" | "air_friction" => Ok(ObjectField::AirFriction),
            _ => Err(SandboxError::UnknownSetting(s.to_string())),
        }
    }
}

impl ObjectSettings {
    pub fn get(&self, field: ObjectField) -> f64 {
        match field {
            ObjectField::Size => self.size,
            ObjectField::Mass => self.mass,
            ObjectField::Density => self.density,
            ObjectField::Restitution => self.restitution,
            ObjectField::Friction => self.friction,
            ObjectField::AirFriction => self.air_friction,
        }
    }

    /// Overwrite exactly one field. No clamping.
    pub fn set(&mut self, field: ObjectField, value: f64) {
        let slot = match field {
            ObjectField::Size => &mut self.size,
            ObjectField::Mass => &mut self.mass,
            ObjectField::Density => &mut self.density,
            ObjectField::Restitution => &mut self.restitution,
            ObjectField::Friction => &mut self.friction,
            ObjectField::AirFriction => &mut self.air_friction,
        };
        *slot = value;
    }

    /// Apply raw text from a numeric input. Blank input reads as 0.
    /// Unparsable or non-finite text leaves the record unchanged.
    pub fn set_from_text(&mut self, field: ObjectField, text: &str) -> Result<f64> {
        let value = coerce_number(text).ok_or_else(|| SandboxError::InvalidNumber {
            field: field.as_str().to_string(),
            value: text.to_string(),
        })?;
        self.set(field, value);
        Ok(value)
    }
}

fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Axis restriction offered by the select tool panel.
///
/// Held as panel state; dragging does not consult it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveAxisLock {
    #[default]
    None,
    X,
    Y,
}

impl FromStr for MoveAxisLock {
    type Err = SandboxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" | "null" => Ok(MoveAxisLock::None),
            "x" => Ok(MoveAxisLock::X),
            "y" => Ok(MoveAxisLock::Y),
            _ => Err(SandboxError::UnknownSetting(s.to_string())),
        }
    }
}

/// Simulation settings panel
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationSettings {
    pub gravity_scale: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self { gravity_scale: 0.001 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_one_field_leaves_the_rest() {
        for field in ObjectField::ALL {
            let mut settings = ObjectSettings::default();
            let before = settings;
            settings.set(field, 7.5);
            for other in ObjectField::ALL {
                if other == field {
                    assert_eq!(settings.get(other), 7.5);
                } else {
                    assert_eq!(settings.get(other), before.get(other), "{:?} changed", other);
                }
            }
        }
    }

    #[test]
    fn text_input_is_coerced_without_clamping() {
        let mut settings = ObjectSettings::default();
        assert_eq!(settings.set_from_text(ObjectField::Restitution, "1.5"), Ok(1.5));
        assert_eq!(settings.restitution, 1.5);
        assert_eq!(settings.set_from_text(ObjectField::Size, "  "), Ok(0.0));
        assert_eq!(settings.size, 0.0);
    }

    #[test]
    fn garbage_text_is_rejected_and_ignored() {
        let mut settings = ObjectSettings::default();
        let err = settings.set_from_text(ObjectField::Mass, "heavy").unwrap_err();
        assert!(matches!(err, SandboxError::InvalidNumber { .. }));
        assert_eq!(settings, ObjectSettings::default());
    }

    #[test]
    fn non_finite_text_is_rejected() {
        let mut settings = ObjectSettings::default();
        for text in ["inf", "infinity", "-inf", "Infinity", "NaN", "nan", "1e400"] {
            assert!(settings.set_from_text(ObjectField::Size, text).is_err(), "{text} accepted");
        }
        assert_eq!(settings, ObjectSettings::default());
    }

    #[test]
    fn field_names_accept_panel_spellings() {
        assert_eq!("frictionAir".parse::<ObjectField>(), Ok(ObjectField::AirFriction));
        assert_eq!("airFriction".parse::<ObjectField>(), Ok(ObjectField::AirFriction));
        assert!("color".parse::<ObjectField>().is_err());
    }

    #[test]
    fn bounded_fields_carry_widget_hints() {
        assert_eq!(ObjectField::Restitution.hint().max, Some(1.0));
        assert_eq!(ObjectField::Size.hint().max, None);
    }

    #[test]
    fn settings_deserialize_from_partial_json() {
        let s: ObjectSettings = serde_json::from_str(r#"{"size": 40, "frictionAir": 0.2}"#).unwrap();
        assert_eq!(s.size, 40.0);
        assert_eq!(s.air_friction, 0.2);
        assert_eq!(s.mass, 100.0);
    }
}
