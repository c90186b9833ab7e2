//! Scene configuration
//!
//! Loaded from JSON by the host (all fields optional, camelCase keys).

use serde::{Deserialize, Serialize};

use crate::core::{Result, SandboxError};

use super::settings::{ObjectSettings, SimulationSettings};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    /// Floor height below the container's bottom edge
    pub floor_thickness: f64,
    /// Stiffness of the pointer-follow constraint
    pub mouse_stiffness: f64,
    /// Fixed step fed to the engine per runner tick (ms)
    pub runner_delta_ms: f64,
    pub chain: ChainConfig,
    pub ground: GroundMaterial,
    pub render: RenderOptions,
    pub object_defaults: ObjectSettings,
    pub simulation: SimulationSettings,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            floor_thickness: 25.0,
            mouse_stiffness: 0.5,
            runner_delta_ms: 1000.0 / 60.0,
            chain: ChainConfig::default(),
            ground: GroundMaterial::default(),
            render: RenderOptions::default(),
            object_defaults: ObjectSettings::default(),
            simulation: SimulationSettings::default(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(SandboxError::Config("scene config must be a JSON object".to_string()));
        }
        let config: SceneConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn validate(&self) -> Result<()> {
        if !(self.floor_thickness.is_finite() && self.floor_thickness > 0.0) {
            return Err(SandboxError::Config(format!(
                "floorThickness must be positive, got {}",
                self.floor_thickness
            )));
        }
        if !(self.runner_delta_ms.is_finite() && self.runner_delta_ms > 0.0) {
            return Err(SandboxError::Config(format!(
                "runnerDeltaMs must be positive, got {}",
                self.runner_delta_ms
            )));
        }
        if self.chain.radius < 0.0 {
            return Err(SandboxError::Config("chain.radius must not be negative".to_string()));
        }
        Ok(())
    }
}

/// Invisible particle chain laid out along the top of the scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChainConfig {
    pub enabled: bool,
    pub x: f64,
    pub y: f64,
    pub count: u32,
    pub radius: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            x: 100.0,
            y: 50.0,
            count: 100,
            radius: 5.0,
            stiffness: 0.0,
            damping: 0.1,
        }
    }
}

/// Material of rectangles drawn with the ground tool
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundMaterial {
    pub friction: f64,
    pub restitution: f64,
}

impl Default for GroundMaterial {
    fn default() -> Self {
        Self {
            friction: 0.0,
            restitution: 1.0,
        }
    }
}

/// Debug overlays requested from the host renderer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub wireframes: bool,
    pub background: String,
    pub show_angle_indicator: bool,
    pub show_velocity: bool,
    pub show_convex_hulls: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wireframes: false,
            background: "transparent".to_string(),
            show_angle_indicator: true,
            show_velocity: true,
            show_convex_hulls: true,
        }
    }
}
