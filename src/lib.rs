//! Physika Engine - scene authoring core for the Physika sandbox (WASM)
//!
//! Architecture:
//! - core/        - errors, logging, math
//! - domain/      - tool modes, object settings, scene config
//! - systems/     - physics collaborator, render extraction
//! - simulation/  - scene controller and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::Level::Debug);
    log::info!("Physika engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Tool names in toolbar order
#[wasm_bindgen]
pub fn tool_names() -> Vec<JsValue> {
    domain::ToolMode::ALL
        .iter()
        .map(|t| JsValue::from_str(t.as_str()))
        .collect()
}

// Re-export main types
pub use crate::core::SandboxError;
pub use domain::{ObjectField, ObjectSettings, SceneConfig, ToolMode};
pub use simulation::{ContainerRect, GestureOutcome, Sandbox, SceneCore};
pub use systems::physics::{HeadlessEngine, PhysicsEngine};
