//! Domain - scene authoring state
//!
//! Plain data: tool modes, creation settings and scene configuration.
//! Nothing here touches the engine.

pub mod config;
pub mod settings;
pub mod tools;

pub use config::{ChainConfig, GroundMaterial, RenderOptions, SceneConfig};
pub use settings::{FieldHint, MoveAxisLock, ObjectField, ObjectSettings, SimulationSettings};
pub use tools::{Cursor, ToolMode};
