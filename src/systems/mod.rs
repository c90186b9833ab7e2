//! Systems - engine collaborators
//!
//! - physics/  - body model, engine contract, headless stepper, mouse constraint
//! - render/   - render surface and body extraction for the host renderer

pub mod physics;
pub mod render;
