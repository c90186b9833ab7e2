//! Physics collaborator
//!
//! The sandbox never resolves collisions or constraints itself. Everything
//! it needs from an engine is the [`PhysicsEngine`] contract; the
//! [`HeadlessEngine`] is the in-crate implementation used by the WASM
//! facade and by tests.

mod body;
mod chain;
mod constraint;
mod engine;
mod headless;
pub mod mouse;

pub use body::{Body, BodyId, BodyKind, Fill, Material};
pub use chain::{build_particle_chain, ParticleChain};
pub use constraint::{Constraint, ConstraintId};
pub use engine::PhysicsEngine;
pub use headless::HeadlessEngine;
pub use mouse::{EventBus, ListenerId, Mouse, MouseConstraint, MouseEvent, MouseEventKind};
