use crate::core::math::Vec2;

use super::body::{Body, BodyId};
use super::constraint::{Constraint, ConstraintId};

/// Operations the sandbox consumes from a physics engine.
///
/// One implementor owns one world. Collision detection and constraint
/// solving are the implementor's business.
pub trait PhysicsEngine {
    /// Insert a body and return its id
    fn add_body(&mut self, body: Body) -> BodyId;

    fn remove_body(&mut self, id: BodyId) -> Option<Body>;

    fn add_constraint(&mut self, constraint: Constraint) -> ConstraintId;

    fn body(&self, id: BodyId) -> Option<&Body>;

    fn body_mut(&mut self, id: BodyId) -> Option<&mut Body>;

    /// Bodies in insertion order
    fn bodies(&self) -> &[Body];

    fn constraints(&self) -> &[Constraint];

    fn gravity_scale(&self) -> f64;

    fn set_gravity_scale(&mut self, scale: f64);

    /// Advance the world by `delta_ms`
    fn step(&mut self, delta_ms: f64);

    /// Remove bodies and constraints. Static bodies survive when `keep_static`.
    fn clear_world(&mut self, keep_static: bool);

    /// Reset internal engine state (timing, id counters)
    fn clear(&mut self);

    fn body_count(&self) -> usize {
        self.bodies().len()
    }

    /// Topmost dynamic body under `point`
    fn body_at(&self, point: Vec2) -> Option<BodyId> {
        self.bodies()
            .iter()
            .rev()
            .find(|b| !b.is_static() && b.visible && b.contains_point(point))
            .map(|b| b.id)
    }
}
