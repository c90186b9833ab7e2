//! HeadlessEngine - in-memory world with a plain integrator
//!
//! Current behavior:
//! - Dynamic bodies with positive mass fall under gravity and lose speed
//!   to air friction.
//! - No collision detection, no constraint solving. Constraints are stored
//!   for the host renderer only.

use crate::core::math::Vec2;

use super::body::{Body, BodyId};
use super::constraint::{Constraint, ConstraintId};
use super::engine::PhysicsEngine;

/// Step length the velocity units are expressed in (ms)
const BASE_DELTA_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Timing {
    pub timestamp_ms: f64,
    pub steps: u64,
}

pub struct HeadlessEngine {
    bodies: Vec<Body>,
    constraints: Vec<Constraint>,
    next_body_id: u32,
    next_constraint_id: u32,
    gravity: Vec2,
    gravity_scale: f64,
    timing: Timing,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            constraints: Vec::new(),
            next_body_id: 1,
            next_constraint_id: 1,
            gravity: Vec2::new(0.0, 1.0),
            gravity_scale: 0.001,
            timing: Timing::default(),
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsEngine for HeadlessEngine {
    fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_body_id);
        self.next_body_id = self.next_body_id.saturating_add(1);
        body.id = id;
        self.bodies.push(body);
        id
    }

    fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        self.constraints.retain(|c| !c.links(id));
        Some(self.bodies.remove(idx))
    }

    fn add_constraint(&mut self, mut constraint: Constraint) -> ConstraintId {
        let id = ConstraintId(self.next_constraint_id);
        self.next_constraint_id = self.next_constraint_id.saturating_add(1);
        constraint.id = id;
        self.constraints.push(constraint);
        id
    }

    fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn gravity_scale(&self) -> f64 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f64) {
        self.gravity_scale = scale;
    }

    fn step(&mut self, delta_ms: f64) {
        if !(delta_ms.is_finite() && delta_ms > 0.0) {
            return;
        }

        // Acceleration is px/ms^2, velocity is px per base step.
        let accel = self.gravity * (self.gravity_scale * delta_ms * delta_ms);
        let time_ratio = delta_ms / BASE_DELTA_MS;

        for body in self.bodies.iter_mut() {
            if body.is_static() || body.material.mass <= 0.0 {
                continue;
            }

            let keep = (1.0 - body.material.friction_air * time_ratio).max(0.0);
            body.velocity = body.velocity * keep + accel;
            body.angular_velocity *= keep;

            let delta = body.velocity * time_ratio;
            body.translate(delta);
            body.angle += body.angular_velocity * time_ratio;
        }

        self.timing.timestamp_ms += delta_ms;
        self.timing.steps += 1;
    }

    fn clear_world(&mut self, keep_static: bool) {
        if keep_static {
            self.bodies.retain(|b| b.is_static());
            let bodies = &self.bodies;
            self.constraints.retain(|c| {
                bodies.iter().any(|b| b.id == c.body_a) && bodies.iter().any(|b| b.id == c.body_b)
            });
        } else {
            self.bodies.clear();
            self.constraints.clear();
        }
    }

    fn clear(&mut self) {
        self.timing = Timing::default();
        if self.bodies.is_empty() {
            self.next_body_id = 1;
        }
        if self.constraints.is_empty() {
            self.next_constraint_id = 1;
        }
    }
}
