use crate::core::math::Vec2;
use crate::domain::ChainConfig;

use super::body::{Body, BodyId, Material};
use super::constraint::{Constraint, ConstraintId};
use super::engine::PhysicsEngine;

/// Row of invisible particles linked end to end
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleChain {
    pub bodies: Vec<BodyId>,
    pub constraints: Vec<ConstraintId>,
}

impl ParticleChain {
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

const CHAIN_MATERIAL: Material = Material {
    mass: 0.0,
    density: 0.001,
    restitution: 0.0,
    friction: 0.0,
    friction_air: 0.0,
    friction_static: 0.0,
};

/// Build the chain and insert it into `engine`.
///
/// Particles are packed edge to edge starting at the configured origin,
/// share collision group -1 and are linked by constraints whose rest
/// length is the particle spacing.
pub fn build_particle_chain<E: PhysicsEngine>(engine: &mut E, config: &ChainConfig) -> ParticleChain {
    let mut chain = ParticleChain::default();
    if !config.enabled || config.count == 0 {
        return chain;
    }

    let r = config.radius;
    for i in 0..config.count {
        let center = Vec2::new(config.x + r + i as f64 * 2.0 * r, config.y + r);
        let particle = Body::circle(center, r, CHAIN_MATERIAL)
            .with_collision_group(-1)
            .hidden();
        chain.bodies.push(engine.add_body(particle));
    }

    for pair in chain.bodies.windows(2) {
        let mut link = Constraint::new(pair[0], pair[1], 2.0 * r, config.stiffness, config.damping);
        link.visible = false;
        chain.constraints.push(engine.add_constraint(link));
    }

    chain
}
