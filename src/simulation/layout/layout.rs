use crate::core::math::Vec2;
use crate::core::{Result, SandboxError};
use crate::systems::physics::PhysicsEngine;

use super::SceneCore;

/// Measured size of the element hosting the canvas
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub(super) fn validate(self) -> Result<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(SandboxError::InvalidContainer {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Floor outline flush with the container's bottom edge
fn floor_vertices(rect: ContainerRect, thickness: f64) -> [Vec2; 4] {
    let (w, h) = (rect.width, rect.height);
    [
        Vec2::new(0.0, h),
        Vec2::new(w, h),
        Vec2::new(w, h + thickness),
        Vec2::new(0.0, h + thickness),
    ]
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length_squared() < 1e-12
}

pub(super) fn resize<E: PhysicsEngine>(scene: &mut SceneCore<E>, container: ContainerRect) -> Result<bool> {
    let container = container.validate()?;
    if !scene.mounted {
        return Ok(false);
    }

    scene.container = container;
    let mut changed = scene.render.resize(container.width, container.height);

    let thickness = scene.config.floor_thickness;
    if let Some(floor) = scene.floor.and_then(|id| scene.engine.body_mut(id)) {
        let position = Vec2::new(container.width / 2.0, container.height + thickness / 2.0);
        let outline = floor_vertices(container, thickness);
        let in_place = close(floor.position, position)
            && floor.vertices.len() == outline.len()
            && floor.vertices.iter().zip(outline.iter()).all(|(a, b)| close(*a, *b));
        if !in_place {
            floor.set_position(position);
            floor.set_vertices(&outline);
            changed = true;
        }
    }

    if changed {
        log::debug!("layout synced to {}x{}", container.width, container.height);
    }
    Ok(changed)
}
