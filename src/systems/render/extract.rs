//! Body extraction for the host renderer
//!
//! One record per visible body, packed back to back:
//!
//! ```text
//! [shape, fill, is_static, x, y, angle, radius, n, v0x, v0y, .. vn-1x, vn-1y]
//! ```
//!
//! `shape` is [`SHAPE_CIRCLE`] or [`SHAPE_POLYGON`], `fill` is the
//! [`Fill`](crate::systems::physics::Fill) discriminant, `radius` is 0 for
//! polygons and `n` is the vertex count.

use crate::systems::physics::PhysicsEngine;

pub const SHAPE_CIRCLE: f32 = 0.0;
pub const SHAPE_POLYGON: f32 = 1.0;

/// Fixed fields ahead of the vertex list
pub const RECORD_HEADER_LEN: usize = 8;

/// Rewrite `out` with the records of every visible body.
/// Returns the number of records written.
pub fn extract_bodies<E: PhysicsEngine>(engine: &E, out: &mut Vec<f32>) -> usize {
    out.clear();
    let mut count = 0;

    for body in engine.bodies().iter().filter(|b| b.visible) {
        let (shape, radius) = match body.circle_radius {
            Some(r) => (SHAPE_CIRCLE, r as f32),
            None => (SHAPE_POLYGON, 0.0),
        };
        out.extend_from_slice(&[
            shape,
            body.fill as u8 as f32,
            if body.is_static() { 1.0 } else { 0.0 },
            body.position.x as f32,
            body.position.y as f32,
            body.angle as f32,
            radius,
            body.vertices.len() as f32,
        ]);
        for v in &body.vertices {
            out.push(v.x as f32);
            out.push(v.y as f32);
        }
        count += 1;
    }

    count
}
