use crate::core::math::{Bounds, Vec2};
use crate::domain::RenderOptions;
use crate::systems::physics::PhysicsEngine;

use super::extract::extract_bodies;

/// Drawing surface bound to one engine world
pub struct RenderSurface {
    pub options: RenderOptions,
    bounds: Bounds,
    width: u32,
    height: u32,
    running: bool,
    frames: u64,
    /// Cached body records handed to the host
    frame_buffer: Vec<f32>,
}

impl RenderSurface {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            bounds: Bounds::default(),
            width: 0,
            height: 0,
            running: false,
            frames: 0,
            frame_buffer: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Canvas size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Match the visible bounds and canvas size to a container.
    /// Returns true when anything changed.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        let max = Vec2::new(width, height);
        let px = (width.round() as u32, height.round() as u32);
        if self.bounds.max == max && (self.width, self.height) == px {
            return false;
        }
        self.bounds.max = max;
        self.width = px.0;
        self.height = px.1;
        true
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Refresh the frame buffer from the world. Skipped while stopped.
    pub fn render<E: PhysicsEngine>(&mut self, engine: &E) -> bool {
        if !self.running {
            return false;
        }
        extract_bodies(engine, &mut self.frame_buffer);
        self.frames += 1;
        true
    }

    pub fn frame_buffer(&self) -> &[f32] {
        &self.frame_buffer
    }

    /// Drop cached buffers
    pub fn release(&mut self) {
        self.frame_buffer = Vec::new();
    }
}
