//! Scene - one mounted sandbox scene
//!
//! SceneCore only orchestrates:
//! - lifecycle/  - mount and teardown (scoped acquire/release)
//! - gesture/    - pointer gestures per tool mode
//! - layout/     - container measurement and floor placement
//! - loops/      - stepping runner
//!
//! The engine and the render surface are created in `mount` and released
//! together in `teardown`, which also runs on drop.

use crate::core::math::Vec2;
use crate::core::Result;
use crate::domain::{Cursor, MoveAxisLock, ObjectField, ObjectSettings, SceneConfig, SimulationSettings, ToolMode};
use crate::systems::physics::{Body, BodyId, HeadlessEngine, ListenerId, MouseConstraint, ParticleChain, PhysicsEngine};
use crate::systems::render::RenderSurface;

#[path = "gesture/gesture.rs"]
mod gesture;
#[path = "layout/layout.rs"]
mod layout;
#[path = "lifecycle/mount.rs"]
mod mount;
#[path = "lifecycle/teardown.rs"]
mod teardown;
#[path = "loops/runner.rs"]
mod runner;
mod facade;

pub use facade::Sandbox;
pub use gesture::{DragAnchor, GestureListener, GestureOutcome, IgnoreReason};
pub use layout::ContainerRect;
pub use runner::{FrameReport, Runner};

/// UI state shared by the gesture handlers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneState {
    pub tool: ToolMode,
    pub object_settings: ObjectSettings,
    pub simulation: SimulationSettings,
    pub move_lock: MoveAxisLock,
    pub drag: DragAnchor,
}

/// Window-level resize subscription
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ResizeListener {
    notifications: u64,
}

pub struct SceneCore<E: PhysicsEngine = HeadlessEngine> {
    config: SceneConfig,
    engine: E,
    render: RenderSurface,
    runner: Runner,
    mouse: MouseConstraint<GestureListener>,
    subscriptions: Vec<ListenerId>,
    resize_listener: Option<ResizeListener>,
    state: SceneState,
    floor: Option<BodyId>,
    chain: ParticleChain,
    container: ContainerRect,
    mounted: bool,
}

impl SceneCore<HeadlessEngine> {
    /// Mount a scene on the built-in headless engine
    pub fn mount(container: ContainerRect, config: SceneConfig) -> Result<Self> {
        mount::mount(HeadlessEngine::new(), container, config)
    }
}

impl<E: PhysicsEngine> SceneCore<E> {
    /// Mount a scene on a caller-provided engine
    pub fn mount_with(engine: E, container: ContainerRect, config: SceneConfig) -> Result<Self> {
        mount::mount(engine, container, config)
    }

    /// Stop both loops and release every engine and render resource.
    /// Calling it again is a no-op.
    pub fn teardown(&mut self) {
        teardown::teardown(self);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    // === TOOLS ===

    pub fn tool(&self) -> ToolMode {
        self.state.tool
    }

    /// Switch tools. Returns the previous tool.
    pub fn select_tool(&mut self, tool: ToolMode) -> ToolMode {
        let previous = std::mem::replace(&mut self.state.tool, tool);
        if previous != tool {
            log::debug!("tool {} -> {}", previous, tool);
        }
        previous
    }

    pub fn cursor(&self) -> Cursor {
        self.state.tool.cursor()
    }

    // === SETTINGS ===

    pub fn object_settings(&self) -> ObjectSettings {
        self.state.object_settings
    }

    pub fn set_object_setting(&mut self, field: ObjectField, value: f64) {
        self.state.object_settings.set(field, value);
    }

    /// Apply raw panel text to one field
    pub fn edit_object_setting(&mut self, field: ObjectField, text: &str) -> Result<f64> {
        self.state.object_settings.set_from_text(field, text)
    }

    pub fn move_axis_lock(&self) -> MoveAxisLock {
        self.state.move_lock
    }

    pub fn set_move_axis_lock(&mut self, lock: MoveAxisLock) {
        self.state.move_lock = lock;
    }

    pub fn simulation_settings(&self) -> SimulationSettings {
        self.state.simulation
    }

    pub fn set_gravity_scale(&mut self, scale: f64) {
        self.state.simulation.gravity_scale = scale;
        self.engine.set_gravity_scale(scale);
    }

    // === POINTER ===

    pub fn pointer_down(&mut self, position: Vec2) -> GestureOutcome {
        gesture::pointer_down(self, position)
    }

    pub fn pointer_move(&mut self, position: Vec2) {
        gesture::pointer_move(self, position)
    }

    pub fn pointer_up(&mut self, position: Vec2) -> GestureOutcome {
        gesture::pointer_up(self, position)
    }

    pub fn drag_anchor(&self) -> DragAnchor {
        self.state.drag
    }

    /// Body currently held by the pointer
    pub fn grabbed_body(&self) -> Option<BodyId> {
        self.mouse.grabbed()
    }

    // === LAYOUT ===

    /// Sync render surface and floor to a new container size.
    /// Returns true when anything moved.
    pub fn resize(&mut self, container: ContainerRect) -> Result<bool> {
        layout::resize(self, container)
    }

    /// Window resize notification; ignored once the listener is removed
    pub fn window_resized(&mut self, container: ContainerRect) -> Result<bool> {
        match self.resize_listener.as_mut() {
            Some(listener) => listener.notifications += 1,
            None => return Ok(false),
        }
        self.resize(container)
    }

    pub fn has_resize_listener(&self) -> bool {
        self.resize_listener.is_some()
    }

    /// Window resize events received since mount
    pub fn resize_notifications(&self) -> u64 {
        self.resize_listener.map_or(0, |l| l.notifications)
    }

    pub fn container(&self) -> ContainerRect {
        self.container
    }

    // === LOOPS ===

    /// One host frame: step (if running) then refresh the render buffer
    pub fn tick(&mut self) -> FrameReport {
        if !self.mounted {
            return FrameReport::default();
        }
        let stepped = self.runner.tick(&mut self.engine);
        let rendered = self.render.render(&self.engine);
        FrameReport { stepped, rendered }
    }

    pub fn pause(&mut self) {
        self.runner.stop();
    }

    pub fn resume(&mut self) {
        if self.mounted {
            self.runner.start();
        }
    }

    /// Play/pause toggle. Returns whether the runner is now running.
    pub fn toggle_running(&mut self) -> bool {
        if self.runner.is_running() {
            self.pause();
        } else {
            self.resume();
        }
        self.runner.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    /// Number of loops still scheduled (runner and render loop)
    pub fn active_loops(&self) -> usize {
        usize::from(self.runner.is_running()) + usize::from(self.render.is_running())
    }

    /// Live gesture subscriptions on the mouse constraint
    pub fn subscription_count(&self) -> usize {
        self.mouse.events().len()
    }

    // === WORLD ===

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn render_surface(&self) -> &RenderSurface {
        &self.render
    }

    pub fn body_count(&self) -> usize {
        self.engine.body_count()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.engine.body(id)
    }

    pub fn floor(&self) -> Option<&Body> {
        self.floor.and_then(|id| self.engine.body(id))
    }

    pub fn chain(&self) -> &ParticleChain {
        &self.chain
    }
}

impl<E: PhysicsEngine> Drop for SceneCore<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
