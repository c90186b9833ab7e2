use std::str::FromStr;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::core::math::Vec2;
use crate::core::SandboxError;
use crate::domain::{MoveAxisLock, ObjectField, SceneConfig, ToolMode};

use super::gesture::{GestureOutcome, IgnoreReason};
use super::layout::ContainerRect;
use super::SceneCore;

fn js_error(err: SandboxError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Short tag the toolbar code switches on
fn outcome_tag(outcome: GestureOutcome) -> String {
    match outcome {
        GestureOutcome::ObjectSpawned(id) => format!("object:{}", id.0),
        GestureOutcome::GroundCreated(id) => format!("ground:{}", id.0),
        GestureOutcome::DragStarted(_) => "drag".to_string(),
        GestureOutcome::NoAction => "none".to_string(),
        GestureOutcome::Ignored(IgnoreReason::MissingDragAnchor) => "ignored:missing-anchor".to_string(),
        GestureOutcome::Ignored(IgnoreReason::Unmounted) => "ignored:unmounted".to_string(),
    }
}

#[wasm_bindgen]
pub struct Sandbox {
    core: SceneCore,
    canvas: Option<HtmlCanvasElement>,
}

#[wasm_bindgen]
impl Sandbox {
    /// Mount a scene for a container of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<Sandbox, JsValue> {
        let core = SceneCore::mount(ContainerRect::new(width, height), SceneConfig::default()).map_err(js_error)?;
        Ok(Self { core, canvas: None })
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f64, height: f64, config_json: String) -> Result<Sandbox, JsValue> {
        let config = SceneConfig::from_json(&config_json).map_err(js_error)?;
        let core = SceneCore::mount(ContainerRect::new(width, height), config).map_err(js_error)?;
        Ok(Self { core, canvas: None })
    }

    /// Mount bound to a canvas; fails when the canvas has no 2d context
    #[wasm_bindgen(js_name = withCanvas)]
    pub fn with_canvas(
        canvas: HtmlCanvasElement,
        width: f64,
        height: f64,
        config_json: Option<String>,
    ) -> Result<Sandbox, JsValue> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| js_error(SandboxError::UnsupportedSurface("getContext('2d') threw".to_string())))?;
        if context.is_none() {
            return Err(js_error(SandboxError::UnsupportedSurface("no 2d context".to_string())));
        }

        let config = match config_json {
            Some(json) => SceneConfig::from_json(&json).map_err(js_error)?,
            None => SceneConfig::default(),
        };
        let core = SceneCore::mount(ContainerRect::new(width, height), config).map_err(js_error)?;

        let mut sandbox = Self {
            core,
            canvas: Some(canvas),
        };
        sandbox.sync_canvas();
        Ok(sandbox)
    }

    // === TOOLS & SETTINGS ===

    #[wasm_bindgen(getter)]
    pub fn tool(&self) -> String {
        self.core.tool().to_string()
    }

    /// CSS cursor for the current tool
    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> String {
        self.core.cursor().as_css().to_string()
    }

    pub fn select_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let tool = ToolMode::from_str(name).map_err(js_error)?;
        self.core.select_tool(tool);
        Ok(())
    }

    /// Apply input text to one object setting; returns the stored number
    pub fn set_object_setting(&mut self, field: &str, text: &str) -> Result<f64, JsValue> {
        let field = ObjectField::from_str(field).map_err(js_error)?;
        self.core.edit_object_setting(field, text).map_err(js_error)
    }

    pub fn object_settings_json(&self) -> String {
        serde_json::to_string(&self.core.object_settings()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn set_move_axis_lock(&mut self, axis: &str) -> Result<(), JsValue> {
        let lock = MoveAxisLock::from_str(axis).map_err(js_error)?;
        self.core.set_move_axis_lock(lock);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn gravity_scale(&self) -> f64 {
        self.core.simulation_settings().gravity_scale
    }

    pub fn set_gravity_scale(&mut self, scale: f64) {
        self.core.set_gravity_scale(scale);
    }

    // === POINTER ===

    pub fn pointer_down(&mut self, x: f64, y: f64) -> String {
        outcome_tag(self.core.pointer_down(Vec2::new(x, y)))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.core.pointer_move(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> String {
        outcome_tag(self.core.pointer_up(Vec2::new(x, y)))
    }

    // === LAYOUT ===

    /// Container measured (mount or layout change)
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, JsValue> {
        let changed = self.core.resize(ContainerRect::new(width, height)).map_err(js_error)?;
        self.sync_canvas();
        Ok(changed)
    }

    /// Forwarded `window` resize event with the re-measured container
    pub fn window_resized(&mut self, width: f64, height: f64) -> Result<bool, JsValue> {
        let changed = self
            .core
            .window_resized(ContainerRect::new(width, height))
            .map_err(js_error)?;
        self.sync_canvas();
        Ok(changed)
    }

    // === LOOPS ===

    /// Call once per animation frame; returns true when a frame was rendered
    pub fn tick(&mut self) -> bool {
        self.core.tick().rendered
    }

    pub fn pause(&mut self) {
        self.core.pause();
    }

    pub fn resume(&mut self) {
        self.core.resume();
    }

    pub fn toggle_running(&mut self) -> bool {
        self.core.toggle_running()
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    #[wasm_bindgen(getter)]
    pub fn active_loops(&self) -> usize {
        self.core.active_loops()
    }

    // === WORLD ===

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Body records of the last rendered frame (layout in `systems::render`)
    pub fn render_buffer(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.core.render_surface().frame_buffer())
    }

    pub fn render_options_json(&self) -> String {
        serde_json::to_string(&self.core.config().render).unwrap_or_else(|_| "{}".to_string())
    }

    /// Unmount: stops loops and releases the world. Safe to call twice.
    pub fn destroy(&mut self) {
        self.core.teardown();
    }
}

impl Sandbox {
    pub fn core(&self) -> &SceneCore {
        &self.core
    }

    fn sync_canvas(&self) {
        if let Some(canvas) = &self.canvas {
            let (w, h) = self.core.render_surface().size();
            if canvas.width() != w {
                canvas.set_width(w);
            }
            if canvas.height() != h {
                canvas.set_height(h);
            }
        }
    }
}
