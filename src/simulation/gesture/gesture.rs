use crate::core::math::Vec2;
use crate::domain::{GroundMaterial, ToolMode};
use crate::systems::physics::{Body, BodyId, Fill, Material, MouseEvent, PhysicsEngine};

use super::{SceneCore, SceneState};

/// Handlers the scene subscribes on the mouse constraint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureListener {
    Press,
    Release,
    StartDrag,
    EndDrag,
}

/// Pointer positions of the current gesture
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragAnchor {
    pub start: Option<Vec2>,
    pub end: Option<Vec2>,
    /// Set by a ground-mode press, cleared by any release
    pub dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    ObjectSpawned(BodyId),
    GroundCreated(BodyId),
    DragStarted(Vec2),
    /// The current tool does nothing with this gesture
    NoAction,
    Ignored(IgnoreReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Ground release without a ground press before it
    MissingDragAnchor,
    /// Scene already torn down
    Unmounted,
}

pub(super) fn pointer_down<E: PhysicsEngine>(scene: &mut SceneCore<E>, position: Vec2) -> GestureOutcome {
    if !scene.mounted {
        return GestureOutcome::Ignored(IgnoreReason::Unmounted);
    }
    let events = scene.mouse.press(&scene.engine, position);
    dispatch(scene, &events)
}

pub(super) fn pointer_move<E: PhysicsEngine>(scene: &mut SceneCore<E>, position: Vec2) {
    if !scene.mounted {
        return;
    }
    scene.mouse.move_to(&mut scene.engine, position);
}

pub(super) fn pointer_up<E: PhysicsEngine>(scene: &mut SceneCore<E>, position: Vec2) -> GestureOutcome {
    if !scene.mounted {
        return GestureOutcome::Ignored(IgnoreReason::Unmounted);
    }
    let events = scene.mouse.release(position);
    dispatch(scene, &events)
}

/// Fire subscribed listeners; the press/release listener decides the outcome
fn dispatch<E: PhysicsEngine>(scene: &mut SceneCore<E>, events: &[MouseEvent]) -> GestureOutcome {
    let mut outcome = GestureOutcome::NoAction;
    for (listener, event) in scene.mouse.route(events) {
        match listener {
            GestureListener::Press => {
                outcome = on_press(&mut scene.state, &mut scene.engine, event.position);
            }
            GestureListener::Release => {
                outcome = on_release(&mut scene.state, &mut scene.engine, &scene.config.ground, event.position);
            }
            GestureListener::StartDrag => log::debug!("startdrag {:?} at {:?}", event.body, event.position),
            GestureListener::EndDrag => log::debug!("enddrag {:?} at {:?}", event.body, event.position),
        }
    }
    outcome
}

fn on_press<E: PhysicsEngine>(state: &mut SceneState, engine: &mut E, at: Vec2) -> GestureOutcome {
    state.drag.start = Some(at);
    state.drag.end = None;

    match state.tool {
        ToolMode::Object => {
            let s = state.object_settings;
            let material = Material {
                mass: s.mass,
                density: s.density,
                restitution: s.restitution,
                friction: s.friction,
                friction_air: s.air_friction,
                ..Material::default()
            };
            let id = engine.add_body(Body::circle(at, s.size, material));
            GestureOutcome::ObjectSpawned(id)
        }
        ToolMode::Ground => {
            state.drag.dragging = true;
            log::debug!("ground drag from ({}, {})", at.x, at.y);
            GestureOutcome::DragStarted(at)
        }
        ToolMode::Select | ToolMode::Line | ToolMode::Section | ToolMode::Spring => GestureOutcome::NoAction,
    }
}

fn on_release<E: PhysicsEngine>(
    state: &mut SceneState,
    engine: &mut E,
    ground: &GroundMaterial,
    at: Vec2,
) -> GestureOutcome {
    state.drag.end = Some(at);
    let dragging = std::mem::replace(&mut state.drag.dragging, false);

    if state.tool != ToolMode::Ground {
        return GestureOutcome::NoAction;
    }

    let start = match state.drag.start {
        Some(start) if dragging => start,
        _ => {
            log::warn!("ground release at ({}, {}) without a matching press; ignored", at.x, at.y);
            return GestureOutcome::Ignored(IgnoreReason::MissingDragAnchor);
        }
    };

    let center = start.midpoint(at);
    let extent = start.abs_diff(at);
    let material = Material {
        friction: ground.friction,
        restitution: ground.restitution,
        ..Material::default()
    };
    let body = Body::rectangle(center, extent.x, extent.y, material)
        .into_static()
        .with_fill(Fill::Ground);
    let id = engine.add_body(body);
    state.drag = DragAnchor::default();

    log::debug!("ground {:?} {}x{} at ({}, {})", id, extent.x, extent.y, center.x, center.y);
    GestureOutcome::GroundCreated(id)
}
