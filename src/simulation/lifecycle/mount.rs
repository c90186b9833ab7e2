use crate::core::math::Vec2;
use crate::core::Result;
use crate::domain::SceneConfig;
use crate::systems::physics::{build_particle_chain, Body, Fill, Material, MouseConstraint, MouseEventKind, PhysicsEngine};
use crate::systems::render::RenderSurface;

use super::gesture::GestureListener;
use super::layout::{self, ContainerRect};
use super::runner::Runner;
use super::{ResizeListener, SceneCore, SceneState};

const SUBSCRIPTIONS: [(MouseEventKind, GestureListener); 4] = [
    (MouseEventKind::MouseDown, GestureListener::Press),
    (MouseEventKind::MouseUp, GestureListener::Release),
    (MouseEventKind::StartDrag, GestureListener::StartDrag),
    (MouseEventKind::EndDrag, GestureListener::EndDrag),
];

pub(super) fn mount<E: PhysicsEngine>(mut engine: E, container: ContainerRect, config: SceneConfig) -> Result<SceneCore<E>> {
    let container = container.validate()?;

    let render = RenderSurface::new(config.render.clone());

    // Zero-width placeholder; the first layout sync gives it its real shape.
    let floor = Body::rectangle(Vec2::zero(), 0.0, config.floor_thickness, Material::default())
        .into_static()
        .with_fill(Fill::Floor);
    let floor = engine.add_body(floor);

    engine.set_gravity_scale(config.simulation.gravity_scale);
    let chain = build_particle_chain(&mut engine, &config.chain);

    let mut mouse = MouseConstraint::new(config.mouse_stiffness);
    let subscriptions = SUBSCRIPTIONS
        .iter()
        .map(|(kind, listener)| mouse.on(*kind, *listener))
        .collect();

    let state = SceneState {
        object_settings: config.object_defaults,
        simulation: config.simulation,
        ..SceneState::default()
    };

    let mut scene = SceneCore {
        runner: Runner::new(config.runner_delta_ms),
        config,
        engine,
        render,
        mouse,
        subscriptions,
        resize_listener: Some(ResizeListener::default()),
        state,
        floor: Some(floor),
        chain,
        container,
        mounted: true,
    };

    scene.runner.start();
    scene.render.start();
    layout::resize(&mut scene, container)?;

    log::info!(
        "scene mounted {}x{} with {} bodies",
        container.width,
        container.height,
        scene.engine.body_count()
    );
    Ok(scene)
}
