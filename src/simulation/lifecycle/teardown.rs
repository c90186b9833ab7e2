use crate::systems::physics::PhysicsEngine;

use super::gesture::DragAnchor;
use super::SceneCore;

pub(super) fn teardown<E: PhysicsEngine>(scene: &mut SceneCore<E>) {
    if !scene.mounted {
        return;
    }

    scene.render.stop();
    scene.runner.stop();

    for id in scene.subscriptions.drain(..) {
        scene.mouse.off(id);
    }
    scene.mouse.reset();
    scene.resize_listener = None;

    scene.engine.clear_world(false);
    scene.engine.clear();
    scene.render.release();

    scene.floor = None;
    scene.chain = Default::default();
    scene.state.drag = DragAnchor::default();
    scene.mounted = false;

    log::info!("scene torn down");
}
