use super::*;
use crate::domain::{ChainConfig, ObjectField};
use crate::systems::physics::{BodyKind, Fill};

const EPS: f64 = 1e-9;

fn scene(width: f64, height: f64) -> SceneCore {
    SceneCore::mount(ContainerRect::new(width, height), SceneConfig::default()).unwrap()
}

/// Scene without the particle chain, so body counts are easy to read
fn bare_scene(width: f64, height: f64) -> SceneCore {
    let config = SceneConfig {
        chain: ChainConfig { enabled: false, ..ChainConfig::default() },
        ..SceneConfig::default()
    };
    SceneCore::mount(ContainerRect::new(width, height), config).unwrap()
}

fn snapshot(scene: &SceneCore) -> Vec<Body> {
    scene.engine().bodies().to_vec()
}

#[test]
fn mount_builds_floor_chain_and_loops() {
    let scene = scene(800.0, 600.0);

    assert!(scene.is_mounted());
    assert_eq!(scene.chain().bodies.len(), 100);
    assert_eq!(scene.body_count(), 101);
    assert_eq!(scene.engine().bodies()[0].fill, Fill::Floor);
    assert_eq!(scene.active_loops(), 2);
    assert_eq!(scene.subscription_count(), 4);
    assert!(scene.has_resize_listener());
    assert_eq!(scene.tool(), ToolMode::Select);
    assert_eq!(scene.render_surface().size(), (800, 600));
}

#[test]
fn mount_rejects_bad_containers() {
    let err = SceneCore::mount(ContainerRect::new(-5.0, 10.0), SceneConfig::default()).err();
    assert!(matches!(err, Some(crate::core::SandboxError::InvalidContainer { .. })));
}

#[test]
fn selecting_tools_never_touches_bodies() {
    let mut scene = scene(400.0, 300.0);
    let before = snapshot(&scene);

    for tool in ToolMode::ALL {
        scene.select_tool(tool);
        assert_eq!(scene.tool(), tool);
        assert_eq!(scene.cursor(), tool.cursor());
        assert_eq!(snapshot(&scene), before);
    }
}

#[test]
fn object_press_spawns_one_body_per_press() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.select_tool(ToolMode::Object);
    scene.set_object_setting(ObjectField::Size, 30.0);
    scene.set_object_setting(ObjectField::Restitution, 0.8);

    let GestureOutcome::ObjectSpawned(id) = scene.pointer_down(Vec2::new(120.0, 80.0)) else {
        panic!("expected a spawned object");
    };
    scene.pointer_up(Vec2::new(120.0, 80.0));

    let body = scene.body(id).unwrap();
    assert_eq!(body.position, Vec2::new(120.0, 80.0));
    assert_eq!(body.circle_radius, Some(30.0));
    assert_eq!(body.kind, BodyKind::Dynamic);
    assert_eq!(body.material.mass, 100.0);
    assert_eq!(body.material.density, 10.0);
    assert_eq!(body.material.restitution, 0.8);
    assert_eq!(body.material.friction, 0.001);
    assert_eq!(body.material.friction_air, 0.0);
    assert_eq!(scene.body_count(), 2);

    // same spot again: no dedup
    for n in 0..3 {
        scene.pointer_down(Vec2::new(500.0, 80.0));
        scene.pointer_up(Vec2::new(500.0, 80.0));
        assert_eq!(scene.body_count(), 3 + n);
    }
}

#[test]
fn spawned_bodies_keep_their_settings() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.select_tool(ToolMode::Object);

    let GestureOutcome::ObjectSpawned(id) = scene.pointer_down(Vec2::new(50.0, 50.0)) else {
        panic!("expected a spawned object");
    };
    scene.pointer_up(Vec2::new(50.0, 50.0));
    scene.set_object_setting(ObjectField::Mass, 1.0);

    assert_eq!(scene.body(id).unwrap().material.mass, 100.0);
}

#[test]
fn ground_drag_creates_static_rectangle() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.select_tool(ToolMode::Ground);

    assert_eq!(
        scene.pointer_down(Vec2::new(300.0, 400.0)),
        GestureOutcome::DragStarted(Vec2::new(300.0, 400.0))
    );
    assert!(scene.drag_anchor().dragging);
    assert_eq!(scene.body_count(), 1);

    let GestureOutcome::GroundCreated(id) = scene.pointer_up(Vec2::new(100.0, 450.0)) else {
        panic!("expected a ground");
    };
    assert_eq!(scene.drag_anchor(), DragAnchor::default());
    assert_eq!(scene.body_count(), 2);

    let ground = scene.body(id).unwrap();
    assert!(ground.is_static());
    assert_eq!(ground.fill, Fill::Ground);
    assert_eq!(ground.position, Vec2::new(200.0, 425.0));
    let bounds = ground.bounds();
    assert_eq!(bounds.width(), 200.0);
    assert_eq!(bounds.height(), 50.0);
    assert_eq!(ground.material.friction, 0.0);
    assert_eq!(ground.material.restitution, 1.0);
}

#[test]
fn ground_release_without_press_is_ignored() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.select_tool(ToolMode::Ground);

    assert_eq!(
        scene.pointer_up(Vec2::new(10.0, 10.0)),
        GestureOutcome::Ignored(IgnoreReason::MissingDragAnchor)
    );
    assert_eq!(scene.body_count(), 1);

    // press in another tool, release in ground: still no anchor
    scene.select_tool(ToolMode::Object);
    scene.pointer_down(Vec2::new(10.0, 10.0));
    scene.select_tool(ToolMode::Ground);
    assert_eq!(
        scene.pointer_up(Vec2::new(90.0, 90.0)),
        GestureOutcome::Ignored(IgnoreReason::MissingDragAnchor)
    );
    assert_eq!(scene.body_count(), 2);
}

#[test]
fn inert_tools_create_nothing() {
    let mut scene = bare_scene(800.0, 600.0);
    for tool in [ToolMode::Select, ToolMode::Line, ToolMode::Section, ToolMode::Spring] {
        scene.select_tool(tool);
        assert_eq!(scene.pointer_down(Vec2::new(10.0, 10.0)), GestureOutcome::NoAction);
        assert_eq!(scene.pointer_up(Vec2::new(50.0, 50.0)), GestureOutcome::NoAction);
    }
    assert_eq!(scene.body_count(), 1);
}

#[test]
fn select_tool_drags_bodies_through_the_mouse_constraint() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.select_tool(ToolMode::Object);
    let GestureOutcome::ObjectSpawned(id) = scene.pointer_down(Vec2::new(100.0, 100.0)) else {
        panic!("expected a spawned object");
    };
    scene.pointer_up(Vec2::new(100.0, 100.0));

    scene.select_tool(ToolMode::Select);
    scene.pointer_down(Vec2::new(100.0, 100.0));
    assert_eq!(scene.grabbed_body(), Some(id));
    scene.pointer_move(Vec2::new(200.0, 100.0));
    scene.pointer_up(Vec2::new(200.0, 100.0));

    assert_eq!(scene.grabbed_body(), None);
    assert_eq!(scene.body(id).unwrap().position, Vec2::new(150.0, 100.0));
}

#[test]
fn floor_tracks_container_bottom() {
    let mut scene = scene(800.0, 600.0);
    for (w, h) in [(800.0, 600.0), (1024.0, 300.0), (1.0, 1.0), (333.3, 777.7)] {
        scene.resize(ContainerRect::new(w, h)).unwrap();

        let floor = scene.floor().unwrap();
        let bounds = floor.bounds();
        assert!((bounds.min.y - h).abs() < EPS, "top edge {} != {}", bounds.min.y, h);
        assert!(bounds.min.x.abs() < EPS);
        assert!((bounds.max.x - w).abs() < EPS);
        assert!((bounds.height() - 25.0).abs() < EPS);
        assert_eq!(scene.render_surface().size(), (w.round() as u32, h.round() as u32));
        assert_eq!(scene.render_surface().bounds().max, Vec2::new(w, h));
    }
}

#[test]
fn layout_sync_is_idempotent() {
    let mut scene = scene(800.0, 600.0);
    assert!(scene.resize(ContainerRect::new(640.0, 480.0)).unwrap());
    let floor = scene.floor().cloned();
    assert!(!scene.resize(ContainerRect::new(640.0, 480.0)).unwrap());
    assert_eq!(scene.floor().cloned(), floor);
}

#[test]
fn window_resize_goes_through_the_listener() {
    let mut scene = scene(800.0, 600.0);
    assert!(scene.window_resized(ContainerRect::new(500.0, 500.0)).unwrap());
    assert!(!scene.window_resized(ContainerRect::new(500.0, 500.0)).unwrap());
    assert_eq!(scene.container(), ContainerRect::new(500.0, 500.0));
    assert_eq!(scene.resize_notifications(), 2);

    scene.teardown();
    assert!(!scene.has_resize_listener());
    assert_eq!(scene.resize_notifications(), 0);
    assert!(!scene.window_resized(ContainerRect::new(100.0, 100.0)).unwrap());
}

#[test]
fn tick_steps_and_renders_until_paused() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.select_tool(ToolMode::Object);
    let GestureOutcome::ObjectSpawned(id) = scene.pointer_down(Vec2::new(100.0, 100.0)) else {
        panic!("expected a spawned object");
    };
    scene.pointer_up(Vec2::new(100.0, 100.0));

    let report = scene.tick();
    assert!(report.stepped && report.rendered);
    let y = scene.body(id).unwrap().position.y;
    assert!(y > 100.0);
    assert!(!scene.render_surface().frame_buffer().is_empty());

    assert!(!scene.toggle_running());
    assert_eq!(scene.active_loops(), 1);
    let report = scene.tick();
    assert!(!report.stepped && report.rendered);
    assert_eq!(scene.body(id).unwrap().position.y, y);

    assert!(scene.toggle_running());
}

#[test]
fn gravity_scale_reaches_the_engine() {
    let mut scene = bare_scene(800.0, 600.0);
    scene.set_gravity_scale(0.0);
    assert_eq!(scene.engine().gravity_scale(), 0.0);
    assert_eq!(scene.simulation_settings().gravity_scale, 0.0);
}

#[test]
fn teardown_releases_everything_and_is_idempotent() {
    let mut scene = scene(800.0, 600.0);
    scene.select_tool(ToolMode::Object);
    scene.pointer_down(Vec2::new(10.0, 10.0));
    scene.tick();

    scene.teardown();
    assert!(!scene.is_mounted());
    assert_eq!(scene.active_loops(), 0);
    assert_eq!(scene.body_count(), 0);
    assert_eq!(scene.subscription_count(), 0);
    assert!(scene.render_surface().frame_buffer().is_empty());
    assert!(scene.floor().is_none());

    scene.teardown();
    assert_eq!(scene.tick(), FrameReport::default());
    assert_eq!(
        scene.pointer_down(Vec2::new(10.0, 10.0)),
        GestureOutcome::Ignored(IgnoreReason::Unmounted)
    );
    scene.resume();
    assert_eq!(scene.active_loops(), 0);
    assert_eq!(scene.body_count(), 0);
}

#[test]
fn settings_edits_are_isolated() {
    let mut scene = scene(800.0, 600.0);
    let before = scene.object_settings();
    scene.edit_object_setting(ObjectField::Density, "3").unwrap();
    let after = scene.object_settings();
    assert_eq!(after.density, 3.0);
    for field in ObjectField::ALL {
        if field != ObjectField::Density {
            assert_eq!(after.get(field), before.get(field));
        }
    }
    assert!(scene.edit_object_setting(ObjectField::Size, "big").is_err());
    assert_eq!(scene.object_settings(), after);
}

#[test]
fn custom_engines_plug_in_behind_the_trait() {
    let scene = SceneCore::mount_with(HeadlessEngine::new(), ContainerRect::new(10.0, 10.0), SceneConfig::default()).unwrap();
    assert!(scene.floor().is_some());
}
