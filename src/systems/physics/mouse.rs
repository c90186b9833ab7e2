//! Mouse constraint - pointer helper owned by the engine side
//!
//! Tracks the pointer, grabs the dynamic body under it on press, pulls the
//! grabbed body toward the pointer while it moves, and lets go on release.
//! Every step is reported as a [`MouseEvent`]; subscribers register through
//! the [`EventBus`] and must unregister with the id they were given.

use crate::core::math::Vec2;

use super::body::BodyId;
use super::engine::PhysicsEngine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    MouseDown,
    MouseUp,
    MouseMove,
    StartDrag,
    EndDrag,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: Vec2,
    /// Grabbed body for drag events
    pub body: Option<BodyId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Listener registry keyed by event kind.
///
/// Listeners are plain values; the owner decides what firing one means.
pub struct EventBus<L> {
    next_id: u32,
    listeners: Vec<(ListenerId, MouseEventKind, L)>,
}

impl<L: Copy> EventBus<L> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            listeners: Vec::new(),
        }
    }

    pub fn on(&mut self, kind: MouseEventKind, listener: L) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.listeners.push((id, kind, listener));
        id
    }

    /// Returns false when `id` was not registered
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listeners(&self, kind: MouseEventKind) -> impl Iterator<Item = L> + '_ {
        self.listeners
            .iter()
            .filter(move |(_, k, _)| *k == kind)
            .map(|(_, _, l)| *l)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<L: Copy> Default for EventBus<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer state in world coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mouse {
    pub position: Vec2,
    pub mousedown_position: Vec2,
    pub mouseup_position: Vec2,
    pub pressed: bool,
}

pub struct MouseConstraint<L> {
    pub mouse: Mouse,
    stiffness: f64,
    body: Option<BodyId>,
    events: EventBus<L>,
}

impl<L: Copy> MouseConstraint<L> {
    pub fn new(stiffness: f64) -> Self {
        Self {
            mouse: Mouse::default(),
            stiffness,
            body: None,
            events: EventBus::new(),
        }
    }

    pub fn grabbed(&self) -> Option<BodyId> {
        self.body
    }

    pub fn events(&self) -> &EventBus<L> {
        &self.events
    }

    pub fn on(&mut self, kind: MouseEventKind, listener: L) -> ListenerId {
        self.events.on(kind, listener)
    }

    pub fn off(&mut self, id: ListenerId) -> bool {
        self.events.off(id)
    }

    /// Pointer pressed. A grab reports `StartDrag` ahead of `MouseDown`.
    pub fn press<E: PhysicsEngine>(&mut self, engine: &E, position: Vec2) -> Vec<MouseEvent> {
        self.mouse.position = position;
        self.mouse.mousedown_position = position;
        self.mouse.pressed = true;

        let mut out = Vec::with_capacity(2);
        if self.body.is_none() {
            if let Some(id) = engine.body_at(position) {
                self.body = Some(id);
                out.push(self.event(MouseEventKind::StartDrag, Some(id)));
            }
        }
        out.push(self.event(MouseEventKind::MouseDown, None));
        out
    }

    /// Pointer moved. A grabbed body is pulled toward the pointer.
    pub fn move_to<E: PhysicsEngine>(&mut self, engine: &mut E, position: Vec2) -> Vec<MouseEvent> {
        self.mouse.position = position;

        if let Some(id) = self.body {
            match engine.body_mut(id) {
                Some(body) => {
                    let pull = (position - body.position) * self.stiffness;
                    body.velocity = pull;
                    body.translate(pull);
                }
                // body vanished under us
                None => self.body = None,
            }
        }
        vec![self.event(MouseEventKind::MouseMove, self.body)]
    }

    /// Pointer released. A held body reports `EndDrag` ahead of `MouseUp`.
    pub fn release(&mut self, position: Vec2) -> Vec<MouseEvent> {
        self.mouse.position = position;
        self.mouse.mouseup_position = position;
        self.mouse.pressed = false;

        let mut out = Vec::with_capacity(2);
        if let Some(id) = self.body.take() {
            out.push(self.event(MouseEventKind::EndDrag, Some(id)));
        }
        out.push(self.event(MouseEventKind::MouseUp, None));
        out
    }

    /// Pair each event with the listeners subscribed to its kind
    pub fn route(&self, events: &[MouseEvent]) -> Vec<(L, MouseEvent)> {
        events
            .iter()
            .flat_map(|e| self.events.listeners(e.kind).map(move |l| (l, *e)))
            .collect()
    }

    /// Drop the grab and reset pointer state. Subscriptions are untouched.
    pub fn reset(&mut self) {
        self.body = None;
        self.mouse = Mouse::default();
    }

    fn event(&self, kind: MouseEventKind, body: Option<BodyId>) -> MouseEvent {
        MouseEvent {
            kind,
            position: self.mouse.position,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::physics::{Body, HeadlessEngine, Material};

    #[test]
    fn on_and_off_pair_up() {
        let mut bus: EventBus<u8> = EventBus::new();
        let a = bus.on(MouseEventKind::MouseDown, 1);
        let b = bus.on(MouseEventKind::MouseUp, 2);
        assert_eq!(bus.listeners(MouseEventKind::MouseDown).collect::<Vec<_>>(), vec![1]);
        assert!(bus.off(a));
        assert!(!bus.off(a));
        assert!(bus.off(b));
        assert!(bus.is_empty());
    }

    #[test]
    fn press_on_empty_space_only_reports_mousedown() {
        let engine = HeadlessEngine::new();
        let mut mc: MouseConstraint<u8> = MouseConstraint::new(0.5);
        let events = mc.press(&engine, Vec2::new(10.0, 10.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, MouseEventKind::MouseDown);
        assert_eq!(events[0].position, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn grab_drag_release_sequence() {
        let mut engine = HeadlessEngine::new();
        let id = engine.add_body(Body::circle(Vec2::new(50.0, 50.0), 10.0, Material::default()));
        let mut mc: MouseConstraint<u8> = MouseConstraint::new(0.5);

        let down = mc.press(&engine, Vec2::new(52.0, 50.0));
        assert_eq!(down.iter().map(|e| e.kind).collect::<Vec<_>>(), vec![MouseEventKind::StartDrag, MouseEventKind::MouseDown]);
        assert_eq!(mc.grabbed(), Some(id));

        mc.move_to(&mut engine, Vec2::new(70.0, 50.0));
        assert_eq!(engine.body(id).unwrap().position, Vec2::new(60.0, 50.0));

        let up = mc.release(Vec2::new(70.0, 50.0));
        assert_eq!(up.iter().map(|e| e.kind).collect::<Vec<_>>(), vec![MouseEventKind::EndDrag, MouseEventKind::MouseUp]);
        assert_eq!(mc.grabbed(), None);
    }

    #[test]
    fn route_fans_out_to_subscribers() {
        let engine = HeadlessEngine::new();
        let mut mc: MouseConstraint<char> = MouseConstraint::new(0.5);
        mc.on(MouseEventKind::MouseDown, 'a');
        mc.on(MouseEventKind::MouseDown, 'b');
        mc.on(MouseEventKind::MouseUp, 'c');
        let events = mc.press(&engine, Vec2::zero());
        let routed = mc.route(&events);
        assert_eq!(routed.iter().map(|(l, _)| *l).collect::<Vec<_>>(), vec!['a', 'b']);
    }
}
