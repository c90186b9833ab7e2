use std::f64::consts::PI;

use crate::core::math::{Bounds, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Dynamic,
    Static,
}

/// Palette slot the host renderer paints a body with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Renderer picks a color
    Auto = 0,
    /// Scene floor (blue)
    Floor = 1,
    /// Drawn ground (gray)
    Ground = 2,
}

/// Physical parameters copied into a body at creation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub mass: f64,
    pub density: f64,
    pub restitution: f64,
    pub friction: f64,
    pub friction_air: f64,
    pub friction_static: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            mass: 1.0,
            density: 0.001,
            restitution: 0.0,
            friction: 0.1,
            friction_air: 0.01,
            friction_static: 0.5,
        }
    }
}

/// Rigid body owned by an engine world.
///
/// Vertices are kept in world space and move with the body.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Assigned by the engine on insertion (0 before that)
    pub id: BodyId,
    pub label: &'static str,
    pub kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub angle: f64,
    pub angular_velocity: f64,
    pub vertices: Vec<Vec2>,
    /// Set for circles; vertices then hold the polygon approximation
    pub circle_radius: Option<f64>,
    pub material: Material,
    /// Bodies sharing a negative group never collide with each other
    pub collision_group: i32,
    pub fill: Fill,
    pub visible: bool,
}

/// Sides used to approximate a circle of the given radius
fn circle_sides(radius: f64) -> usize {
    radius.clamp(10.0, 25.0).ceil() as usize
}

impl Body {
    fn with_vertices(label: &'static str, position: Vec2, vertices: Vec<Vec2>, material: Material) -> Self {
        Self {
            id: BodyId::default(),
            label,
            kind: BodyKind::Dynamic,
            position,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_velocity: 0.0,
            vertices,
            circle_radius: None,
            material,
            collision_group: 0,
            fill: Fill::Auto,
            visible: true,
        }
    }

    /// Dynamic circle centered at `center`
    pub fn circle(center: Vec2, radius: f64, material: Material) -> Self {
        let sides = circle_sides(radius);
        let theta = 2.0 * PI / sides as f64;
        let offset = theta * 0.5;
        let vertices = (0..sides)
            .map(|i| {
                let a = offset + i as f64 * theta;
                Vec2::new(center.x + radius * a.cos(), center.y + radius * a.sin())
            })
            .collect();

        let mut body = Self::with_vertices("Circle Body", center, vertices, material);
        body.circle_radius = Some(radius);
        body
    }

    /// Dynamic axis-aligned rectangle centered at `center`
    pub fn rectangle(center: Vec2, width: f64, height: f64, material: Material) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let vertices = vec![
            Vec2::new(center.x - hw, center.y - hh),
            Vec2::new(center.x + hw, center.y - hh),
            Vec2::new(center.x + hw, center.y + hh),
            Vec2::new(center.x - hw, center.y + hh),
        ];
        Self::with_vertices("Rectangle Body", center, vertices, material)
    }

    pub fn into_static(mut self) -> Self {
        self.kind = BodyKind::Static;
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn with_collision_group(mut self, group: i32) -> Self {
        self.collision_group = group;
        self
    }

    pub fn is_static(&self) -> bool {
        self.kind == BodyKind::Static
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        for v in self.vertices.iter_mut() {
            *v += delta;
        }
    }

    /// Move the body so its position is `position`; vertices follow.
    pub fn set_position(&mut self, position: Vec2) {
        let delta = position - self.position;
        for v in self.vertices.iter_mut() {
            *v += delta;
        }
        self.position = position;
    }

    /// Replace the shape. The new vertices are recentered on the current
    /// position, so callers pass them in world space around that point.
    pub fn set_vertices(&mut self, vertices: &[Vec2]) {
        let centre = centroid(vertices);
        self.vertices = vertices
            .iter()
            .map(|v| *v - centre + self.position)
            .collect();
        self.circle_radius = None;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_vertices(&self.vertices)
    }

    /// Point containment (circle radius test or convex polygon test)
    pub fn contains_point(&self, point: Vec2) -> bool {
        if let Some(r) = self.circle_radius {
            return (point - self.position).length_squared() <= r * r;
        }
        let n = self.vertices.len();
        if n < 3 || !self.bounds().contains(point) {
            return false;
        }
        let mut sign = 0.0f64;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = (b - a).cross(point - a);
            if c == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = c.signum();
            } else if c.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }
}

/// Area-weighted centroid; falls back to the vertex mean for
/// degenerate (zero-area) outlines.
fn centroid(vertices: &[Vec2]) -> Vec2 {
    if vertices.is_empty() {
        return Vec2::zero();
    }
    let n = vertices.len();
    let mut area = 0.0;
    let mut c = Vec2::zero();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.cross(b);
        area += cross;
        c += (a + b) * cross;
    }
    if area.abs() < 1e-9 {
        let sum = vertices.iter().fold(Vec2::zero(), |acc, v| acc + *v);
        return sum * (1.0 / n as f64);
    }
    c * (1.0 / (3.0 * area))
}
