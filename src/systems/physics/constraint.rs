use super::body::BodyId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ConstraintId(pub u32);

/// Distance link between two bodies
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub id: ConstraintId,
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Rest length; taken from the bodies' distance when created
    pub length: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub visible: bool,
}

impl Constraint {
    pub fn new(body_a: BodyId, body_b: BodyId, length: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            id: ConstraintId::default(),
            body_a,
            body_b,
            length,
            stiffness,
            damping,
            visible: true,
        }
    }

    pub fn links(&self, body: BodyId) -> bool {
        self.body_a == body || self.body_b == body
    }
}
