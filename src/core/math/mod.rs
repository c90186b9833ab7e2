mod bounds;
mod vec2;

pub use bounds::Bounds;
pub use vec2::Vec2;
