//! Render side of the scene
//!
//! The host draws; this module keeps the surface geometry and packs visible
//! bodies into a flat buffer the host reads each frame.

mod extract;
mod surface;

pub use extract::{extract_bodies, RECORD_HEADER_LEN, SHAPE_CIRCLE, SHAPE_POLYGON};
pub use surface::RenderSurface;
