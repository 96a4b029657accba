//! Coordinate and geometry types.
//!
//! Canonical CPU space:
//! - Physical pixels of the drawable surface's backing store
//! - Origin top-left
//! - +X right, +Y down
//!
//! The vertex shader converts to clip space using the `resolution` uniform.

mod rect;
mod size;
mod sizing;
mod vec2;

pub use rect::{Rect, VERTICES_PER_RECT};
pub use size::SurfaceSize;
pub use sizing::plan_resize;
pub use vec2::Vec2;
