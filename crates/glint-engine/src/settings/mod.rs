//! Render settings and the shared snapshot cell.
//!
//! `RenderConfig` is the immutable value a control surface produces;
//! `EngineHandle` is how that value reaches a running engine.

mod error;
mod hex;
mod render_config;
mod store;

pub use error::ConfigError;
pub use hex::HexColor;
pub use render_config::{MIN_SPEED, RenderConfig, ShapeKind};
pub use store::EngineHandle;
