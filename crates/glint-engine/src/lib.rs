//! Glint engine crate.
//!
//! A per-frame renderer that draws a configurable number of solid-color
//! rectangles at random positions onto a surface, behind an immediate-mode
//! graphics context abstraction with a wgpu backend and a recording
//! headless backend.

pub mod coords;
pub mod core;
pub mod device;
pub mod engine;
pub mod gfx;
pub mod input;
pub mod logging;
pub mod paint;
pub mod schedule;
pub mod settings;
pub mod time;
pub mod window;
