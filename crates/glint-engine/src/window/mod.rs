//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and hosts a `RenderEngine` on it.

mod runtime;
mod scheduler;

pub use runtime::{Runtime, RuntimeConfig};
pub use scheduler::WindowScheduler;
