//! Graphics context abstraction.
//!
//! `GraphicsContext` is the capability set the render engine needs from a
//! backend: shader compile/link, vertex buffers, uniforms, clears and triangle
//! draws, plus the backing/display sizes of the drawable surface. The call
//! shape is immediate-mode (bind, upload, draw) so the engine reads the same
//! whichever backend sits underneath.
//!
//! Backends:
//! - `device::WgpuContext` renders to a winit window through wgpu
//! - `HeadlessContext` records every call; used by tests and headless runs

mod context;
mod headless;
pub(crate) mod shader;

pub use context::{
    BufferId, GraphicsContext, PresentStatus, ProgramId, ShaderId, ShaderStage, Surface,
    UniformValue,
};
pub use headless::{GfxCommand, HeadlessContext, HeadlessSurface};
pub use shader::{FRAGMENT_SHADER, ShaderSources, VERTEX_SHADER};
