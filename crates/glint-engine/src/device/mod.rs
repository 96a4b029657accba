//! wgpu device, surface and the window-backed graphics context.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and presenting them
//! - implementing `GraphicsContext` on top of the above (`WgpuContext`)

mod backend;
mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use backend::{WgpuContext, WgpuSurface};
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
