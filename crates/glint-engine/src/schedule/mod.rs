//! Frame scheduling.
//!
//! The engine never loops on its own. At the end of each frame it asks a
//! `FrameScheduler` for the next callback and stores the returned
//! `AnimationHandle`; the host calls `RenderEngine::run_frame` with that handle
//! when the frame is due. Cancelling the handle stops the loop.

mod queue;

pub use queue::FrameQueue;

/// Opaque token for one scheduled frame callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AnimationHandle(u64);

impl AnimationHandle {
    #[inline]
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Host primitive that runs a callback once before the next display refresh.
pub trait FrameScheduler {
    /// Schedules the next frame and returns its handle.
    fn request_frame(&mut self) -> AnimationHandle;

    /// Cancels a scheduled frame. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: AnimationHandle);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &mut T {
    fn request_frame(&mut self) -> AnimationHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        (**self).cancel_frame(handle)
    }
}
