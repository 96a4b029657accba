use winit::window::Window;

use crate::schedule::{AnimationHandle, FrameQueue, FrameScheduler};

/// Frame scheduler backed by winit redraw requests.
///
/// `request_frame` asks the window for a redraw; the runtime pops the due
/// handle on `RedrawRequested` and hands it to the engine.
pub struct WindowScheduler<'w> {
    window: &'w Window,
    queue: FrameQueue,
}

impl<'w> WindowScheduler<'w> {
    pub fn new(window: &'w Window) -> Self {
        Self {
            window,
            queue: FrameQueue::new(),
        }
    }

    /// Fires the scheduled frame, if one is pending.
    pub fn take_due(&mut self) -> Option<AnimationHandle> {
        self.queue.take_due()
    }
}

impl FrameScheduler for WindowScheduler<'_> {
    fn request_frame(&mut self) -> AnimationHandle {
        let handle = self.queue.request_frame();
        self.window.request_redraw();
        handle
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        self.queue.cancel_frame(handle);
    }
}
