use super::{AnimationHandle, FrameScheduler};

/// Manually advanced frame clock.
///
/// Holds at most one pending callback. The host pops it with [`take_due`] and
/// passes it to the engine; headless runs and tests drive frames this way.
///
/// [`take_due`]: FrameQueue::take_due
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Option<AnimationHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently scheduled callback, if any.
    #[inline]
    pub fn pending(&self) -> Option<AnimationHandle> {
        self.pending
    }

    /// Fires the scheduled callback: removes and returns its handle.
    pub fn take_due(&mut self) -> Option<AnimationHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> AnimationHandle {
        self.next_id = self.next_id.wrapping_add(1);
        let handle = AnimationHandle::new(self.next_id);
        if let Some(replaced) = self.pending.replace(handle) {
            log::trace!("frame {} superseded by {}", replaced.id(), handle.id());
        }
        handle
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }
}
