use crate::gfx::PresentStatus;
use crate::time::FrameTime;

/// What one executed frame did.
#[derive(Debug, Copy, Clone)]
pub struct FrameStats {
    pub time: FrameTime,
    pub draw_calls: u32,
    pub vertices: u32,
    /// The backing store was resized at the start of this frame.
    pub resized: bool,
    /// This frame consumed a pulse trigger.
    pub pulsed: bool,
    pub present: PresentStatus,
}
