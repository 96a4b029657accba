//! Frame timing.
//!
//! One `FrameClock` lives inside each `RenderEngine`; it is ticked once per
//! executed frame and stamps the resulting `FrameStats`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
