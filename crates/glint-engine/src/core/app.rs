use crate::engine::FrameStats;
use crate::input::InputEvent;
use crate::settings::EngineHandle;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the host of the engine.
///
/// The app never touches the graphics context; it edits configuration and
/// triggers pulses through the engine's [`EngineHandle`].
pub trait App {
    /// Called once after the engine initialized on the window.
    fn on_start(&mut self, handle: &EngineHandle) {
        let _ = handle;
    }

    /// Called for translated input events.
    fn on_input(&mut self, event: &InputEvent, handle: &EngineHandle) -> AppControl {
        let _ = (event, handle);
        AppControl::Continue
    }

    /// Called after every executed frame.
    fn on_frame(&mut self, stats: &FrameStats) -> AppControl;
}
