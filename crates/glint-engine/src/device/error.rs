use crate::gfx::PresentStatus;

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); the context cannot continue.
    Fatal,
}

impl SurfaceErrorAction {
    pub fn present_status(self) -> PresentStatus {
        match self {
            SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                PresentStatus::Skipped
            }
            SurfaceErrorAction::Fatal => PresentStatus::Lost,
        }
    }
}
