use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::RenderConfig;

#[derive(Debug)]
struct Shared {
    config: Mutex<Arc<RenderConfig>>,
    pulse: AtomicBool,
}

/// Cloneable handle through which a UI layer reaches a running engine.
///
/// Configuration is replaced wholesale; the frame loop takes one `Arc` clone
/// at frame start, so a frame never observes a partially applied update.
/// The pulse flag is edge-triggered: one trigger is consumed by one frame.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    shared: Arc<Shared>,
}

impl EngineHandle {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                config: Mutex::new(Arc::new(config)),
                pulse: AtomicBool::new(false),
            }),
        }
    }

    /// Replaces the snapshot read by the next frame.
    pub fn update_config(&self, config: RenderConfig) {
        *self.lock() = Arc::new(config);
    }

    /// Returns the current snapshot.
    pub fn config(&self) -> Arc<RenderConfig> {
        Arc::clone(&self.lock())
    }

    /// Requests the one-shot pulse action on the next frame.
    ///
    /// Triggering again before a frame consumed the previous trigger has no
    /// additional effect.
    pub fn trigger_pulse(&self) {
        self.shared.pulse.store(true, Ordering::Release);
    }

    /// Consumes a pending pulse. Returns `true` at most once per trigger.
    pub(crate) fn take_pulse(&self) -> bool {
        self.shared.pulse.swap(false, Ordering::AcqRel)
    }

    fn lock(&self) -> MutexGuard<'_, Arc<RenderConfig>> {
        // Only a pointer is swapped under the lock; a poisoned guard still holds a whole value.
        self.shared.config.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
