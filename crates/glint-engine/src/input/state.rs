use super::types::{InputEvent, Modifiers};

/// Input state the runtime carries between window events.
///
/// winit reports modifiers separately from key events, so key events are
/// stamped with the last modifier state seen here.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Key { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            // Releases that happen while unfocused are never delivered.
            InputEvent::Focused(false) => {
                self.modifiers = Modifiers::default();
            }

            InputEvent::Focused(true) | InputEvent::PointerMoved(_) | InputEvent::PointerLeft => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, PointerMoveEvent};

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Default::default()
        }
    }

    #[test]
    fn tracks_modifier_changes() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::ModifiersChanged(shift()));
        assert_eq!(s.modifiers, shift());
        s.apply_event(&InputEvent::ModifiersChanged(Modifiers::default()));
        assert_eq!(s.modifiers, Modifiers::default());
    }

    #[test]
    fn key_event_carries_modifiers() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Key {
            key: Key::A,
            state: KeyState::Pressed,
            modifiers: shift(),
            repeat: false,
        });
        assert_eq!(s.modifiers, shift());
    }

    #[test]
    fn focus_loss_clears_modifiers() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::ModifiersChanged(shift()));
        s.apply_event(&InputEvent::Focused(false));
        assert_eq!(s.modifiers, Modifiers::default());
    }

    #[test]
    fn pointer_events_leave_modifiers_alone() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::ModifiersChanged(shift()));
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent {
            x: 3.0,
            y: 4.0,
        }));
        s.apply_event(&InputEvent::PointerLeft);
        s.apply_event(&InputEvent::Focused(true));
        assert_eq!(s.modifiers, shift());
    }
}
