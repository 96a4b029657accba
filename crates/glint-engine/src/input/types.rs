use std::fmt;

/// Keyboard key identifier.
///
/// Only keys a control surface plausibly binds are named; everything else
/// maps to `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// `+`, from either the main row (`=` key) or the keypad.
    Plus,
    /// `-`, from either the main row or the keypad.
    Minus,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Modifier keys state.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer move event in physical pixels of the surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl InputEvent {
    /// The key of a fresh (non-repeat) press, if this is one.
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat: false,
                ..
            } => Some(*key),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat,
        }
    }

    #[test]
    fn pressed_key_ignores_release_and_repeat() {
        assert_eq!(
            key(Key::C, KeyState::Pressed, false).pressed_key(),
            Some(Key::C)
        );
        assert_eq!(key(Key::C, KeyState::Released, false).pressed_key(), None);
        assert_eq!(key(Key::C, KeyState::Pressed, true).pressed_key(), None);
        assert_eq!(InputEvent::PointerLeft.pressed_key(), None);
    }
}
