use std::fmt;

/// Keyboard key identifier.
///
/// Function keys are numbered 1..=12. Everything else the runtime has no use
/// for arrives as `Key::Unknown` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Function(u8),
    Unknown(u32),
}

impl Key {
    pub const F1: Key = Key::Function(1);
    pub const F2: Key = Key::Function(2);

    /// Function key `n`, if `n` is in 1..=12.
    pub fn function(n: u8) -> Option<Key> {
        (1..=12).contains(&n).then_some(Key::Function(n))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier. Extra buttons keep their platform index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Stable platform code when available (e.g. scancode).
        code: u32,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    MouseInput(MouseButtonEvent),

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Escape => f.write_str("Escape"),
            Key::Function(n) => write!(f, "F{n}"),
            Key::Unknown(code) => write!(f, "key {code:#x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_keys_are_bounded() {
        assert_eq!(Key::function(1), Some(Key::F1));
        assert_eq!(Key::function(12), Some(Key::Function(12)));
        assert_eq!(Key::function(0), None);
        assert_eq!(Key::function(13), None);
    }

    #[test]
    fn keys_display_by_name() {
        assert_eq!(Key::F2.to_string(), "F2");
        assert_eq!(Key::Escape.to_string(), "Escape");
        assert_eq!(Key::Unknown(31).to_string(), "key 0x1f");
    }
}
