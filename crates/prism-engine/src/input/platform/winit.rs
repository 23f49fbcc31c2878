use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonEvent, MouseButtonState};

impl From<ElementState> for KeyState {
    fn from(s: ElementState) -> Self {
        match s {
            ElementState::Pressed => KeyState::Pressed,
            ElementState::Released => KeyState::Released,
        }
    }
}

impl From<ElementState> for MouseButtonState {
    fn from(s: ElementState) -> Self {
        match s {
            ElementState::Pressed => MouseButtonState::Pressed,
            ElementState::Released => MouseButtonState::Released,
        }
    }
}

impl From<WinitMouseButton> for MouseButton {
    fn from(b: WinitMouseButton) -> Self {
        match b {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            WinitMouseButton::Back => MouseButton::Other(3),
            WinitMouseButton::Forward => MouseButton::Other(4),
            WinitMouseButton::Other(v) => MouseButton::Other(v),
        }
    }
}

/// Turns a winit window event into an `InputEvent`, or `None` when the input
/// layer does not track it.
pub(crate) fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    let ev = match event {
        WindowEvent::Focused(f) => InputEvent::Focused(*f),

        WindowEvent::MouseInput { state, button, .. } => {
            InputEvent::MouseInput(MouseButtonEvent {
                button: (*button).into(),
                state: (*state).into(),
            })
        }

        WindowEvent::KeyboardInput { event, .. } => {
            let (key, code) = map_physical_key(event.physical_key);
            InputEvent::Key {
                key,
                state: event.state.into(),
                code,
                repeat: event.repeat,
            }
        }

        _ => return None,
    };

    Some(ev)
}

const FUNCTION_KEYS: [KeyCode; 12] = [
    KeyCode::F1, KeyCode::F2, KeyCode::F3, KeyCode::F4,
    KeyCode::F5, KeyCode::F6, KeyCode::F7, KeyCode::F8,
    KeyCode::F9, KeyCode::F10, KeyCode::F11, KeyCode::F12,
];

fn map_physical_key(pk: PhysicalKey) -> (Key, u32) {
    let PhysicalKey::Code(code) = pk else {
        // Native codes have no portable integer form.
        return (Key::Unknown(0), 0);
    };

    let raw = code as u32;

    if code == KeyCode::Escape {
        return (Key::Escape, raw);
    }

    let key = FUNCTION_KEYS
        .iter()
        .position(|&f| f == code)
        .and_then(|i| Key::function(i as u8 + 1))
        .unwrap_or(Key::Unknown(raw));

    (key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_escape_and_function_keys() {
        assert_eq!(map_physical_key(PhysicalKey::Code(KeyCode::Escape)).0, Key::Escape);
        assert_eq!(map_physical_key(PhysicalKey::Code(KeyCode::F1)).0, Key::F1);
        assert_eq!(map_physical_key(PhysicalKey::Code(KeyCode::F2)).0, Key::F2);
        assert_eq!(
            map_physical_key(PhysicalKey::Code(KeyCode::F12)).0,
            Key::Function(12)
        );
    }

    #[test]
    fn other_keys_keep_their_code() {
        let (key, code) = map_physical_key(PhysicalKey::Code(KeyCode::KeyA));
        assert_eq!(key, Key::Unknown(code));
    }

    #[test]
    fn extra_mouse_buttons_are_indexed() {
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other(3));
        assert_eq!(MouseButton::from(WinitMouseButton::Other(7)), MouseButton::Other(7));
    }
}
