use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonEvent,
    MouseButtonState,
};

/// Current input state for the window.
///
/// Holds "is down" information for keys and mouse buttons.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss mid-press never delivers the release.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::Key { key, state, repeat, .. } => match state {
                KeyState::Pressed => {
                    let inserted = self.keys_down.insert(*key);
                    if inserted && !*repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    let removed = self.keys_down.remove(key);
                    if removed {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::MouseInput(MouseButtonEvent { button, state }) => {
                match state {
                    MouseButtonState::Pressed => {
                        let inserted = self.buttons_down.insert(*button);
                        if inserted {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        let removed = self.buttons_down.remove(button);
                        if removed {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    /// Helper queries
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, code: 0, repeat }
    }

    fn button(button: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::MouseInput(MouseButtonEvent { button, state })
    }

    #[test]
    fn key_press_is_recorded_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::F1, KeyState::Pressed, false));
        assert!(frame.key_pressed(Key::F1));
        assert!(state.key_down(Key::F1));

        frame.clear();
        state.apply_event(&mut frame, key(Key::F1, KeyState::Pressed, false));
        assert!(!frame.key_pressed(Key::F1));
    }

    #[test]
    fn key_repeat_is_not_a_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::F2, KeyState::Pressed, true));
        assert!(!frame.key_pressed(Key::F2));
        assert!(state.key_down(Key::F2));
        assert_eq!(frame.events.len(), 1);
    }

    #[test]
    fn key_release_requires_prior_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released, false));
        assert!(!frame.key_released(Key::Escape));

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released, false));
        assert!(frame.key_released(Key::Escape));
        assert!(!state.key_down(Key::Escape));
    }

    #[test]
    fn button_press_and_release_are_tracked() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButton::Right, MouseButtonState::Pressed));
        assert!(state.button_down(MouseButton::Right));
        assert!(frame.buttons_pressed.contains(&MouseButton::Right));

        state.apply_event(&mut frame, button(MouseButton::Right, MouseButtonState::Released));
        assert!(!state.button_down(MouseButton::Right));
        assert!(frame.buttons_released.contains(&MouseButton::Right));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Function(5), KeyState::Pressed, false));
        state.apply_event(&mut frame, button(MouseButton::Left, MouseButtonState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
        assert!(state.buttons_down.is_empty());
    }

    #[test]
    fn held_button_survives_duplicate_press() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, button(MouseButton::Middle, MouseButtonState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, button(MouseButton::Middle, MouseButtonState::Pressed));

        assert!(state.button_down(MouseButton::Middle));
        assert!(frame.buttons_pressed.is_empty());
    }
}
