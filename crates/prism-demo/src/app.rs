use prism_engine::core::{App, AppControl, FrameCtx};
use prism_engine::input::{InputFrame, InputState, Key, MouseButton};
use prism_engine::paint::Color;
use prism_engine::render::PrismRenderer;
use prism_engine::scene::{spin_model, Camera, Transforms};
use prism_engine::shader::ShaderSources;
use winit::dpi::LogicalSize;

/// Clear color while no mouse button is held.
pub const BACKGROUND: Color = Color::gray(0.1);

/// Window sizes bound to function keys.
pub const PRESETS: [(Key, f64, f64); 2] = [
    (Key::F1, 1136.0, 630.0),
    (Key::F2, 1280.0, 720.0),
];

/// Something the input asked for this frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    Quit,
    Resize(LogicalSize<f64>),
}

/// Maps this frame's key transitions to actions, in a fixed order.
pub fn actions(frame: &InputFrame) -> Vec<Action> {
    if frame.key_pressed(Key::Escape) {
        return vec![Action::Quit];
    }

    PRESETS
        .iter()
        .filter(|(key, _, _)| frame.key_pressed(*key))
        .map(|&(_, w, h)| Action::Resize(LogicalSize::new(w, h)))
        .collect()
}

/// Console notices for F1 transitions this frame.
pub fn f1_notices(frame: &InputFrame) -> Vec<&'static str> {
    let mut out = Vec::new();
    if frame.key_pressed(Key::F1) {
        out.push("F1");
    }
    if frame.key_released(Key::F1) {
        out.push("F1 release");
    }
    out
}

/// Clear color for the held mouse buttons: left, then right, then middle wins.
pub fn background_for(input: &InputState) -> Color {
    if input.button_down(MouseButton::Left) {
        Color::RED
    } else if input.button_down(MouseButton::Right) {
        Color::GREEN
    } else if input.button_down(MouseButton::Middle) {
        Color::BLUE
    } else {
        BACKGROUND
    }
}

pub struct DemoApp {
    renderer: PrismRenderer,
    camera: Camera,
    frames: u64,
}

impl DemoApp {
    pub fn new(sources: ShaderSources) -> Self {
        Self {
            renderer: PrismRenderer::new(sources),
            camera: Camera::default(),
            frames: 0,
        }
    }
}

impl App for DemoApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for notice in f1_notices(ctx.input_frame) {
            log::info!("{notice}");
        }

        for action in actions(ctx.input_frame) {
            match action {
                Action::Quit => {
                    log::info!("escape pressed, quitting");
                    return AppControl::Exit;
                }
                Action::Resize(size) => {
                    log::info!("snapping window to {}x{}", size.width, size.height);
                    ctx.runtime.request_window_size(size);
                }
            }
        }

        let clear = background_for(ctx.input);
        let transforms = Transforms::new(&self.camera, spin_model(ctx.time.total));

        self.frames += 1;

        let renderer = &mut self.renderer;
        ctx.render(clear, |rctx, target| renderer.render(rctx, target, &transforms))
    }

    fn on_exit(&mut self) {
        log::info!("rendered {} frames", self.frames);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use prism_engine::input::{InputEvent, KeyState, MouseButtonEvent, MouseButtonState};

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key) {
        state.apply_event(
            frame,
            InputEvent::Key { key, state: KeyState::Pressed, code: 0, repeat: false },
        );
    }

    fn hold(state: &mut InputState, frame: &mut InputFrame, button: MouseButton) {
        state.apply_event(
            frame,
            InputEvent::MouseInput(MouseButtonEvent { button, state: MouseButtonState::Pressed }),
        );
    }

    #[test]
    fn function_keys_snap_to_presets() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::F1);
        assert_eq!(actions(&frame), vec![Action::Resize(LogicalSize::new(1136.0, 630.0))]);

        frame.clear();
        press(&mut state, &mut frame, Key::F2);
        assert_eq!(actions(&frame), vec![Action::Resize(LogicalSize::new(1280.0, 720.0))]);
    }

    #[test]
    fn escape_wins_over_everything() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::F1);
        press(&mut state, &mut frame, Key::Escape);
        assert_eq!(actions(&frame), vec![Action::Quit]);
    }

    #[test]
    fn held_key_does_not_repeat_resize() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::F2);
        frame.clear();
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::F2, state: KeyState::Pressed, code: 0, repeat: true },
        );
        assert!(actions(&frame).is_empty());
    }

    #[test]
    fn f1_press_and_release_are_both_reported() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        press(&mut state, &mut frame, Key::F1);
        assert_eq!(f1_notices(&frame), vec!["F1"]);

        frame.clear();
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::F1, state: KeyState::Released, code: 0, repeat: false },
        );
        assert_eq!(f1_notices(&frame), vec!["F1 release"]);

        frame.clear();
        assert!(f1_notices(&frame).is_empty());
    }

    #[test]
    fn background_follows_button_precedence() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert_eq!(background_for(&state), BACKGROUND);

        hold(&mut state, &mut frame, MouseButton::Middle);
        assert_eq!(background_for(&state), Color::BLUE);

        hold(&mut state, &mut frame, MouseButton::Right);
        assert_eq!(background_for(&state), Color::GREEN);

        hold(&mut state, &mut frame, MouseButton::Left);
        assert_eq!(background_for(&state), Color::RED);
    }

    #[test]
    fn other_buttons_keep_background() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        hold(&mut state, &mut frame, MouseButton::Other(8));
        assert_eq!(background_for(&state), BACKGROUND);
    }
}
