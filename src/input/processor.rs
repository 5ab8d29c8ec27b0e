//! Converts raw window events into manipulator calls.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! which button started the current drag, modifier keys) and the key-binding
//! map. It is the only thing that sits between raw window events and a
//! [`Manipulator`].

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::manipulator::Manipulator;
use crate::options::KeybindingOptions;

/// Drives a [`Manipulator`] from window events.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input.handle_event(event, &mut manipulator);
/// input.handle_key("KeyW", pressed, &mut manipulator);
///
/// // Once per frame:
/// manipulator.update(dt);
/// let look = manipulator.look_at();
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Last cursor position in window coordinates (y down).
    cursor: Vec2,
    /// Button that started the active drag, if any.
    drag_button: Option<MouseButton>,
    /// Whether the shift modifier is currently held.
    shift_pressed: bool,
    /// Key string → movement key mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: Vec2::ZERO,
            drag_button: None,
            shift_pressed: false,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current cursor position in window coordinates.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.drag_button.is_some()
    }

    /// Whether the shift modifier is held.
    #[must_use]
    pub fn shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Window position flipped into the manipulator's y-up pixel space.
    fn pointer(&self, manipulator: &Manipulator) -> (f32, f32) {
        let height = manipulator.config().view.viewport[1] as f32;
        (self.cursor.x, height - self.cursor.y)
    }

    /// Forward a key press or release. Returns `true` when the key string is
    /// bound to a movement key.
    pub fn handle_key(
        &self,
        key: &str,
        pressed: bool,
        manipulator: &mut Manipulator,
    ) -> bool {
        let Some(key) = self.key_bindings.lookup(key) else {
            return false;
        };
        if pressed {
            manipulator.key_down(key);
        } else {
            manipulator.key_up(key);
        }
        true
    }

    /// Process a raw input event.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        manipulator: &mut Manipulator,
    ) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                if self.drag_button.is_some() {
                    let (x, y) = self.pointer(manipulator);
                    manipulator.grab_update(x, y);
                }
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed, manipulator);
            }
            InputEvent::Scroll { delta } => {
                let (x, y) = self.pointer(manipulator);
                manipulator.scroll(x, y, delta);
            }
            InputEvent::ModifiersChanged { shift } => {
                self.shift_pressed = shift;
            }
            InputEvent::Resized { width, height } => {
                manipulator.set_viewport(width, height);
            }
        }
    }

    /// Left drags grab; right/middle drags or shift held strafe. A second
    /// button pressed mid-drag is ignored.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        manipulator: &mut Manipulator,
    ) {
        if pressed {
            if self.drag_button.is_some() {
                return;
            }
            let strafe = self.shift_pressed || button != MouseButton::Left;
            let (x, y) = self.pointer(manipulator);
            manipulator.grab_begin(x, y, strafe);
            self.drag_button = Some(button);
        } else if self.drag_button == Some(button) {
            manipulator.grab_end();
            self.drag_button = None;
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::builder::Builder;
    use crate::manipulator::Key;
    use crate::options::Mode;

    fn orbit() -> Manipulator {
        Builder::new()
            .viewport(800, 600)
            .orbit_home_position(Vec3::new(0.0, 0.0, 5.0))
            .ground_plane([0.0, 1.0, 0.0, 0.0])
            .build(Mode::Orbit)
    }

    fn drag(
        input: &mut InputProcessor,
        m: &mut Manipulator,
        button: MouseButton,
        from: Vec2,
        to: Vec2,
    ) {
        input.handle_event(InputEvent::CursorMoved { x: from.x, y: from.y }, m);
        input.handle_event(InputEvent::MouseButton { button, pressed: true }, m);
        input.handle_event(InputEvent::CursorMoved { x: to.x, y: to.y }, m);
        input.handle_event(InputEvent::MouseButton { button, pressed: false }, m);
    }

    #[test]
    fn left_drag_rotates() {
        let mut m = orbit();
        let mut input = InputProcessor::new();
        drag(
            &mut input,
            &mut m,
            MouseButton::Left,
            Vec2::new(400.0, 300.0),
            Vec2::new(300.0, 300.0),
        );
        let look = m.look_at();
        assert!(look.eye.x > 0.0);
        assert!(look.target.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(!input.dragging());
        assert!(!m.is_grabbing());
    }

    #[test]
    fn shift_drag_pans_with_window_y_flipped() {
        let mut m = orbit();
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::ModifiersChanged { shift: true }, &mut m);
        // Moving the cursor down the window drags the scene down, lifting
        // the camera.
        drag(
            &mut input,
            &mut m,
            MouseButton::Left,
            Vec2::new(400.0, 300.0),
            Vec2::new(400.0, 350.0),
        );
        let look = m.look_at();
        assert!(look.target.y > 0.0);
        assert!(look.target.x.abs() < 1e-4);
    }

    #[test]
    fn right_drag_strafes() {
        let mut m = orbit();
        let mut input = InputProcessor::new();
        drag(
            &mut input,
            &mut m,
            MouseButton::Right,
            Vec2::new(400.0, 300.0),
            Vec2::new(450.0, 300.0),
        );
        assert!(m.look_at().target.x < 0.0);
    }

    #[test]
    fn wheel_dollies() {
        let mut m = orbit();
        let mut input = InputProcessor::new();
        input.handle_event(InputEvent::Scroll { delta: -10.0 }, &mut m);
        let look = m.look_at();
        assert!((look.eye - look.target).length() < 5.0);
    }

    #[test]
    fn second_button_does_not_restart_drag() {
        let mut m = orbit();
        let mut input = InputProcessor::new();
        let press = |button, pressed| InputEvent::MouseButton { button, pressed };
        input.handle_event(press(MouseButton::Left, true), &mut m);
        input.handle_event(press(MouseButton::Right, true), &mut m);
        input.handle_event(press(MouseButton::Right, false), &mut m);
        assert!(m.is_grabbing());
        input.handle_event(press(MouseButton::Left, false), &mut m);
        assert!(!m.is_grabbing());
    }

    #[test]
    fn resize_updates_viewport() {
        let mut m = orbit();
        let mut input = InputProcessor::new();
        input.handle_event(
            InputEvent::Resized {
                width: 1024,
                height: 768,
            },
            &mut m,
        );
        assert_eq!(m.config().view.viewport, [1024, 768]);
    }

    #[test]
    fn bound_keys_drive_free_flight() {
        let mut m = Builder::new()
            .viewport(800, 600)
            .flight_move_damping(0.0)
            .build(Mode::FreeFlight);
        let input = InputProcessor::new();
        assert!(input.handle_key("KeyW", true, &mut m));
        assert!(!input.handle_key("KeyZ", true, &mut m));
        m.update(1.0);
        assert!(m.look_at().eye.z < 0.0);

        assert!(input.handle_key("KeyW", false, &mut m));
        let stopped = m.look_at().eye;
        m.update(1.0);
        assert_eq!(m.look_at().eye, stopped);
    }

    #[test]
    fn custom_bindings_are_honored() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings.bindings.insert(Key::Up, "Space".into());
        let input = InputProcessor::with_key_bindings(bindings);
        assert_eq!(input.key_bindings().lookup("Space"), Some(Key::Up));
        assert_eq!(input.key_bindings().lookup("KeyE"), None);
    }
}
