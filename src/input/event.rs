/// Platform-agnostic window input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns them into [`Manipulator`](crate::manipulator::Manipulator) calls.
/// Positions are window coordinates: physical pixels with the origin at the
/// top-left corner.
///
/// # Example
///
/// ```
/// use camutils::input::{InputEvent, InputProcessor};
/// use camutils::{Builder, Mode};
///
/// let mut manipulator = Builder::new().viewport(800, 600).build(Mode::Orbit);
/// let mut input = InputProcessor::new();
/// input.handle_event(
///     InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     &mut manipulator,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels, growing downward.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel at the current cursor position.
    Scroll {
        /// Wheel steps (negative = zoom in / slow down).
        delta: f32,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the shift key is held.
        shift: bool,
    },
    /// The render surface changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
