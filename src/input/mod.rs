//! Input handling: event types and the input processor that converts raw
//! window events into manipulator calls.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into manipulator calls.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::InputProcessor;
