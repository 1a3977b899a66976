//! Input handling: event types, the click-vs-drag state machine, and the
//! input processor that converts raw window events into session commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Cursor tracking and click detection.
pub(crate) mod mouse;
/// Converts raw events into session commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
