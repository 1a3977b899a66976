//! Converts raw platform events into session commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! click-vs-drag timing) and the key-binding map. It is the only thing
//! that sits between raw window events and
//! [`PlaneSession::execute`](crate::session::PlaneSession::execute).

use glam::DVec2;
use web_time::{Duration, Instant};

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::{ClickResult, PointerState};
use crate::options::{KeybindingOptions, Options};
use crate::session::PlaneCommand;

/// Converts raw window events into [`PlaneCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input.handle_event(event) {
///     session.execute(cmd, &mut host)?;
/// }
///
/// if let Some(cmd) = input.handle_key_press("ArrowUp") {
///     session.execute(cmd, &mut host)?;
/// }
/// ```
pub struct InputProcessor {
    /// Cursor tracking and click detection.
    pointer: PointerState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
    /// Real mode: clicks must land near the line.
    real_mode: bool,
    /// Real mode: maximum vertical distance of a click from the line.
    line_tolerance: f64,
    /// Current surface height, for locating the real line.
    height: f64,
}

impl InputProcessor {
    /// Processor configured from session options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            pointer: PointerState::new(Duration::from_millis(
                options.input.click_window_ms,
            )),
            key_bindings: options.keybindings.clone(),
            real_mode: options.plane.real_mode,
            line_tolerance: options.input.real_line_click_tolerance,
            height: f64::from(options.plane.height.max(1)),
        }
    }

    /// Current cursor position in pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> DVec2 {
        self.pointer.position
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.pointer.is_pressed()
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Action bound to a key string, if any.
    #[must_use]
    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        self.key_bindings.lookup(key)
    }

    /// Command for a key press, if the key is bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<PlaneCommand> {
        self.action_for(key)?.command(true)
    }

    /// Command for a key release; only held actions (zoom) produce one.
    #[must_use]
    pub fn handle_key_release(&self, key: &str) -> Option<PlaneCommand> {
        self.action_for(key)?.command(false)
    }

    /// Process a raw input event at the current time.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PlaneCommand> {
        self.handle_event_at(event, Instant::now())
    }

    /// Process a raw input event that happened at `now`.
    pub fn handle_event_at(
        &mut self,
        event: InputEvent,
        now: Instant,
    ) -> Option<PlaneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let delta = self.pointer.handle_position(DVec2::new(x, y));
                (self.pointer.is_pressed() && delta != DVec2::ZERO)
                    .then_some(PlaneCommand::Pan { delta })
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != MouseButton::Left {
                    return None;
                }
                if pressed {
                    self.pointer.handle_press(now);
                    return None;
                }
                match self.pointer.handle_release(now) {
                    ClickResult::Click(position) => self.place_at(position),
                    ClickResult::NoAction => None,
                }
            }
            InputEvent::Resized { width, height } => {
                self.height = f64::from(height.max(1));
                Some(PlaneCommand::Resize { width, height })
            }
        }
    }

    /// Point placement for a click; on the real line only clicks near the
    /// line count, projected onto it.
    fn place_at(&self, position: DVec2) -> Option<PlaneCommand> {
        if !self.real_mode {
            return Some(PlaneCommand::PlacePoint {
                x: position.x,
                y: position.y,
            });
        }
        let line_y = self.height / 2.0;
        ((position.y - line_y).abs() <= self.line_tolerance).then_some(
            PlaneCommand::PlacePoint {
                x: position.x,
                y: line_y,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{RotateDirection, ZoomDirection};

    fn click(input: &mut InputProcessor, x: f64, y: f64, held_ms: u64) -> Option<PlaneCommand> {
        let t0 = Instant::now();
        let _ = input.handle_event_at(InputEvent::CursorMoved { x, y }, t0);
        let _ = input.handle_event_at(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            t0,
        );
        input.handle_event_at(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: false,
            },
            t0 + Duration::from_millis(held_ms),
        )
    }

    #[test]
    fn quick_release_places_a_point() {
        let mut input = InputProcessor::new(&Options::default());
        assert_eq!(
            click(&mut input, 120.0, 300.0, 40),
            Some(PlaneCommand::PlacePoint { x: 120.0, y: 300.0 })
        );
        assert_eq!(click(&mut input, 120.0, 300.0, 400), None);
    }

    #[test]
    fn drag_pans() {
        let mut input = InputProcessor::new(&Options::default());
        let t0 = Instant::now();
        let _ = input.handle_event_at(InputEvent::CursorMoved { x: 10.0, y: 10.0 }, t0);
        assert_eq!(
            input.handle_event_at(InputEvent::CursorMoved { x: 20.0, y: 10.0 }, t0),
            None
        );
        let _ = input.handle_event_at(
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed: true,
            },
            t0,
        );
        assert!(input.mouse_pressed());
        assert_eq!(
            input.handle_event_at(InputEvent::CursorMoved { x: 25.0, y: 7.0 }, t0),
            Some(PlaneCommand::Pan {
                delta: DVec2::new(5.0, -3.0)
            })
        );
        assert_eq!(input.mouse_pos(), DVec2::new(25.0, 7.0));
    }

    #[test]
    fn real_line_clicks_must_hit_the_line() {
        let mut options = Options::default();
        options.plane.real_mode = true;
        let mut input = InputProcessor::new(&options);
        assert_eq!(
            click(&mut input, 300.0, 402.0, 20),
            Some(PlaneCommand::PlacePoint { x: 300.0, y: 400.0 })
        );
        assert_eq!(click(&mut input, 300.0, 410.0, 20), None);
        let _ = input.handle_event(InputEvent::Resized { width: 800, height: 600 });
        assert_eq!(
            click(&mut input, 300.0, 299.0, 20),
            Some(PlaneCommand::PlacePoint { x: 300.0, y: 300.0 })
        );
    }

    #[test]
    fn keys_map_through_bindings() {
        let input = InputProcessor::new(&Options::default());
        assert_eq!(input.handle_key_press("KeyX"), Some(PlaneCommand::Multiply));
        assert_eq!(input.handle_key_release("KeyX"), None);
        assert_eq!(
            input.handle_key_press("BracketLeft"),
            Some(PlaneCommand::Rotate {
                direction: RotateDirection::CounterClockwise
            })
        );
        assert_eq!(
            input.handle_key_release("ArrowUp"),
            Some(PlaneCommand::Zoom {
                direction: ZoomDirection::In,
                active: false
            })
        );
        assert_eq!(input.handle_key_press("KeyQ"), None);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut input = InputProcessor::new(&Options::default());
        let pressed = InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        };
        assert_eq!(input.handle_event(pressed), None);
        assert!(!input.mouse_pressed());
    }
}
