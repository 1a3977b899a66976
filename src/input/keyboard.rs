use serde::{Deserialize, Serialize};

use crate::session::{PlaneCommand, RotateDirection, ZoomDirection};

/// Session actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// zoom_in = "ArrowUp"
/// multiply = "KeyX"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Zoom in while held.
    ZoomIn,
    /// Zoom out while held.
    ZoomOut,
    /// Animate back to the initial view.
    Home,
    /// Sum all points.
    Add,
    /// Multiply all points.
    Multiply,
    /// Rotate counter-clockwise by one step.
    RotateCounterClockwise,
    /// Rotate clockwise by one step.
    RotateClockwise,
}

impl KeyAction {
    /// Command for a press (`pressed == true`) or release of the bound key.
    ///
    /// Only the zoom actions react to releases.
    #[must_use]
    pub fn command(self, pressed: bool) -> Option<PlaneCommand> {
        let zoom = |direction| PlaneCommand::Zoom {
            direction,
            active: pressed,
        };
        match self {
            Self::ZoomIn => Some(zoom(ZoomDirection::In)),
            Self::ZoomOut => Some(zoom(ZoomDirection::Out)),
            _ if !pressed => None,
            Self::Home => Some(PlaneCommand::Home),
            Self::Add => Some(PlaneCommand::Add),
            Self::Multiply => Some(PlaneCommand::Multiply),
            Self::RotateCounterClockwise => Some(PlaneCommand::Rotate {
                direction: RotateDirection::CounterClockwise,
            }),
            Self::RotateClockwise => Some(PlaneCommand::Rotate {
                direction: RotateDirection::Clockwise,
            }),
        }
    }
}
