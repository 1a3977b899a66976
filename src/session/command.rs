//! The session's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a key, a pointer
//! gesture, a host button or a script, is a [`PlaneCommand`] passed to
//! [`PlaneSession::execute`](super::PlaneSession::execute).

use glam::DVec2;

/// Zoom direction of a held zoom key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Shrink the half-range.
    In,
    /// Grow the half-range.
    Out,
}

/// Rotation direction, as seen on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    /// Increase the phase.
    CounterClockwise,
    /// Decrease the phase.
    Clockwise,
}

/// A user-facing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneCommand {
    /// Animate back to the initial view.
    Home,
    /// Animate the sum of all points.
    Add,
    /// Animate the product of all points.
    Multiply,
    /// Rotate by one phase step.
    Rotate {
        /// Which way.
        direction: RotateDirection,
    },
    /// Drag the content by a pixel delta.
    Pan {
        /// Pointer movement in pixels.
        delta: DVec2,
    },
    /// Plot the (snapped) value under a click.
    PlacePoint {
        /// Click x in pixels.
        x: f64,
        /// Click y in pixels.
        y: f64,
    },
    /// Start or stop continuous zooming.
    Zoom {
        /// Which way.
        direction: ZoomDirection,
        /// `true` on key press, `false` on release.
        active: bool,
    },
    /// The rendering surface changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
}

impl PlaneCommand {
    /// Whether the command runs a multi-frame animation.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Home | Self::Add | Self::Multiply)
    }
}
