//! The coordinate frame: view parameters and pixel ↔ plane conversion.
//!
//! [`CoordinateFrame`] owns the [`ViewState`] and is the only place it
//! changes. [`grid`] derives drawable line geometry from a frame.

/// Pixel ↔ plane conversion, snapping and view setters.
pub mod coordinate_frame;
/// Grid, axis and tick geometry.
pub mod grid;
/// View parameters and half-range limits.
pub mod view_state;
/// Rendering surface dimensions.
pub mod viewport;

pub use coordinate_frame::CoordinateFrame;
pub use grid::{grid_lines, LineKind, LineSegment};
pub use view_state::{RangeLimits, ViewState};
pub use viewport::Viewport;
