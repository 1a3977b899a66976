//! Point labels: text measurement, rectangles and the per-frame layout.

/// Label selection with frame-to-frame continuity.
pub mod layout;
/// Text measurement collaborator.
pub mod measure;
/// Screen rectangles.
pub mod rect;

pub use layout::{LabelLayout, LabelPlacement, LabelRecord};
pub use measure::{MonospaceMeasure, TextMeasure};
pub use rect::ScreenRect;
