use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Labels", inline)]
#[serde(default)]
/// Numeric label geometry.
pub struct LabelOptions {
    /// Vertical pixel distance from a point to the top of its label.
    #[schemars(title = "Label Offset", range(min = 0.0, max = 100.0))]
    pub font_offset: f64,
    /// Advance width of one glyph for the built-in monospace measure.
    #[schemars(skip)]
    pub char_width: f64,
    /// Line height for the built-in monospace measure.
    #[schemars(skip)]
    pub line_height: f64,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            font_offset: 30.0,
            char_width: 9.0,
            line_height: 14.0,
        }
    }
}
