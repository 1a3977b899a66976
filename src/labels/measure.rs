use glam::DVec2;

use crate::options::LabelOptions;

/// Text-measuring collaborator: the host's font system reports how large a
/// rendered label would be. Glyph drawing itself stays with the host.
pub trait TextMeasure {
    /// Pixel size of `text` when rendered.
    fn measure(&self, text: &str) -> DVec2;
}

/// Fixed-advance measure for headless use and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasure {
    /// Advance width per character.
    pub char_width: f64,
    /// Height of one line.
    pub line_height: f64,
}

impl MonospaceMeasure {
    /// Measure from the `[labels]` options section.
    #[must_use]
    pub fn from_options(options: &LabelOptions) -> Self {
        Self {
            char_width: options.char_width,
            line_height: options.line_height,
        }
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::from_options(&LabelOptions::default())
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> DVec2 {
        DVec2::new(text.chars().count() as f64 * self.char_width, self.line_height)
    }
}
