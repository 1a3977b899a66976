use glam::DVec2;

/// Pixel dimensions of the rendering surface.
///
/// Owned by the host; the frame re-reads it whenever the host reports a
/// resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Viewport of the given pixel size. Zero sizes are raised to one pixel.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width.max(1)),
            height: f64::from(height.max(1)),
        }
    }

    /// Geometric centre; the pivot of every rotation.
    #[must_use]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// How far lines must extend past the edges so that a rotated grid
    /// still covers the viewport.
    #[must_use]
    pub fn rotation_padding(&self) -> f64 {
        (self.width.hypot(self.height) - self.width.min(self.height)) / 2.0
    }
}
