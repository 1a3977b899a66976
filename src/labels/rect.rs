use glam::DVec2;

use crate::frame::Viewport;

/// Axis-aligned screen rectangle, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: DVec2,
    /// Width and height.
    pub size: DVec2,
}

impl ScreenRect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub fn new(min: DVec2, size: DVec2) -> Self {
        Self { min, size }
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> DVec2 {
        self.min + self.size
    }

    /// Whether the interiors overlap. Rectangles that only share an edge
    /// do not.
    #[must_use]
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    /// Whether any part of the rectangle lies on the viewport.
    #[must_use]
    pub fn touches_viewport(&self, viewport: Viewport) -> bool {
        let max = self.max();
        self.min.x <= viewport.width
            && max.x >= 0.0
            && self.min.y <= viewport.height
            && max.y >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> ScreenRect {
        ScreenRect::new(DVec2::new(x, y), DVec2::new(w, h))
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&rect(0.0, 10.0, 10.0, 10.0)));
        assert!(a.intersects(&rect(9.5, 9.5, 10.0, 10.0)));
        assert!(a.intersects(&a));
    }

    #[test]
    fn viewport_visibility() {
        let viewport = Viewport::new(100, 100);
        assert!(rect(-5.0, -5.0, 10.0, 10.0).touches_viewport(viewport));
        assert!(rect(95.0, 50.0, 40.0, 10.0).touches_viewport(viewport));
        assert!(!rect(101.0, 50.0, 40.0, 10.0).touches_viewport(viewport));
        assert!(!rect(10.0, -30.0, 40.0, 10.0).touches_viewport(viewport));
    }
}
