use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Plane", inline)]
#[serde(default)]
/// Initial view and coordinate-conversion parameters.
pub struct PlaneOptions {
    /// Viewport width in pixels.
    #[schemars(title = "Width", range(min = 1))]
    pub width: u32,
    /// Viewport height in pixels.
    #[schemars(title = "Height", range(min = 1))]
    pub height: u32,
    /// Initial grid spacing in plane units.
    #[schemars(title = "Grid Spacing")]
    pub spacing: f64,
    /// Initial (and "home") half-range.
    #[schemars(title = "Half Range")]
    pub half_range: f64,
    /// Show the real line instead of the complex plane.
    #[schemars(title = "Real Line Mode")]
    pub real_mode: bool,
    /// Pixel distance within which clicks snap to grid intersections.
    #[schemars(title = "Snap Threshold", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub snap_threshold: f64,
    /// Smallest allowed half-range magnitude.
    #[schemars(skip)]
    pub lower_range_limit: f64,
    /// Largest allowed half-range magnitude (and value magnitude).
    #[schemars(skip)]
    pub upper_range_limit: f64,
    /// Decimal places kept when converting pixels to plane values.
    #[schemars(title = "Coordinate Decimals", range(min = 0, max = 15))]
    pub coordinate_decimals: u32,
}

impl Default for PlaneOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            spacing: 1.0,
            half_range: 5.0,
            real_mode: false,
            snap_threshold: 6.0,
            lower_range_limit: 1e-100,
            upper_range_limit: 1e100,
            coordinate_decimals: 5,
        }
    }
}
