use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Step-count and pacing parameters for animated view transitions.
pub struct AnimationOptions {
    /// Per-frame multiplicative rate of half-range transitions.
    #[schemars(title = "Zoom Rate", range(min = 1.001, max = 2.0), extend("step" = 0.005))]
    pub half_range_step_multiplier: f64,
    /// Frames per radian of phase transitions.
    #[schemars(title = "Rotation Steps per Radian", range(min = 1.0, max = 1000.0))]
    pub phase_steps_per_radian: f64,
    /// Pixels travelled per frame of offset transitions.
    #[schemars(title = "Pan Speed", range(min = 0.1, max = 100.0), extend("step" = 0.5))]
    pub offset_pixels_per_step: f64,
    /// Magnitude factor reached before a half-range sign flip.
    #[schemars(skip)]
    pub flip_multiplier: f64,
    /// Pixel margin kept between fitted points and the viewport edge.
    #[schemars(title = "Fit Margin", range(min = 0.0, max = 200.0))]
    pub fit_margin_px: f64,
    /// Progress curve applied within each transition.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            half_range_step_multiplier: 1.05,
            phase_steps_per_radian: 100.0,
            offset_pixels_per_step: 1.0,
            flip_multiplier: 50.0,
            fit_margin_px: 20.0,
            easing: EasingFunction::Linear,
        }
    }
}
