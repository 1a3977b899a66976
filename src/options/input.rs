use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What to do with commands that arrive while an animation is running.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BusyInputPolicy {
    /// Run them, in arrival order, once the animation has finished.
    #[default]
    Queue,
    /// Discard them.
    Drop,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer and keyboard interaction parameters.
pub struct InputOptions {
    /// Half-range factor applied per held-key zoom step.
    #[schemars(title = "Zoom Step", range(min = 1.01, max = 2.0), extend("step" = 0.01))]
    pub range_multiplier: f64,
    /// Radians rotated per rotate command.
    #[schemars(title = "Rotate Step", range(min = 0.001, max = 0.5), extend("step" = 0.001))]
    pub phase_step: f64,
    /// Minimum wall-clock delay between held-key zoom steps.
    #[schemars(title = "Zoom Interval (ms)", range(min = 0, max = 500))]
    pub zoom_step_interval_ms: u64,
    /// A release within this many milliseconds of the press is a click.
    #[schemars(title = "Click Window (ms)", range(min = 10, max = 1000))]
    pub click_window_ms: u64,
    /// Real mode: maximum vertical pixel distance from the line for a click
    /// to place a point.
    #[schemars(title = "Line Click Tolerance", range(min = 0.0, max = 50.0))]
    pub real_line_click_tolerance: f64,
    /// Handling of input received during animations.
    #[schemars(title = "Input While Animating")]
    pub busy_input: BusyInputPolicy,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            range_multiplier: 1.1,
            phase_step: 0.01,
            zoom_step_interval_ms: 50,
            click_window_ms: 100,
            real_line_click_tolerance: 3.0,
            busy_input: BusyInputPolicy::Queue,
        }
    }
}
