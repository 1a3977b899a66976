//! Applies planned transitions to the scene, one presented frame per step.

use super::driver::{FrameDriver, FrameSignal};
use super::plan::{half_range_plan, offset_path, phase_path, RangeStep};
use crate::error::PlaneError;
use crate::frame::CoordinateFrame;
use crate::options::AnimationOptions;
use crate::scene::Scene;
use crate::util::complex::Complex;

/// Drives view-parameter transitions to completion.
///
/// Owns no thread: each `animate_*` call blocks until the last frame has
/// been presented, or until the driver asks to quit.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    options: AnimationOptions,
}

impl TransitionAnimator {
    /// Animator with the given pacing.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self { options }
    }

    /// Pacing parameters.
    #[must_use]
    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    // ── Planning ────────────────────────────────────────────────────

    /// Frames taking the half-range from its current value to `target`
    /// (clamped to the frame's limits).
    #[must_use]
    pub fn plan_half_range(&self, frame: &CoordinateFrame, target: f64) -> Vec<RangeStep> {
        let limits = frame.limits();
        half_range_plan(
            frame.half_range(),
            limits.clamp(target),
            limits,
            self.options.half_range_step_multiplier,
            self.options.flip_multiplier,
            self.options.easing,
        )
    }

    /// Frames panning the offset to `target` at constant pixel speed.
    #[must_use]
    pub fn plan_offset(&self, frame: &CoordinateFrame, target: Complex) -> Vec<Complex> {
        let target = if frame.real_mode() {
            Complex::real(target.re)
        } else {
            target
        };
        offset_path(
            frame.offset(),
            target,
            1.0 / frame.units_per_pixel(),
            self.options.offset_pixels_per_step,
            self.options.easing,
        )
    }

    /// Frames rotating to `target` the short way round. Empty on the real
    /// line.
    #[must_use]
    pub fn plan_phase(&self, frame: &CoordinateFrame, target: f64) -> Vec<f64> {
        if frame.real_mode() {
            return Vec::new();
        }
        phase_path(
            frame.phase(),
            target,
            self.options.phase_steps_per_radian,
            self.options.easing,
        )
    }

    // ── Animation ───────────────────────────────────────────────────

    /// Zoom to `target`, flipping through the extreme when the sign changes.
    pub fn animate_half_range(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        target: f64,
    ) -> Result<FrameSignal, PlaneError> {
        let plan = self.plan_half_range(scene.frame(), target);
        log::debug!(
            "half-range {} -> {target} over {} frames",
            scene.frame().half_range(),
            plan.len()
        );
        run_frames(scene, driver, plan.len(), |frame, i| apply_range_step(frame, plan[i]))
    }

    /// Pan to `target`.
    pub fn animate_offset(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        target: Complex,
    ) -> Result<FrameSignal, PlaneError> {
        let plan = self.plan_offset(scene.frame(), target);
        log::debug!(
            "offset {} -> {target} over {} frames",
            scene.frame().offset(),
            plan.len()
        );
        run_frames(scene, driver, plan.len(), |frame, i| {
            frame.set_offset(plan[i])
        })
    }

    /// Rotate to `target`.
    pub fn animate_phase(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        target: f64,
    ) -> Result<FrameSignal, PlaneError> {
        let plan = self.plan_phase(scene.frame(), target);
        log::debug!(
            "phase {} -> {target} over {} frames",
            scene.frame().phase(),
            plan.len()
        );
        run_frames(scene, driver, plan.len(), |frame, i| {
            frame.set_phase(plan[i])
        })
    }

    /// Rotate and zoom together: both transitions advance on the same
    /// frames, the shorter one holding its final value.
    pub fn animate_phase_and_half_range(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        phase: f64,
        half_range: f64,
    ) -> Result<FrameSignal, PlaneError> {
        let phases = self.plan_phase(scene.frame(), phase);
        let ranges = self.plan_half_range(scene.frame(), half_range);
        let frames = phases.len().max(ranges.len());
        log::debug!(
            "rotate to {phase} and zoom to {half_range} over {frames} frames"
        );
        run_frames(scene, driver, frames, |frame, i| {
            if let Some(&p) = phases.get(i) {
                frame.set_phase(p)?;
            }
            match ranges.get(i) {
                Some(&step) => apply_range_step(frame, step),
                None => Ok(()),
            }
        })
    }
}

fn apply_range_step(frame: &mut CoordinateFrame, step: RangeStep) -> Result<(), PlaneError> {
    match step {
        RangeStep::Set(h) => frame.set_half_range(h),
        RangeStep::Flip => {
            frame.flip_half_range();
            Ok(())
        }
    }
}

/// Apply `frames` steps, presenting the scene after each one.
fn run_frames<F>(
    scene: &mut Scene,
    driver: &mut dyn FrameDriver,
    frames: usize,
    mut apply: F,
) -> Result<FrameSignal, PlaneError>
where
    F: FnMut(&mut CoordinateFrame, usize) -> Result<(), PlaneError>,
{
    for i in 0..frames {
        apply(scene.frame_mut(), i)?;
        if scene.advance(driver) == FrameSignal::Quit {
            log::debug!("transition abandoned after {} of {frames} frames", i + 1);
            return Ok(FrameSignal::Quit);
        }
    }
    Ok(FrameSignal::Continue)
}
