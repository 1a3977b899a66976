//! Animated reduction of the plotted points to their sum or product.
//!
//! Each pairwise step pins reference markers (the origin for addition, the
//! unit point for multiplication, plus the second operand's position),
//! moves the view so the second operand's marker lands on the result, then
//! replaces both operands by the result.

use crate::animation::driver::{FrameDriver, FrameSignal};
use crate::animation::transition::TransitionAnimator;
use crate::error::PlaneError;
use crate::options::AnimationOptions;
use crate::points::PointId;
use crate::scene::Scene;
use crate::util::complex::Complex;

/// Which reduction to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Sum of all points.
    Add,
    /// Product of all points.
    Multiply,
}

/// Summary of a finished (or abandoned) reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionReport {
    /// The reduction that ran.
    pub operation: Operation,
    /// Pairwise steps that combined two points.
    pub steps: usize,
    /// Points removed without being combined (overflow, zero operands).
    pub dropped: Vec<Complex>,
    /// The remaining value when exactly one point is left.
    pub result: Option<Complex>,
    /// Whether the host quit before the reduction finished.
    pub aborted: bool,
}

/// How a pairwise step ended.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StepOutcome {
    Combined,
    Dropped(Complex),
    Skipped,
    Quit,
}

type Operand = (PointId, Complex);

/// Sequences pairwise operations over the plotted points.
#[derive(Debug, Clone)]
pub struct ArithmeticChoreographer {
    animator: TransitionAnimator,
}

impl ArithmeticChoreographer {
    /// Choreographer with the given pacing.
    #[must_use]
    pub fn new(options: AnimationOptions) -> Self {
        Self {
            animator: TransitionAnimator::new(options),
        }
    }

    /// The underlying transition animator.
    #[must_use]
    pub fn animator(&self) -> &TransitionAnimator {
        &self.animator
    }

    /// Sum all plotted points.
    pub fn add(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
    ) -> Result<ReductionReport, PlaneError> {
        self.reduce(scene, driver, Operation::Add)
    }

    /// Multiply all plotted points.
    pub fn multiply(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
    ) -> Result<ReductionReport, PlaneError> {
        self.reduce(scene, driver, Operation::Multiply)
    }

    /// Combine the two smallest points until one remains or a step makes no
    /// progress.
    ///
    /// Multiplication visits zeros last so one zero absorbs the remaining
    /// product in a single step.
    pub fn reduce(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        operation: Operation,
    ) -> Result<ReductionReport, PlaneError> {
        let mut report = ReductionReport {
            operation,
            steps: 0,
            dropped: Vec::new(),
            result: None,
            aborted: false,
        };
        log::debug!("{operation:?} over {} points", scene.points().len());

        if self.center(scene, driver)? == FrameSignal::Quit {
            report.aborted = true;
            return Ok(report);
        }

        loop {
            let sorted = scene
                .points()
                .sorted_by_magnitude(operation == Operation::Multiply);
            let [a, b, ..] = sorted[..] else {
                break;
            };
            let before = sorted.len();

            let outcome = match operation {
                Operation::Add => self.add_pair(scene, driver, a, b)?,
                Operation::Multiply => self.multiply_pair(scene, driver, a, b)?,
            };
            match outcome {
                StepOutcome::Combined => report.steps += 1,
                StepOutcome::Dropped(value) => report.dropped.push(value),
                StepOutcome::Skipped => {}
                StepOutcome::Quit => {
                    report.aborted = true;
                    break;
                }
            }

            if scene.points().len() >= before {
                log::warn!(
                    "{operation:?} stopped: no progress with {before} points left"
                );
                break;
            }
        }

        if !report.aborted && scene.advance(driver) == FrameSignal::Quit {
            report.aborted = true;
        }
        if scene.points().len() == 1 {
            report.result = scene.points().iter().next().map(|(_, v)| v);
        }
        log::debug!(
            "{operation:?} finished: {} steps, {} dropped, result {:?}",
            report.steps,
            report.dropped.len(),
            report.result
        );
        Ok(report)
    }

    /// Zoom so that every value in `values` fits inside the viewport with
    /// the configured margin.
    pub fn resize_to_points(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        values: &[Complex],
    ) -> Result<FrameSignal, PlaneError> {
        let margin = self.animator.options().fit_margin_px;
        match scene.frame().fit_half_range(values, margin) {
            Some(target) => self.animator.animate_half_range(scene, driver, target),
            None => Ok(FrameSignal::Continue),
        }
    }

    /// Bring the origin into view, then pan it to the viewport centre.
    pub fn center(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
    ) -> Result<FrameSignal, PlaneError> {
        if scene.frame().offset().is_zero() {
            return Ok(FrameSignal::Continue);
        }
        if self.resize_to_points(scene, driver, &[Complex::ZERO])? == FrameSignal::Quit {
            return Ok(FrameSignal::Quit);
        }
        self.animator.animate_offset(scene, driver, Complex::ZERO)
    }

    /// Return to the initial view: centre, zoom to `half_range`, undo the
    /// rotation and restore the grid spacing.
    pub fn home(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        half_range: f64,
        spacing: f64,
    ) -> Result<FrameSignal, PlaneError> {
        if self.center(scene, driver)? == FrameSignal::Quit
            || self.animator.animate_half_range(scene, driver, half_range)?
                == FrameSignal::Quit
            || self.animator.animate_phase(scene, driver, 0.0)? == FrameSignal::Quit
        {
            return Ok(FrameSignal::Quit);
        }
        scene.frame_mut().set_spacing(spacing)?;
        Ok(scene.advance(driver))
    }

    /// Slide `a` onto the origin while `b` stays put on screen; `b`'s
    /// position then shows `a + b`.
    fn add_pair(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        (a_id, a): Operand,
        (b_id, b): Operand,
    ) -> Result<StepOutcome, PlaneError> {
        let sum = a + b;
        if !scene.frame().limits().admits_value(sum) {
            log::debug!("skipping {a} + {b}: sum out of range");
            return Ok(StepOutcome::Skipped);
        }
        log::debug!("adding {a} + {b}");

        if self.resize_to_points(scene, driver, &[Complex::ZERO, a, b])? == FrameSignal::Quit {
            return Ok(StepOutcome::Quit);
        }
        scene.pin_marker(Complex::ZERO);
        scene.pin_marker(b);
        let _ = scene.remove_point(b_id);
        let target = scene.frame().offset() - a;
        let signal = self.animator.animate_offset(scene, driver, target)?;
        commit(scene, a_id, sum);
        Ok(quit_or(signal, StepOutcome::Combined))
    }

    /// Rotate by `-arg(a)` and zoom by `|a|` together so that the unit point
    /// lands on `a` and `b`'s marker shows `a · b`. On the real line a
    /// negative `a` flips the half-range instead of rotating.
    fn multiply_pair(
        &self,
        scene: &mut Scene,
        driver: &mut dyn FrameDriver,
        (a_id, a): Operand,
        (b_id, b): Operand,
    ) -> Result<StepOutcome, PlaneError> {
        if a.is_zero() {
            // both operands are zero: one of them is redundant
            let _ = scene.remove_point(b_id);
            log::debug!("dropping duplicate zero");
            return Ok(StepOutcome::Dropped(b));
        }
        let product = a * b;
        if !scene.frame().limits().admits_value(product) {
            let _ = scene.remove_point(b_id);
            log::warn!("{a} * {b} is out of range; dropping {b}");
            return Ok(StepOutcome::Dropped(b));
        }
        log::debug!("multiplying {a} * {b}");

        if self.resize_to_points(scene, driver, &[Complex::ZERO, Complex::ONE, a, b])?
            == FrameSignal::Quit
        {
            return Ok(StepOutcome::Quit);
        }
        let frame = scene.frame();
        let (phase, half_range) = if frame.real_mode() {
            (0.0, frame.half_range() * a.re)
        } else {
            (frame.phase() - a.arg(), frame.half_range() * a.norm())
        };
        let view_fits = frame.limits().admits(half_range);

        scene.pin_marker(Complex::ONE);
        scene.pin_marker(b);
        let _ = scene.remove_point(b_id);
        let signal = if view_fits {
            self.animator
                .animate_phase_and_half_range(scene, driver, phase, half_range)?
        } else {
            log::debug!("view cannot follow {a} * {b}; committing without zoom");
            FrameSignal::Continue
        };
        commit(scene, a_id, product);
        Ok(quit_or(signal, StepOutcome::Combined))
    }
}

fn quit_or(signal: FrameSignal, outcome: StepOutcome) -> StepOutcome {
    match signal {
        FrameSignal::Quit => StepOutcome::Quit,
        FrameSignal::Continue => outcome,
    }
}

/// Replace the first operand by the result and drop the pinned markers.
fn commit(scene: &mut Scene, a_id: PointId, result: Complex) {
    let _ = scene.remove_point(a_id);
    let _ = scene.add_point(result);
    scene.clear_markers();
}
