//! Interactive session: executes [`PlaneCommand`]s against a [`Scene`].
//!
//! A `PlaneSession` replaces process-wide plane/window state with one
//! explicit object. Instant commands (pan, rotate, place, resize, zoom
//! key state) update the scene and return; animated ones (home, add,
//! multiply) block until their last frame was presented through the
//! host's [`FrameDriver`]. Commands the host reports meanwhile are queued
//! or discarded per [`BusyInputPolicy`](crate::options::BusyInputPolicy)
//! and queued ones run once the animation has finished, so animations
//! never nest.

/// Command vocabulary.
pub mod command;

pub use command::{PlaneCommand, RotateDirection, ZoomDirection};
use web_time::{Duration, Instant};

use crate::animation::driver::{FrameDriver, FrameSignal};
use crate::animation::pacing::StepPacer;
use crate::arithmetic::{ArithmeticChoreographer, ReductionReport};
use crate::error::PlaneError;
use crate::frame::{CoordinateFrame, Viewport};
use crate::labels::TextMeasure;
use crate::options::Options;
use crate::points::PointId;
use crate::scene::{FrameSnapshot, Scene};
use crate::util::complex::Complex;

/// One interactive plane or real line.
pub struct PlaneSession {
    options: Options,
    scene: Scene,
    choreographer: ArithmeticChoreographer,
    zoom_in: bool,
    zoom_out: bool,
    zoom_pacer: StepPacer,
    last_report: Option<ReductionReport>,
}

impl PlaneSession {
    /// Session built from options, measuring labels with a monospace font.
    pub fn new(options: Options) -> Result<Self, PlaneError> {
        let scene = Scene::new(&options)?;
        Ok(Self::from_scene(options, scene))
    }

    /// Session built from options, measuring labels with the host's font.
    pub fn with_measure(
        options: Options,
        measure: Box<dyn TextMeasure>,
    ) -> Result<Self, PlaneError> {
        let scene = Scene::with_measure(&options, measure)?;
        Ok(Self::from_scene(options, scene))
    }

    fn from_scene(options: Options, scene: Scene) -> Self {
        log::info!(
            "session: {}x{} {}, half-range {}",
            options.plane.width,
            options.plane.height,
            if options.plane.real_mode { "real line" } else { "complex plane" },
            options.plane.half_range
        );
        Self {
            choreographer: ArithmeticChoreographer::new(options.animation.clone()),
            zoom_pacer: StepPacer::new(Duration::from_millis(
                options.input.zoom_step_interval_ms,
            )),
            zoom_in: false,
            zoom_out: false,
            last_report: None,
            scene,
            options,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Session options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The coordinate frame.
    #[must_use]
    pub fn frame(&self) -> &CoordinateFrame {
        self.scene.frame()
    }

    /// Report of the most recent add/multiply.
    #[must_use]
    pub fn last_report(&self) -> Option<&ReductionReport> {
        self.last_report.as_ref()
    }

    /// Whether a zoom key is held.
    #[must_use]
    pub fn is_zooming(&self) -> bool {
        self.zoom_in || self.zoom_out
    }

    /// Plot a value directly, bypassing pointer conversion.
    pub fn place_value(&mut self, value: Complex) -> PointId {
        self.scene.add_point(value)
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Run a command, then any commands deferred while it animated.
    pub fn execute(
        &mut self,
        command: PlaneCommand,
        driver: &mut dyn FrameDriver,
    ) -> Result<FrameSignal, PlaneError> {
        let mut signal = self.execute_one(command, driver)?;
        while signal == FrameSignal::Continue {
            let Some(next) = self.scene.pop_deferred() else {
                break;
            };
            log::debug!("running deferred {next:?}");
            signal = self.execute_one(next, driver)?;
        }
        Ok(signal)
    }

    fn execute_one(
        &mut self,
        command: PlaneCommand,
        driver: &mut dyn FrameDriver,
    ) -> Result<FrameSignal, PlaneError> {
        match command {
            PlaneCommand::Home => self.choreographer.home(
                &mut self.scene,
                driver,
                self.options.plane.half_range,
                self.options.plane.spacing,
            ),
            PlaneCommand::Add => {
                let report = self.choreographer.add(&mut self.scene, driver)?;
                Ok(self.finish_reduction(report))
            }
            PlaneCommand::Multiply => {
                let report = self.choreographer.multiply(&mut self.scene, driver)?;
                Ok(self.finish_reduction(report))
            }
            PlaneCommand::Rotate { direction } => {
                let step = self.options.input.phase_step;
                let frame = self.scene.frame_mut();
                let phase = match direction {
                    RotateDirection::CounterClockwise => frame.phase() + step,
                    RotateDirection::Clockwise => frame.phase() - step,
                };
                frame.set_phase(phase)?;
                Ok(FrameSignal::Continue)
            }
            PlaneCommand::Pan { delta } => {
                self.scene.frame_mut().pan_by_pixels(delta);
                Ok(FrameSignal::Continue)
            }
            PlaneCommand::PlacePoint { x, y } => {
                let value = self.scene.frame().snap_to_grid(x, y);
                let _ = self.scene.add_point(value);
                Ok(FrameSignal::Continue)
            }
            PlaneCommand::Zoom { direction, active } => {
                if active && !self.is_zooming() {
                    self.zoom_pacer.reset();
                }
                match direction {
                    ZoomDirection::In => self.zoom_in = active,
                    ZoomDirection::Out => self.zoom_out = active,
                }
                Ok(FrameSignal::Continue)
            }
            PlaneCommand::Resize { width, height } => {
                self.scene
                    .frame_mut()
                    .set_viewport(Viewport::new(width, height));
                Ok(FrameSignal::Continue)
            }
        }
    }

    fn finish_reduction(&mut self, report: ReductionReport) -> FrameSignal {
        let signal = if report.aborted {
            FrameSignal::Quit
        } else {
            FrameSignal::Continue
        };
        self.last_report = Some(report);
        signal
    }

    // ── Frame loop ──────────────────────────────────────────────────

    /// Host frame tick: apply at most one held-key zoom step per zoom
    /// interval, then compose the frame.
    pub fn tick(&mut self, now: Instant) -> FrameSnapshot {
        if self.is_zooming() && self.zoom_pacer.try_step(now) {
            self.zoom_step();
        }
        self.scene.compose()
    }

    /// One zoom step, clamped to the range limits. At a limit zooming
    /// simply stops having an effect.
    fn zoom_step(&mut self) {
        let multiplier = self.options.input.range_multiplier;
        let frame = self.scene.frame_mut();
        let current = frame.half_range();
        let mut target = current;
        if self.zoom_in {
            target /= multiplier;
        }
        if self.zoom_out {
            target *= multiplier;
        }
        let target = frame.limits().clamp(target);
        if target == current {
            log::trace!("zoom at limit {current}");
            return;
        }
        if let Err(e) = frame.set_half_range(target) {
            log::debug!("zoom step rejected: {e}");
        }
    }
}
