//! The session's explicit context: view, points, labels, overlay markers
//! and input deferred while an animation runs.

use std::collections::VecDeque;

use glam::DVec2;

use crate::animation::driver::{FrameDriver, FrameSignal};
use crate::error::PlaneError;
use crate::frame::{grid_lines, CoordinateFrame, LineSegment, ViewState, Viewport};
use crate::labels::{LabelLayout, LabelPlacement, MonospaceMeasure, TextMeasure};
use crate::options::{BusyInputPolicy, Options};
use crate::points::{PlottedPoints, PointId};
use crate::session::PlaneCommand;
use crate::util::complex::Complex;

/// A plotted point as drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    /// Handle of the point.
    pub id: PointId,
    /// Its plane value.
    pub value: Complex,
    /// Its pixel position.
    pub pixel: DVec2,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// View parameters the frame was composed with.
    pub state: ViewState,
    /// Surface size the frame was composed for.
    pub viewport: Viewport,
    /// Grid lines, ticks and axes.
    pub lines: Vec<LineSegment>,
    /// Plotted points with a representable pixel position.
    pub points: Vec<PointMarker>,
    /// Labels to draw.
    pub labels: Vec<LabelPlacement>,
    /// Reference markers pinned for the running arithmetic step.
    pub markers: Vec<DVec2>,
}

/// View, points and labels of one session.
pub struct Scene {
    frame: CoordinateFrame,
    points: PlottedPoints,
    labels: LabelLayout,
    markers: Vec<DVec2>,
    deferred: VecDeque<PlaneCommand>,
    busy_input: BusyInputPolicy,
    base_half_range: f64,
    frames_presented: u64,
}

impl Scene {
    /// Scene built from options, measuring labels with a monospace font.
    pub fn new(options: &Options) -> Result<Self, PlaneError> {
        Self::with_measure(
            options,
            Box::new(MonospaceMeasure::from_options(&options.labels)),
        )
    }

    /// Scene built from options, measuring labels with the host's font.
    pub fn with_measure(
        options: &Options,
        measure: Box<dyn TextMeasure>,
    ) -> Result<Self, PlaneError> {
        let frame = CoordinateFrame::from_options(&options.plane)?;
        Ok(Self {
            frame,
            points: PlottedPoints::new(),
            labels: LabelLayout::new(options.labels.font_offset, measure),
            markers: Vec::new(),
            deferred: VecDeque::new(),
            busy_input: options.input.busy_input,
            base_half_range: options.plane.half_range.abs() / options.plane.spacing,
            frames_presented: 0,
        })
    }

    /// The coordinate frame.
    #[must_use]
    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    /// Mutable coordinate frame; changes go through its setters.
    pub fn frame_mut(&mut self) -> &mut CoordinateFrame {
        &mut self.frame
    }

    /// Plotted points.
    #[must_use]
    pub fn points(&self) -> &PlottedPoints {
        &self.points
    }

    /// Label layout state.
    #[must_use]
    pub fn labels(&self) -> &LabelLayout {
        &self.labels
    }

    /// Plot a value; it becomes the newest point for label layout.
    ///
    /// On the real line the imaginary part is dropped.
    pub fn add_point(&mut self, value: Complex) -> PointId {
        let value = if self.frame.real_mode() {
            Complex::real(value.re)
        } else {
            value
        };
        let id = self.points.insert(value);
        self.labels.mark_newest(id);
        log::debug!("plotted {value} as {id:?}");
        id
    }

    /// Remove a plotted point.
    pub fn remove_point(&mut self, id: PointId) -> Option<Complex> {
        let value = self.points.remove(id)?;
        self.labels.forget(id);
        Some(value)
    }

    /// Remove the earliest plotted point matching `value`.
    pub fn remove_value(&mut self, value: Complex) -> Option<PointId> {
        let id = self.points.remove_value(value)?;
        self.labels.forget(id);
        Some(id)
    }

    /// Pin a reference marker at the current pixel position of `value`.
    pub fn pin_marker(&mut self, value: Complex) {
        if let Some(pixel) = self.frame.plane_to_pixel_checked(value) {
            self.markers.push(pixel.round());
        }
    }

    /// Remove all reference markers.
    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    /// Pinned reference markers.
    #[must_use]
    pub fn markers(&self) -> &[DVec2] {
        &self.markers
    }

    /// Number of frames presented through [`advance`](Self::advance).
    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Compose the current frame: readjust the grid spacing, then build
    /// lines, points and labels.
    pub fn compose(&mut self) -> FrameSnapshot {
        if self.frame.adjust_spacing(self.base_half_range) {
            log::trace!("grid spacing now {}", self.frame.spacing());
        }
        let points = self
            .points
            .iter()
            .filter_map(|(id, value)| {
                self.frame
                    .plane_to_pixel_checked(value)
                    .map(|pixel| PointMarker {
                        id,
                        value,
                        pixel: pixel.round(),
                    })
            })
            .collect();
        FrameSnapshot {
            state: *self.frame.state(),
            viewport: self.frame.viewport(),
            lines: grid_lines(&self.frame),
            points,
            labels: self.labels.layout(&self.frame, &self.points),
            markers: self.markers.clone(),
        }
    }

    /// One animation frame: compose, present, then collect the input the
    /// host received meanwhile.
    pub fn advance(&mut self, driver: &mut dyn FrameDriver) -> FrameSignal {
        let snapshot = self.compose();
        let signal = driver.present(&snapshot);
        self.frames_presented += 1;
        log::trace!("frame {} presented", self.frames_presented);
        for command in driver.poll_input() {
            self.defer(command);
        }
        signal
    }

    /// Hold a command that arrived while an animation was running, or
    /// discard it, per the busy-input policy.
    pub fn defer(&mut self, command: PlaneCommand) {
        match self.busy_input {
            BusyInputPolicy::Queue => self.deferred.push_back(command),
            BusyInputPolicy::Drop => {
                log::debug!("dropped {command:?} received during animation");
            }
        }
    }

    /// Next deferred command, oldest first.
    pub fn pop_deferred(&mut self) -> Option<PlaneCommand> {
        self.deferred.pop_front()
    }

    /// Number of commands waiting.
    #[must_use]
    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }
}
