//! Per-frame choice of which point labels to draw.

use glam::DVec2;
use rustc_hash::FxHashMap;

use super::measure::TextMeasure;
use super::rect::ScreenRect;
use crate::frame::CoordinateFrame;
use crate::points::{PlottedPoints, PointId};
use crate::util::complex::Complex;

/// Cached label data for one plotted point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    /// Label text.
    pub text: String,
    /// Measured text size, computed once.
    pub size: DVec2,
    /// Current screen rectangle; `None` when the point is off screen or has
    /// no representable pixel position.
    pub rect: Option<ScreenRect>,
}

/// A label chosen for drawing this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPlacement {
    /// Point the label belongs to.
    pub id: PointId,
    /// Label text.
    pub text: String,
    /// Where to draw it.
    pub rect: ScreenRect,
}

/// Chooses a non-overlapping set of labels each frame.
///
/// Points are visited in insertion order. A label is hidden when it
/// overlaps a label that was drawn last frame. Labels drawn last frame and
/// the label of the newest point are otherwise kept; any other label must
/// overlap no on-screen label at all.
pub struct LabelLayout {
    records: FxHashMap<PointId, LabelRecord>,
    displayed: Vec<PointId>,
    newest: Option<PointId>,
    font_offset: f64,
    measure: Box<dyn TextMeasure>,
}

impl LabelLayout {
    /// Layout placing labels `font_offset` pixels above their points,
    /// sized by `measure`.
    #[must_use]
    pub fn new(font_offset: f64, measure: Box<dyn TextMeasure>) -> Self {
        Self {
            records: FxHashMap::default(),
            displayed: Vec::new(),
            newest: None,
            font_offset,
            measure,
        }
    }

    /// Give `id` the newest-point privilege for the next layout pass.
    pub fn mark_newest(&mut self, id: PointId) {
        self.newest = Some(id);
    }

    /// Drop all cached state for a removed point.
    pub fn forget(&mut self, id: PointId) {
        let _ = self.records.remove(&id);
        self.displayed.retain(|d| *d != id);
        if self.newest == Some(id) {
            self.newest = None;
        }
    }

    /// Points whose labels were drawn by the last pass, in draw order.
    #[must_use]
    pub fn displayed(&self) -> &[PointId] {
        &self.displayed
    }

    /// Point holding the newest-point privilege, if any.
    #[must_use]
    pub fn newest(&self) -> Option<PointId> {
        self.newest
    }

    /// Cached record of a point.
    #[must_use]
    pub fn record(&self, id: PointId) -> Option<&LabelRecord> {
        self.records.get(&id)
    }

    /// Recompute every label rectangle and choose the labels to draw.
    ///
    /// Replaces the displayed set and clears the newest-point privilege.
    pub fn layout(
        &mut self,
        frame: &CoordinateFrame,
        points: &PlottedPoints,
    ) -> Vec<LabelPlacement> {
        self.records.retain(|id, _| points.contains(*id));

        let real_mode = frame.real_mode();
        let viewport = frame.viewport();
        let font_offset = self.font_offset;
        let measure = &self.measure;

        let mut active: Vec<(PointId, ScreenRect)> = Vec::with_capacity(points.len());
        for (id, value) in points.iter() {
            let record = self.records.entry(id).or_insert_with(|| {
                let text = value.label(real_mode);
                let size = measure.measure(&text);
                LabelRecord {
                    text,
                    size,
                    rect: None,
                }
            });
            record.rect = label_rect(frame, value, record.size, font_offset)
                .filter(|rect| rect.touches_viewport(viewport));
            if let Some(rect) = record.rect {
                active.push((id, rect));
            }
        }

        let previous: Vec<(PointId, ScreenRect)> = active
            .iter()
            .filter(|(id, _)| self.displayed.contains(id))
            .copied()
            .collect();

        let mut shown = Vec::new();
        let mut placements = Vec::new();
        for &(id, rect) in &active {
            let overlaps = |others: &[(PointId, ScreenRect)]| {
                others
                    .iter()
                    .any(|(other, r)| *other != id && r.intersects(&rect))
            };
            if overlaps(&previous) {
                continue;
            }
            let privileged = self.newest == Some(id) || self.displayed.contains(&id);
            if !privileged && overlaps(&active) {
                continue;
            }
            shown.push(id);
            if let Some(record) = self.records.get(&id) {
                placements.push(LabelPlacement {
                    id,
                    text: record.text.clone(),
                    rect,
                });
            }
        }

        log::trace!("labels: {} of {} on screen drawn", shown.len(), active.len());
        self.displayed = shown;
        self.newest = None;
        placements
    }
}

/// Label rectangle of a value: top-left at the point's pixel, raised by
/// `font_offset`.
fn label_rect(
    frame: &CoordinateFrame,
    value: Complex,
    size: DVec2,
    font_offset: f64,
) -> Option<ScreenRect> {
    let pixel = frame.plane_to_pixel_checked(value)?.round();
    Some(ScreenRect::new(DVec2::new(pixel.x, pixel.y - font_offset), size))
}
