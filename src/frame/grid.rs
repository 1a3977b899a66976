//! Grid, axis and tick-mark geometry in pixel space.

use glam::DVec2;

use super::coordinate_frame::CoordinateFrame;

/// Half-height of a real-line tick mark.
const TICK_HALF_HEIGHT: f64 = 10.0;
/// Half-height of the real-line zero mark.
const ZERO_MARK_HALF_HEIGHT: f64 = 20.0;
/// Grid lines closer together than this are not generated.
const MIN_LINE_SPACING_PX: f64 = 2.0;
/// Upper bound on lines per direction.
const MAX_LINES_PER_AXIS: usize = 1024;

/// What a [`LineSegment`] represents, for styling by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Thin grid line (complex mode).
    Grid,
    /// Thin tick mark across the real line.
    Tick,
    /// Bold axis.
    Axis,
    /// The taller mark at zero on the real line.
    ZeroMark,
}

/// One drawable line, in rotated pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point.
    pub start: DVec2,
    /// End point.
    pub end: DVec2,
    /// Styling hint.
    pub kind: LineKind,
}

/// Every line the current view draws: grid lines (or tick marks) first,
/// then the axes.
#[must_use]
pub fn grid_lines(frame: &CoordinateFrame) -> Vec<LineSegment> {
    let viewport = frame.viewport();
    let center = viewport.center();
    let padding = viewport.rotation_padding();
    let offset = frame.pixel_offset();
    let spacing = frame.pixel_spacing().abs();
    let real_mode = frame.real_mode();
    let phase = frame.phase();

    let segment = |start: DVec2, end: DVec2, kind: LineKind| LineSegment {
        start: frame.rotate_about_center(start, phase),
        end: frame.rotate_about_center(end, phase),
        kind,
    };

    let mut lines = Vec::new();
    if spacing.is_finite() && spacing >= MIN_LINE_SPACING_PX {
        let (top, bottom, kind) = if real_mode {
            (center.y - TICK_HALF_HEIGHT, center.y + TICK_HALF_HEIGHT, LineKind::Tick)
        } else {
            (-padding, viewport.height + padding, LineKind::Grid)
        };
        let xs = line_positions(center.x + offset.x.rem_euclid(spacing), spacing, -padding, viewport.width + padding);
        lines.extend(xs.map(|x| segment(DVec2::new(x, top), DVec2::new(x, bottom), kind)));

        if !real_mode {
            let ys = line_positions(center.y + offset.y.rem_euclid(spacing), spacing, -padding, viewport.height + padding);
            lines.extend(ys.map(|y| {
                segment(DVec2::new(-padding, y), DVec2::new(viewport.width + padding, y), LineKind::Grid)
            }));
        }
    }

    let axis_y = center.y + offset.y;
    lines.push(segment(
        DVec2::new(-padding, axis_y),
        DVec2::new(viewport.width + padding, axis_y),
        LineKind::Axis,
    ));
    let axis_x = center.x + offset.x;
    if real_mode {
        lines.push(segment(
            DVec2::new(axis_x, center.y - ZERO_MARK_HALF_HEIGHT),
            DVec2::new(axis_x, center.y + ZERO_MARK_HALF_HEIGHT),
            LineKind::ZeroMark,
        ));
    } else {
        lines.push(segment(
            DVec2::new(axis_x, -padding),
            DVec2::new(axis_x, viewport.height + padding),
            LineKind::Axis,
        ));
    }

    lines.retain(|l| l.start.is_finite() && l.end.is_finite());
    lines
}

/// Positions `anchor + k·spacing` inside `[min, max]`.
fn line_positions(anchor: f64, spacing: f64, min: f64, max: f64) -> impl Iterator<Item = f64> {
    let first = ((min - anchor) / spacing).ceil();
    let last = ((max - anchor) / spacing).floor();
    let count = if last >= first {
        ((last - first) as usize + 1).min(MAX_LINES_PER_AXIS)
    } else {
        0
    };
    (0..count).map(move |i| anchor + (first + i as f64) * spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{RangeLimits, ViewState, Viewport};
    use crate::util::complex::Complex;

    fn frame(real_mode: bool) -> CoordinateFrame {
        CoordinateFrame::new(
            Viewport::new(800, 800),
            ViewState::new(1.0, 5.0, real_mode),
            RangeLimits::default(),
            6.0,
            5,
        )
        .unwrap()
    }

    #[test]
    fn complex_grid_has_lines_through_integers() {
        let f = frame(false);
        let lines = grid_lines(&f);
        let axes = lines.iter().filter(|l| l.kind == LineKind::Axis).count();
        assert_eq!(axes, 2);
        // x = 1 sits at pixel 480
        assert!(lines
            .iter()
            .any(|l| l.kind == LineKind::Grid && (l.start.x - 480.0).abs() < 1e-9 && l.start.x == l.end.x));
        // padding covers a rotated square viewport
        let padding = f.viewport().rotation_padding();
        assert!((padding - (800f64.hypot(800.0) - 800.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn real_line_has_ticks_and_zero_mark() {
        let mut f = frame(true);
        f.set_offset(Complex::real(0.5)).unwrap();
        let lines = grid_lines(&f);
        assert!(lines.iter().all(|l| l.kind != LineKind::Grid));
        let zero = lines.iter().find(|l| l.kind == LineKind::ZeroMark).unwrap();
        assert_eq!(zero.start.x, 440.0);
        assert_eq!(zero.end.y - zero.start.y, 2.0 * ZERO_MARK_HALF_HEIGHT);
        let ticks: Vec<_> = lines.iter().filter(|l| l.kind == LineKind::Tick).collect();
        assert!(ticks.iter().any(|l| l.start.x == 520.0));
    }

    #[test]
    fn dense_grids_collapse_to_axes() {
        let mut f = frame(false);
        f.set_half_range(1000.0).unwrap();
        let lines = grid_lines(&f);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn line_count_is_bounded() {
        let positions: Vec<_> = line_positions(0.0, 2.0, -1e9, 1e9).collect();
        assert_eq!(positions.len(), MAX_LINES_PER_AXIS);
    }
}
