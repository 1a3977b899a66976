//! Frame-by-frame value sequences for view transitions.
//!
//! Every planner returns the values to apply on successive frames, ending
//! with the exact target. An unchanged parameter plans no frames.

use std::f64::consts::{PI, TAU};

use super::easing::EasingFunction;
use crate::frame::RangeLimits;
use crate::util::complex::Complex;

/// Upper bound on the frames of any single transition.
pub const MAX_TRANSITION_STEPS: usize = 10_000;

/// One frame of a half-range transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeStep {
    /// Set the half-range to this value.
    Set(f64),
    /// Negate the half-range in one discrete step.
    Flip,
}

/// Log-spaced path between two half-ranges of the same sign.
///
/// Takes `round(|ln(end/start)| / ln(multiplier))` frames so each frame
/// zooms by roughly `multiplier`. Values move monotonically from `start`
/// towards `end`.
#[must_use]
pub fn magnitude_path(
    start: f64,
    end: f64,
    multiplier: f64,
    easing: EasingFunction,
) -> Vec<f64> {
    if start == end {
        return Vec::new();
    }
    let ratio = (end / start).abs();
    let steps = if multiplier > 1.0 && ratio > 0.0 {
        step_count((ratio.ln() / multiplier.ln()).abs())
    } else {
        0
    };

    let sign = if start.is_sign_negative() { -1.0 } else { 1.0 };
    let (log_start, log_end) = (start.abs().ln(), end.abs().ln());
    let (lo, hi) = (start.min(end), start.max(end));
    let mut path: Vec<f64> = (1..steps)
        .map(|i| {
            let t = easing.evaluate(i as f64 / steps as f64);
            (sign * (log_start + (log_end - log_start) * t).exp()).clamp(lo, hi)
        })
        .collect();
    path.push(end);
    path
}

/// Half-range transition, passing through a flip when `start` and `end`
/// have opposite signs.
///
/// A flip first zooms out to `flip_multiplier · start` (clamped to the
/// limits), negates the half-range, then zooms to `end`.
#[must_use]
pub fn half_range_plan(
    start: f64,
    end: f64,
    limits: RangeLimits,
    multiplier: f64,
    flip_multiplier: f64,
    easing: EasingFunction,
) -> Vec<RangeStep> {
    if start.is_sign_negative() == end.is_sign_negative() {
        return magnitude_path(start, end, multiplier, easing)
            .into_iter()
            .map(RangeStep::Set)
            .collect();
    }
    let extreme = limits.clamp(start * flip_multiplier.abs().max(1.0));
    let mut plan: Vec<RangeStep> = magnitude_path(start, extreme, multiplier, easing)
        .into_iter()
        .map(RangeStep::Set)
        .collect();
    plan.push(RangeStep::Flip);
    plan.extend(
        magnitude_path(-extreme, end, multiplier, easing)
            .into_iter()
            .map(RangeStep::Set),
    );
    plan
}

/// Straight-line offset path at a constant pixel speed.
///
/// `pixels_per_unit` converts plane distance to screen distance at the
/// current zoom.
#[must_use]
pub fn offset_path(
    start: Complex,
    end: Complex,
    pixels_per_unit: f64,
    pixels_per_step: f64,
    easing: EasingFunction,
) -> Vec<Complex> {
    if start == end {
        return Vec::new();
    }
    let delta = end - start;
    let pixels = delta.norm() * pixels_per_unit.abs();
    let steps = step_count(pixels / pixels_per_step);
    let mut path: Vec<Complex> = (1..steps)
        .map(|i| start + delta.scale(easing.evaluate(i as f64 / steps as f64)))
        .collect();
    path.push(end);
    path
}

/// Rotation along the shorter way round.
///
/// Intermediate values may lie outside `[0, 2π)` and are normalised when
/// applied; the last value is `target` itself.
#[must_use]
pub fn phase_path(
    start: f64,
    target: f64,
    steps_per_radian: f64,
    easing: EasingFunction,
) -> Vec<f64> {
    let delta = shortest_phase_delta(start, target);
    if delta == 0.0 || !delta.is_finite() {
        return Vec::new();
    }
    let steps = step_count(delta.abs() * steps_per_radian);
    let mut path: Vec<f64> = (1..steps)
        .map(|i| start + delta * easing.evaluate(i as f64 / steps as f64))
        .collect();
    path.push(target);
    path
}

/// Signed angle in `[-π, π)` that rotates `from` onto `to`.
#[must_use]
pub fn shortest_phase_delta(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta < PI {
        delta
    } else {
        delta - TAU
    }
}

fn step_count(raw: f64) -> usize {
    if raw.is_finite() && raw > 0.0 {
        (raw.round() as usize).min(MAX_TRANSITION_STEPS)
    } else {
        0
    }
}
