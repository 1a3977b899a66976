//! Bidirectional pixel ↔ plane mapping under pan, zoom and rotation.

use std::f64::consts::TAU;

use glam::{DMat2, DVec2, IVec2};

use super::view_state::{RangeLimits, ViewState};
use super::viewport::Viewport;
use crate::error::PlaneError;
use crate::options::PlaneOptions;
use crate::util::complex::Complex;

/// Current view parameters plus the pixel-space quantities derived from
/// them.
///
/// A plane value `p` is drawn at
/// `center + R(phase) · S · (p + offset)` where `S = diag(W/2h, -H/2h)`
/// flips the imaginary axis upward and `R` rotates about the viewport
/// centre. `pixel_spacing` and `pixel_offset` are caches of `S` applied to
/// `spacing` and `offset`; they are recomputed by every setter and cannot
/// be set directly.
#[derive(Debug, Clone)]
pub struct CoordinateFrame {
    viewport: Viewport,
    state: ViewState,
    limits: RangeLimits,
    snap_threshold: f64,
    decimals: u32,
    pixel_spacing: f64,
    pixel_offset: DVec2,
}

impl CoordinateFrame {
    /// Frame over `viewport` showing `state`.
    ///
    /// Fails with [`PlaneError::InvalidRange`] when the half-range or the
    /// spacing is unusable.
    pub fn new(
        viewport: Viewport,
        state: ViewState,
        limits: RangeLimits,
        snap_threshold: f64,
        decimals: u32,
    ) -> Result<Self, PlaneError> {
        if !limits.admits(state.half_range) {
            return Err(PlaneError::InvalidRange {
                value: state.half_range,
            });
        }
        validate_spacing(state.spacing)?;
        let mut frame = Self {
            viewport,
            state,
            limits,
            snap_threshold,
            decimals,
            pixel_spacing: 0.0,
            pixel_offset: DVec2::ZERO,
        };
        frame.set_offset(state.offset)?;
        frame.set_phase(state.phase)?;
        frame.update_caches();
        Ok(frame)
    }

    /// Frame built from the `[plane]` options section.
    pub fn from_options(options: &PlaneOptions) -> Result<Self, PlaneError> {
        Self::new(
            Viewport::new(options.width, options.height),
            ViewState::new(options.spacing, options.half_range, options.real_mode),
            RangeLimits {
                lower: options.lower_range_limit,
                upper: options.upper_range_limit,
            },
            options.snap_threshold,
            options.coordinate_decimals,
        )
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Current view parameters.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Configured half-range limits.
    #[must_use]
    pub fn limits(&self) -> RangeLimits {
        self.limits
    }

    /// Half-range.
    #[must_use]
    pub fn half_range(&self) -> f64 {
        self.state.half_range
    }

    /// Phase in `[0, 2π)`.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.state.phase
    }

    /// Offset.
    #[must_use]
    pub fn offset(&self) -> Complex {
        self.state.offset
    }

    /// Grid spacing in plane units.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.state.spacing
    }

    /// Whether this frame shows the real line.
    #[must_use]
    pub fn real_mode(&self) -> bool {
        self.state.real_mode
    }

    /// Pixel distance between adjacent grid lines (negative when flipped).
    #[must_use]
    pub fn pixel_spacing(&self) -> f64 {
        self.pixel_spacing
    }

    /// Offset expressed in unrotated pixels.
    #[must_use]
    pub fn pixel_offset(&self) -> DVec2 {
        self.pixel_offset
    }

    /// The plane value drawn at the viewport centre.
    #[must_use]
    pub fn view_center(&self) -> Complex {
        -self.state.offset
    }

    /// Plane units spanned by one horizontal pixel.
    #[must_use]
    pub fn units_per_pixel(&self) -> f64 {
        2.0 * self.state.half_range.abs() / self.viewport.width
    }

    // ── Setters ─────────────────────────────────────────────────────

    /// Zoom. `|h|` must lie within the limits and `h` must keep the sign of
    /// the current half-range; only [`flip_half_range`](Self::flip_half_range)
    /// changes the sign.
    pub fn set_half_range(&mut self, h: f64) -> Result<(), PlaneError> {
        let same_sign =
            h.is_sign_negative() == self.state.half_range.is_sign_negative();
        if !self.limits.admits(h) || !same_sign {
            return Err(PlaneError::InvalidRange { value: h });
        }
        self.state.half_range = h;
        self.update_caches();
        Ok(())
    }

    /// Mirror the view through its centre by negating the half-range.
    ///
    /// A genuine discontinuity; used between the two legs of a flip
    /// transition.
    pub fn flip_half_range(&mut self) {
        self.state.half_range = -self.state.half_range;
        self.update_caches();
    }

    /// Pan. Real-line mode drops the imaginary part.
    pub fn set_offset(&mut self, offset: Complex) -> Result<(), PlaneError> {
        let offset = if self.state.real_mode {
            Complex::real(offset.re)
        } else {
            offset
        };
        if !offset.is_finite() {
            return Err(PlaneError::NonFinite { parameter: "offset" });
        }
        self.state.offset = offset;
        self.update_caches();
        Ok(())
    }

    /// Rotate. Stored modulo 2π; real-line mode keeps phase at 0.
    pub fn set_phase(&mut self, phase: f64) -> Result<(), PlaneError> {
        if !phase.is_finite() {
            return Err(PlaneError::NonFinite { parameter: "phase" });
        }
        self.state.phase = if self.state.real_mode {
            0.0
        } else {
            phase.rem_euclid(TAU)
        };
        Ok(())
    }

    /// Change the grid spacing.
    pub fn set_spacing(&mut self, spacing: f64) -> Result<(), PlaneError> {
        validate_spacing(spacing)?;
        self.state.spacing = spacing;
        self.update_caches();
        Ok(())
    }

    /// Host reported a new surface size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.update_caches();
    }

    /// Move the content by a pointer drag of `delta` pixels.
    pub fn pan_by_pixels(&mut self, delta: DVec2) {
        let unrotated = rotation(-self.state.phase) * delta;
        let shift = unrotated / self.scale();
        if let Err(e) = self.set_offset(self.state.offset + Complex::from(shift)) {
            log::debug!("pan by {delta} ignored: {e}");
        }
    }

    /// Keep the grid readable across zoom levels: once `|h|` leaves
    /// `(spacing, base² · spacing)`, spacing becomes `|h| / base`.
    ///
    /// Returns whether the spacing changed.
    pub fn adjust_spacing(&mut self, base_half_range: f64) -> bool {
        let h = self.state.half_range.abs();
        let spacing = self.state.spacing;
        if h < base_half_range * base_half_range * spacing && h > spacing {
            return false;
        }
        let adjusted = h / base_half_range;
        if adjusted == spacing {
            return false;
        }
        self.set_spacing(adjusted).is_ok()
    }

    // ── Conversions ─────────────────────────────────────────────────

    /// Exact (unrounded) pixel position of a plane value.
    #[must_use]
    pub fn plane_to_pixel_exact(&self, p: Complex) -> DVec2 {
        let p = if self.state.real_mode {
            Complex::real(p.re)
        } else {
            p
        };
        let unrotated = self.viewport.center()
            + self.scale() * DVec2::from(p)
            + self.pixel_offset;
        self.rotate_about_center(unrotated, self.state.phase)
    }

    /// Pixel position of a plane value, rounded to whole pixels.
    ///
    /// Non-finite positions saturate; use
    /// [`plane_to_pixel_checked`](Self::plane_to_pixel_checked) when the
    /// value may lie at infinity.
    #[must_use]
    pub fn plane_to_pixel(&self, p: Complex) -> IVec2 {
        let exact = self.plane_to_pixel_exact(p).round();
        IVec2::new(exact.x as i32, exact.y as i32)
    }

    /// Pixel position of a plane value, or `None` when it cannot be
    /// represented in pixel space.
    #[must_use]
    pub fn plane_to_pixel_checked(&self, p: Complex) -> Option<DVec2> {
        let exact = self.plane_to_pixel_exact(p);
        let limit = f64::from(i32::MAX);
        (exact.is_finite() && exact.x.abs() < limit && exact.y.abs() < limit)
            .then_some(exact)
    }

    /// Plane value under a pixel position.
    ///
    /// Rounded to the configured decimal places (or finer, when a pixel
    /// spans less than that) so that repeated clicks on the same spot do
    /// not produce values differing only by float noise.
    #[must_use]
    pub fn pixel_to_plane(&self, px: f64, py: f64) -> Complex {
        let unrotated =
            self.rotate_about_center(DVec2::new(px, py), -self.state.phase);
        let v = (unrotated - self.viewport.center() - self.pixel_offset)
            / self.scale();
        let im = if self.state.real_mode { 0.0 } else { v.y };
        Complex::new(v.x, im).round_to(self.effective_decimals())
    }

    /// Plane value under a click, snapped to the nearest grid intersection
    /// when that lies within the snap threshold on both axes.
    ///
    /// In real-line mode snapping is one-dimensional along the line.
    #[must_use]
    pub fn snap_to_grid(&self, px: f64, py: f64) -> Complex {
        let center = self.viewport.center();
        let py = if self.state.real_mode { center.y } else { py };
        let pixel = self.rotate_about_center(DVec2::new(px, py), -self.state.phase);

        let spacing = self.pixel_spacing.abs();
        if !(spacing.is_finite() && spacing > 0.0) {
            return self.pixel_to_plane(px, py);
        }

        let origin = center + self.pixel_offset.rem_euclid(DVec2::splat(spacing));
        let nearest = origin + ((pixel - origin) / spacing).round() * spacing;
        let distance = (nearest - pixel).abs();
        let within_x = distance.x <= self.snap_threshold;
        let within_y = self.state.real_mode || distance.y <= self.snap_threshold;

        if within_x && within_y {
            let nearest = if self.state.real_mode {
                DVec2::new(nearest.x, center.y)
            } else {
                nearest
            };
            let snapped = self.rotate_about_center(nearest, self.state.phase);
            return self.pixel_to_plane(snapped.x, snapped.y);
        }
        self.pixel_to_plane(px, py)
    }

    /// Half-range that fits every value in `values` inside the viewport
    /// with `margin_px` to spare, keeping the current sign.
    ///
    /// `None` when all values sit at the view centre.
    #[must_use]
    pub fn fit_half_range(&self, values: &[Complex], margin_px: f64) -> Option<f64> {
        let center = self.view_center();
        let farthest = values
            .iter()
            .map(|v| (*v - center).norm())
            .filter(|d| d.is_finite())
            .fold(0.0f64, f64::max);
        if farthest <= 0.0 {
            return None;
        }
        let half = self.viewport.width.min(self.viewport.height) / 2.0;
        let factor = if half > margin_px {
            half / (half - margin_px)
        } else {
            1.0
        };
        let sign = if self.state.half_range.is_sign_negative() {
            -1.0
        } else {
            1.0
        };
        Some(self.limits.clamp(sign * farthest * factor))
    }

    /// Rotate a pixel position about the viewport centre.
    #[must_use]
    pub fn rotate_about_center(&self, p: DVec2, angle: f64) -> DVec2 {
        let center = self.viewport.center();
        rotation(angle) * (p - center) + center
    }

    // ── Internals ───────────────────────────────────────────────────

    /// Plane → unrotated pixel scale; the y component is negative so that
    /// the imaginary axis points up.
    fn scale(&self) -> DVec2 {
        let h2 = 2.0 * self.state.half_range;
        DVec2::new(self.viewport.width / h2, -self.viewport.height / h2)
    }

    fn update_caches(&mut self) {
        let scale = self.scale();
        self.pixel_spacing = scale.x * self.state.spacing;
        self.pixel_offset = scale * DVec2::from(self.state.offset);
    }

    fn effective_decimals(&self) -> u32 {
        let per_pixel = self.units_per_pixel();
        if !(per_pixel.is_finite() && per_pixel > 0.0) {
            return self.decimals;
        }
        let needed = (-per_pixel.log10()).ceil() + 1.0;
        if needed > f64::from(self.decimals) {
            needed.min(400.0) as u32
        } else {
            self.decimals
        }
    }
}

/// Screen-space rotation by `angle` (y axis pointing down).
fn rotation(angle: f64) -> DMat2 {
    let (s, c) = angle.sin_cos();
    DMat2::from_cols(DVec2::new(c, -s), DVec2::new(s, c))
}

fn validate_spacing(spacing: f64) -> Result<(), PlaneError> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(PlaneError::InvalidRange { value: spacing })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn frame(width: u32, height: u32, half_range: f64, real_mode: bool) -> CoordinateFrame {
        CoordinateFrame::new(
            Viewport::new(width, height),
            ViewState::new(1.0, half_range, real_mode),
            RangeLimits::default(),
            6.0,
            5,
        )
        .unwrap()
    }

    #[test]
    fn origin_maps_to_center() {
        let f = frame(800, 600, 5.0, false);
        assert_eq!(f.plane_to_pixel(Complex::ZERO), IVec2::new(400, 300));
        // +1 is 80px right, +i is 60px up
        assert_eq!(f.plane_to_pixel(Complex::ONE), IVec2::new(480, 300));
        assert_eq!(f.plane_to_pixel(Complex::new(0.0, 1.0)), IVec2::new(400, 240));
    }

    #[test]
    fn derived_caches_follow_setters() {
        let mut f = frame(800, 800, 5.0, false);
        assert_eq!(f.pixel_spacing(), 80.0);
        f.set_half_range(10.0).unwrap();
        assert_eq!(f.pixel_spacing(), 40.0);
        f.set_offset(Complex::new(1.0, 2.0)).unwrap();
        assert_eq!(f.pixel_offset(), DVec2::new(40.0, -80.0));
        f.set_spacing(2.0).unwrap();
        assert_eq!(f.pixel_spacing(), 80.0);
    }

    #[test]
    fn offset_moves_view_center() {
        let mut f = frame(800, 800, 5.0, false);
        f.set_offset(Complex::new(-2.0, 1.0)).unwrap();
        assert_eq!(f.view_center(), Complex::new(2.0, -1.0));
        assert_eq!(f.plane_to_pixel(Complex::new(2.0, -1.0)), IVec2::new(400, 400));
        assert_eq!(f.pixel_to_plane(400.0, 400.0), Complex::new(2.0, -1.0));
    }

    #[test]
    fn invalid_half_ranges_are_rejected() {
        let mut f = frame(800, 800, 5.0, false);
        for bad in [0.0, -1.0, 1e101, 1e-101, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(f.set_half_range(bad), Err(PlaneError::InvalidRange { .. })),
                "{bad} accepted"
            );
        }
        assert_eq!(f.half_range(), 5.0);
        assert!(f.set_spacing(0.0).is_err());
    }

    #[test]
    fn non_finite_offset_and_phase_are_rejected() {
        let mut f = frame(800, 800, 5.0, false);
        f.set_offset(Complex::new(1.0, -1.0)).unwrap();
        f.set_phase(0.5).unwrap();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                f.set_offset(Complex::new(bad, 0.0)),
                Err(PlaneError::NonFinite { parameter: "offset" })
            ));
            assert!(f.set_offset(Complex::new(0.0, bad)).is_err());
            assert!(matches!(
                f.set_phase(bad),
                Err(PlaneError::NonFinite { parameter: "phase" })
            ));
        }
        assert_eq!(f.offset(), Complex::new(1.0, -1.0));
        assert_eq!(f.phase(), 0.5);
        let center = f.pixel_to_plane(400.0, 400.0);
        assert!(center.is_finite());
        assert!(center.approx_eq(Complex::new(-1.0, 1.0)), "{center}");
    }

    #[test]
    fn flip_is_the_only_sign_change() {
        let mut f = frame(800, 800, 5.0, true);
        f.flip_half_range();
        assert_eq!(f.half_range(), -5.0);
        assert!(f.set_half_range(3.0).is_err());
        f.set_half_range(-3.0).unwrap();
        // flipped line: positive values drawn left of centre
        assert!(f.plane_to_pixel(Complex::ONE).x < 400);
    }

    #[test]
    fn real_mode_ignores_imaginary_parts() {
        let mut f = frame(800, 800, 5.0, true);
        f.set_phase(1.0).unwrap();
        assert_eq!(f.phase(), 0.0);
        f.set_offset(Complex::new(1.0, 3.0)).unwrap();
        assert_eq!(f.offset(), Complex::real(1.0));
        assert_eq!(f.plane_to_pixel(Complex::new(0.0, 4.0)).y, 400);
        assert_eq!(f.pixel_to_plane(400.0, 17.0).im, 0.0);
    }

    #[test]
    fn rotation_by_quarter_turn() {
        let mut f = frame(800, 800, 5.0, false);
        f.set_phase(FRAC_PI_2).unwrap();
        // +1 rotated a quarter turn counter-clockwise lands where +i was
        assert_eq!(f.plane_to_pixel(Complex::ONE), IVec2::new(400, 320));
        assert_eq!(f.pixel_to_plane(400.0, 320.0), Complex::ONE);
    }

    #[test]
    fn phase_is_stored_mod_tau() {
        let mut f = frame(800, 800, 5.0, false);
        f.set_phase(-0.5).unwrap();
        assert!((f.phase() - (TAU - 0.5)).abs() < 1e-12);
        f.set_phase(3.0 * PI).unwrap();
        assert!((f.phase() - PI).abs() < 1e-12);
    }

    #[test]
    fn round_trip_within_a_pixel() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut f = frame(800, 600, rng.random_range(0.01..1000.0), false);
            f.set_phase(rng.random_range(0.0..TAU)).unwrap();
            f.set_offset(Complex::new(
                rng.random_range(-50.0..50.0),
                rng.random_range(-50.0..50.0),
            ))
            .unwrap();
            let px = rng.random_range(0..800);
            let py = rng.random_range(0..600);
            let back = f.plane_to_pixel(f.pixel_to_plane(f64::from(px), f64::from(py)));
            assert!((back.x - px).abs() <= 1 && (back.y - py).abs() <= 1);
        }
    }

    #[test]
    fn round_trip_survives_deep_zoom() {
        let mut f = frame(800, 800, 1e-40, false);
        f.set_offset(Complex::new(-1e-39, 0.0)).unwrap();
        let back = f.plane_to_pixel(f.pixel_to_plane(123.0, 456.0));
        assert_eq!(back, IVec2::new(123, 456));
    }

    #[test]
    fn rotation_preserves_distance_on_square_viewport() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut f = frame(800, 800, 5.0, false);
        for _ in 0..100 {
            let a = Complex::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            let b = Complex::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0));
            f.set_phase(0.0).unwrap();
            let d0 = f.plane_to_pixel_exact(a).distance(f.plane_to_pixel_exact(b));
            f.set_phase(rng.random_range(0.0..TAU)).unwrap();
            let d1 = f.plane_to_pixel_exact(a).distance(f.plane_to_pixel_exact(b));
            assert!((d0 - d1).abs() < 1e-9);
        }
    }

    #[test]
    fn snap_to_nearby_intersection() {
        let f = frame(800, 800, 5.0, false);
        // (1, 1) sits at pixel (480, 320)
        assert_eq!(f.snap_to_grid(484.0, 317.0), Complex::new(1.0, 1.0));
        // too far on one axis: raw conversion
        let raw = f.snap_to_grid(490.0, 317.0);
        assert_eq!(raw, f.pixel_to_plane(490.0, 317.0));
    }

    #[test]
    fn snap_in_real_mode_is_one_dimensional() {
        let f = frame(800, 800, 5.0, true);
        assert_eq!(f.snap_to_grid(563.0, 100.0), Complex::real(2.0));
        assert_eq!(f.snap_to_grid(530.0, 400.0), Complex::real(1.625));
    }

    #[test]
    fn snap_follows_rotation_and_offset() {
        let mut f = frame(800, 800, 5.0, false);
        f.set_offset(Complex::new(0.5, 0.0)).unwrap();
        f.set_phase(0.3).unwrap();
        let grid_point = Complex::new(2.0, -1.0);
        let pixel = f.plane_to_pixel_exact(grid_point) + DVec2::new(3.0, -2.0);
        assert_eq!(f.snap_to_grid(pixel.x, pixel.y), grid_point);
    }

    /// Random view over a random viewport; a third of them on the real
    /// line and half of them flipped.
    fn random_frame(rng: &mut StdRng, i: usize) -> CoordinateFrame {
        let width = rng.random_range(200..1200);
        let height = rng.random_range(200..1200);
        let max_half_range = (f64::from(width) / 4.0).min(50.0);
        let real_mode = i % 3 == 0;
        let mut f = frame(width, height, rng.random_range(0.5..max_half_range), real_mode);
        if i % 2 == 0 {
            f.flip_half_range();
        }
        f.set_phase(rng.random_range(0.0..TAU)).unwrap();
        f.set_offset(Complex::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0),
        ))
        .unwrap();
        f
    }

    #[test]
    fn snap_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        for i in 0..400 {
            let f = random_frame(&mut rng, i);
            let viewport = f.viewport();
            let px = rng.random_range(0.0..viewport.width).round();
            let py = rng.random_range(0.0..viewport.height).round();
            let once = f.snap_to_grid(px, py);
            let pixel = f.plane_to_pixel(once);
            let twice = f.snap_to_grid(f64::from(pixel.x), f64::from(pixel.y));
            assert!(once.approx_eq(twice), "{f:?}: {once} vs {twice}");
        }
    }

    #[test]
    fn round_trip_on_any_viewport_and_mode() {
        let mut rng = StdRng::seed_from_u64(19);
        for i in 0..400 {
            let f = random_frame(&mut rng, i);
            let viewport = f.viewport();
            let px = rng.random_range(0.0..viewport.width).round();
            let py = rng.random_range(0.0..viewport.height).round();
            let back = f.plane_to_pixel_exact(f.pixel_to_plane(px, py));
            assert!((back.x - px).abs() <= 1.0, "{f:?}: {back} vs ({px}, {py})");
            if f.real_mode() {
                assert!(f.pixel_to_plane(px, py).im.is_sign_positive());
                assert!((back.y - viewport.center().y).abs() < 1e-6);
            } else {
                assert!((back.y - py).abs() <= 1.0, "{f:?}: {back} vs ({px}, {py})");
            }
        }
    }

    #[test]
    fn pan_follows_pointer_under_rotation() {
        let mut f = frame(800, 800, 5.0, false);
        f.set_phase(1.2).unwrap();
        let p = Complex::new(1.5, -0.5);
        let before = f.plane_to_pixel_exact(p);
        f.pan_by_pixels(DVec2::new(25.0, -10.0));
        let after = f.plane_to_pixel_exact(p);
        assert!((after - before - DVec2::new(25.0, -10.0)).length() < 1e-9);
    }

    #[test]
    fn fit_keeps_margin_and_sign() {
        let mut f = frame(800, 800, 5.0, true);
        let h = f.fit_half_range(&[Complex::real(-3.0), Complex::real(9.0)], 20.0).unwrap();
        assert!((h - 9.0 * 400.0 / 380.0).abs() < 1e-12);
        f.flip_half_range();
        let h = f.fit_half_range(&[Complex::real(9.0)], 20.0).unwrap();
        assert!(h < 0.0);
        assert!(f.fit_half_range(&[Complex::ZERO], 20.0).is_none());
    }

    #[test]
    fn spacing_adjusts_outside_readable_band() {
        let mut f = frame(800, 800, 5.0, false);
        assert!(!f.adjust_spacing(5.0));
        f.set_half_range(0.5).unwrap();
        assert!(f.adjust_spacing(5.0));
        assert!((f.spacing() - 0.1).abs() < 1e-12);
        f.set_half_range(500.0).unwrap();
        assert!(f.adjust_spacing(5.0));
        assert!((f.spacing() - 100.0).abs() < 1e-9);
    }
}
