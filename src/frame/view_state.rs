use crate::util::complex::Complex;

/// The user-visible view parameters.
///
/// Only [`CoordinateFrame`](super::CoordinateFrame) holds one, and only its
/// setters change it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Grid spacing in plane units.
    pub spacing: f64,
    /// Half the plane span visible across the viewport width. Negative
    /// only after an explicit flip (real-line mode).
    pub half_range: f64,
    /// Drawing rotation in `[0, 2π)`; always `0` in real-line mode.
    pub phase: f64,
    /// Plane-space translation; the viewport centre shows `-offset`.
    pub offset: Complex,
    /// Real line instead of complex plane.
    pub real_mode: bool,
}

impl ViewState {
    /// Unrotated, uncentred view.
    #[must_use]
    pub fn new(spacing: f64, half_range: f64, real_mode: bool) -> Self {
        Self {
            spacing,
            half_range,
            phase: 0.0,
            offset: Complex::ZERO,
            real_mode,
        }
    }
}

/// Allowed half-range magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeLimits {
    /// Smallest allowed `|half_range|`.
    pub lower: f64,
    /// Largest allowed `|half_range|`; also the largest value magnitude
    /// arithmetic may produce.
    pub upper: f64,
}

impl RangeLimits {
    /// Whether `|value|` is a usable half-range magnitude.
    #[must_use]
    pub fn admits(&self, value: f64) -> bool {
        let magnitude = value.abs();
        value.is_finite() && magnitude >= self.lower && magnitude <= self.upper
    }

    /// Whether a plane value is small enough to be plotted.
    #[must_use]
    pub fn admits_value(&self, value: Complex) -> bool {
        value.is_finite() && value.norm() <= self.upper
    }

    /// Clamp a magnitude into the limits, keeping its sign.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let sign = if value.is_sign_negative() { -1.0 } else { 1.0 };
        sign * value.abs().clamp(self.lower, self.upper)
    }
}

impl Default for RangeLimits {
    fn default() -> Self {
        Self {
            lower: 1e-100,
            upper: 1e100,
        }
    }
}
