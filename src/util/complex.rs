//! Plane values: a small complex number type.
//!
//! Real-line mode stores its values here too, with `im == 0.0`.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::PlaneError;

/// Relative tolerance used when matching plane values by value.
const VALUE_TOLERANCE: f64 = 1e-9;

/// A point of the complex plane (or of the real line when `im == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
}

impl Complex {
    /// The additive identity.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    /// The multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Complex number from its components.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A value on the real line.
    #[must_use]
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Modulus `|z|`.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Argument in `(-π, π]`. Zero has argument `0`.
    #[must_use]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Whether both components are exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Scale both components by a real factor.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.re * factor, self.im * factor)
    }

    /// Tolerant value equality, used wherever plotted points are matched
    /// by value instead of by handle.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        let scale = self.norm().max(other.norm()).max(1.0);
        (self - other).norm() <= VALUE_TOLERANCE * scale
    }

    /// Round both components to `decimals` decimal places.
    #[must_use]
    pub fn round_to(self, decimals: u32) -> Self {
        Self::new(round_decimals(self.re, decimals), round_decimals(self.im, decimals))
    }

    /// Label text for this value.
    ///
    /// Real mode shows only the real part (`"2.5"`); complex mode shows
    /// both (`"2.5 + 1.0i"`, `"2.5 - 1.0i"`).
    #[must_use]
    pub fn label(self, real_mode: bool) -> String {
        if real_mode {
            return format!("{:?}", self.re);
        }
        if self.im.is_sign_negative() {
            format!("{:?} - {:?}i", self.re, -self.im)
        } else {
            format!("{:?} + {:?}i", self.re, self.im)
        }
    }
}

/// Round `value` to `decimals` decimal places.
///
/// Values too large for the scaling to be exact are returned unchanged.
/// Negative zero comes back as `0.0`.
#[must_use]
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 2f64.powi(52) {
        return value + 0.0;
    }
    scaled.round() / factor + 0.0
}

impl From<DVec2> for Complex {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Complex> for DVec2 {
    fn from(z: Complex) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl FromStr for Complex {
    type Err = PlaneError;

    /// Parses `"2"`, `"-1.5"`, `"3i"`, `"-i"`, `"3+4i"`, `"3 - 4i"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let bad = || PlaneError::ParseValue(s.to_owned());
        if compact.is_empty() {
            return Err(bad());
        }

        let Some(body) = compact.strip_suffix('i') else {
            return compact.parse::<f64>().map(Self::real).map_err(|_| bad());
        };

        // Split at the last sign that is not an exponent sign or the
        // leading sign.
        let bytes = body.as_bytes();
        let split = (1..bytes.len()).rev().find(|&i| {
            (bytes[i] == b'+' || bytes[i] == b'-')
                && !matches!(bytes[i - 1], b'e' | b'E')
        });

        let (re_part, im_part) = match split {
            Some(i) => (&body[..i], &body[i..]),
            None => ("", body),
        };
        let im = match im_part {
            "" | "+" => 1.0,
            "-" => -1.0,
            other => other.parse::<f64>().map_err(|_| bad())?,
        };
        let re = if re_part.is_empty() {
            0.0
        } else {
            re_part.parse::<f64>().map_err(|_| bad())?
        };
        Ok(Self::new(re, im))
    }
}
