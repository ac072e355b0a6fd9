//! Bounds and in-place normalization for [`Angle`].
//!
//! Every angle carries a `(low, high)` pair in radians, `[0, 2pi)` by default.
//! [`Angle::normalize`] applies this rule, which is kept exactly as stated
//! even though it is asymmetric:
//!
//! | Condition | New value |
//! |-----------|-----------|
//! | `value < low` | `value mod high` |
//! | `value >= high` and `low == 0` | `value mod high` |
//! | `value >= high` and `low != 0` | `value mod low` |
//! | otherwise | unchanged |
//!
//! `mod` is floored: the result takes the sign of the divisor. A divisor of
//! zero would be undefined, so the other bound is used in its place.
//!
//! # Example
//!
//! ```
//! use skyconv_core::Angle;
//! use skyconv_core::angle::AngleUnit;
//!
//! let mut a = Angle::from_degrees(216.25);
//! a.set_bounds(-180.0, 180.0, AngleUnit::Degrees);
//! a.normalize();
//! assert!((a.degrees() + 143.75).abs() < 1e-9);
//! ```

use super::core::Angle;
use super::units::AngleUnit;
use crate::constants::TWOPI;
use crate::math::floor_mod;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Normalization bounds in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    low: f64,
    high: f64,
}

impl Bounds {
    /// `[0, 2pi)`.
    pub const FULL_TURN: Self = Self {
        low: 0.0,
        high: TWOPI,
    };

    /// Builds bounds from values expressed in `unit`.
    pub fn new(low: f64, high: f64, unit: AngleUnit) -> Self {
        Self {
            low: unit.to_radians(low),
            high: unit.to_radians(high),
        }
    }

    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Applies the wrap rule to a radian value.
    pub fn wrap(&self, rad: f64) -> f64 {
        if rad < self.low {
            wrap_by(rad, self.high, self.low)
        } else if rad >= self.high {
            if self.low == 0.0 {
                wrap_by(rad, self.high, self.low)
            } else {
                wrap_by(rad, self.low, self.high)
            }
        } else {
            rad
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::FULL_TURN
    }
}

fn wrap_by(rad: f64, divisor: f64, fallback: f64) -> f64 {
    if divisor != 0.0 {
        floor_mod(rad, divisor)
    } else if fallback != 0.0 {
        floor_mod(rad, fallback)
    } else {
        rad
    }
}

impl Angle {
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replaces the normalization bounds; `low` and `high` are in `unit`.
    pub fn set_bounds(&mut self, low: f64, high: f64, unit: AngleUnit) {
        self.bounds = Bounds::new(low, high, unit);
    }

    /// Returns a copy with new bounds.
    pub fn with_bounds(mut self, low: f64, high: f64, unit: AngleUnit) -> Self {
        self.set_bounds(low, high, unit);
        self
    }

    /// Rewrites the stored value so it lies within the bounds.
    pub fn normalize(&mut self) {
        let before = self.radians();
        let after = self.bounds.wrap(before);
        if after != before {
            tracing::trace!(
                before,
                after,
                low = self.bounds.low,
                high = self.bounds.high,
                "normalized angle"
            );
        }
        *self = self.with_radians(after);
    }

    /// Non-mutating [`normalize`](Self::normalize).
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEG: f64 = 216.23748211292319;
    const EPSILON: f64 = 1e-12;

    fn floor_mod_360(v: f64) -> f64 {
        floor_mod(v, 360.0)
    }

    #[test]
    fn test_bounds_sequence_preserves_direction() {
        let mut angle = Angle::from_degrees(DEG);

        angle.set_bounds(-180.0, 180.0, AngleUnit::Degrees);
        angle.normalize();
        assert!(angle.degrees() < 0.0);
        assert!((floor_mod_360(angle.degrees()) - DEG).abs() < 1e-9);

        angle.set_bounds(-270.0, 90.0, AngleUnit::Degrees);
        angle.normalize();
        assert!((floor_mod_360(angle.degrees()) - DEG).abs() < 1e-9);

        angle.set_bounds(-360.0, 0.0, AngleUnit::Degrees);
        angle.normalize();
        assert!((floor_mod_360(angle.degrees()) - DEG).abs() < 1e-9);

        angle.set_bounds(0.0, 360.0, AngleUnit::Degrees);
        angle.normalize();
        assert!((angle.degrees() - DEG).abs() < 1e-9);
    }

    #[test]
    fn test_default_bounds_wrap_full_turn() {
        let a = Angle::from_degrees(370.0).normalized();
        assert!((a.degrees() - 10.0).abs() < 1e-9);

        let b = Angle::from_degrees(-10.0).normalized();
        assert!((b.degrees() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_upper_wrap_uses_low_when_nonzero() {
        let bounds = Bounds::new(-180.0, 180.0, AngleUnit::Degrees);
        let wrapped = bounds.wrap(270f64.to_radians());
        assert!((wrapped.to_degrees() + 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_in_range_value_untouched() {
        let bounds = Bounds::new(-90.0, 90.0, AngleUnit::Degrees);
        assert_eq!(bounds.wrap(0.5), 0.5);
    }

    #[test]
    fn test_zero_high_bound_falls_back() {
        let bounds = Bounds::new(-360.0, 0.0, AngleUnit::Degrees);
        let wrapped = bounds.wrap((-400f64).to_radians());
        assert!(wrapped.is_finite());
        assert!((wrapped.to_degrees() + 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_hours_bounds() {
        let bounds = Bounds::new(0.0, 12.0, AngleUnit::Hours);
        assert!((bounds.high() - crate::constants::PI).abs() < EPSILON);
    }

    #[test]
    fn test_with_bounds_keeps_value() {
        let a = Angle::from_degrees(45.0).with_bounds(-180.0, 180.0, AngleUnit::Degrees);
        assert!((a.degrees() - 45.0).abs() < EPSILON);
        assert!((a.bounds().low() + crate::constants::PI).abs() < EPSILON);
    }
}
