//! Base-60 triplets and their decimal conversions.
//!
//! A [`Sexagesimal`] holds `(whole, minutes, seconds)` where `whole` is hours
//! or degrees depending on context. The sign of the whole value lives on the
//! leading field, so `-0.5` hours decomposes to `(-0.0, 30, 0)`: the signed
//! zero is what keeps the value negative.
//!
//! ```
//! use skyconv_core::angle::{hours_to_hms, Sexagesimal};
//!
//! let hms = hours_to_hms(-0.5).unwrap();
//! assert!(hms.is_negative());
//! assert_eq!((hms.minutes, hms.seconds), (30.0, 0.0));
//! assert_eq!(hms.to_decimal(), -0.5);
//! ```

use crate::constants::{MINUTES_PER_HOUR, SECONDS_PER_HOUR};
use crate::{ConversionError, ConversionResult, SexagesimalField};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sexagesimal {
    /// Hours or degrees, carrying the sign of the whole value.
    pub whole: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Sexagesimal {
    pub const fn new(whole: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            whole,
            minutes,
            seconds,
        }
    }

    /// Splits a decimal value into whole, minutes and seconds without range checks.
    pub fn from_decimal(value: f64) -> Self {
        let sign = 1.0_f64.copysign(value);
        let magnitude = value.abs();
        let whole = magnitude.trunc();
        let minutes_full = (magnitude - whole) * MINUTES_PER_HOUR;
        let minutes = minutes_full.trunc();
        let seconds = (minutes_full - minutes) * 60.0;

        Self::new(sign * whole, minutes, seconds)
    }

    /// True when the leading field is negative, including `-0.0`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.whole.is_sign_negative()
    }

    /// `sign * (|whole| + |minutes|/60 + |seconds|/3600)`.
    pub fn to_decimal(&self) -> f64 {
        let sign = 1.0_f64.copysign(self.whole);
        sign * (self.whole.abs()
            + self.minutes.abs() / MINUTES_PER_HOUR
            + self.seconds.abs() / SECONDS_PER_HOUR)
    }

    /// Checks the triplet as hours: leading field in (-24, 24).
    pub fn validate_hours(&self) -> ConversionResult<()> {
        self.check_finite()?;
        if self.whole.abs() >= 24.0 {
            return Err(ConversionError::range(SexagesimalField::Hours, self.whole));
        }
        self.validate_minutes_seconds()
    }

    /// Checks the triplet as degrees: the leading field is unrestricted.
    pub fn validate_degrees(&self) -> ConversionResult<()> {
        self.check_finite()?;
        self.validate_minutes_seconds()
    }

    fn validate_minutes_seconds(&self) -> ConversionResult<()> {
        if !(0.0..60.0).contains(&self.minutes) {
            return Err(ConversionError::range(
                SexagesimalField::Minutes,
                self.minutes,
            ));
        }
        if !(0.0..60.0).contains(&self.seconds) {
            return Err(ConversionError::range(
                SexagesimalField::Seconds,
                self.seconds,
            ));
        }
        Ok(())
    }

    fn check_finite(&self) -> ConversionResult<()> {
        for value in [self.whole, self.minutes, self.seconds] {
            if !value.is_finite() {
                return Err(ConversionError::not_finite("sexagesimal triplet", value));
            }
        }
        Ok(())
    }
}

impl From<(f64, f64, f64)> for Sexagesimal {
    fn from((whole, minutes, seconds): (f64, f64, f64)) -> Self {
        Self::new(whole, minutes, seconds)
    }
}

impl From<[f64; 3]> for Sexagesimal {
    fn from([whole, minutes, seconds]: [f64; 3]) -> Self {
        Self::new(whole, minutes, seconds)
    }
}

/// Decimal hours to a validated `(h, m, s)` triplet.
pub fn hours_to_hms(hours: f64) -> ConversionResult<Sexagesimal> {
    let hms = Sexagesimal::from_decimal(hours);
    hms.validate_hours()?;
    Ok(hms)
}

/// Decimal degrees to a validated `(d, m, s)` triplet.
pub fn degrees_to_dms(degrees: f64) -> ConversionResult<Sexagesimal> {
    let dms = Sexagesimal::from_decimal(degrees);
    dms.validate_degrees()?;
    Ok(dms)
}

/// `(h, m, s)` to decimal hours with the sign taken from `h`.
pub fn hms_to_hours(h: f64, m: f64, s: f64) -> f64 {
    Sexagesimal::new(h, m, s).to_decimal()
}

/// `(d, m, s)` to decimal degrees with the sign taken from `d`.
pub fn dms_to_degrees(d: f64, m: f64, s: f64) -> f64 {
    Sexagesimal::new(d, m, s).to_decimal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_applies_to_whole_magnitude() {
        assert_eq!(dms_to_degrees(-10.0, 30.0, 0.0), -10.5);
        assert_eq!(hms_to_hours(-0.0, 30.0, 0.0), -0.5);
        assert_eq!(hms_to_hours(0.0, 30.0, 0.0), 0.5);
    }

    #[test]
    fn test_from_decimal_components() {
        let dms = Sexagesimal::from_decimal(-23.5);
        assert_eq!(dms.whole, -23.0);
        assert_eq!(dms.minutes, 30.0);
        assert!(dms.seconds.abs() < 1e-9);
    }

    #[test]
    fn test_hour_range_is_open() {
        assert!(hours_to_hms(23.999).is_ok());
        assert!(matches!(
            hours_to_hms(24.0),
            Err(ConversionError::Range {
                field: SexagesimalField::Hours,
                ..
            })
        ));
        assert!(hours_to_hms(-24.0).is_err());
    }

    #[test]
    fn test_degrees_leading_field_unrestricted() {
        let dms = degrees_to_dms(359.5).unwrap();
        assert_eq!(dms.whole, 359.0);
        assert_eq!(dms.minutes, 30.0);
        assert!(degrees_to_dms(-720.25).is_ok());
    }

    #[test]
    fn test_minutes_and_seconds_range() {
        let bad_minutes = Sexagesimal::new(10.0, 60.0, 0.0);
        assert!(matches!(
            bad_minutes.validate_degrees(),
            Err(ConversionError::Range {
                field: SexagesimalField::Minutes,
                ..
            })
        ));

        let bad_seconds = Sexagesimal::new(10.0, 0.0, 60.0);
        assert!(matches!(
            bad_seconds.validate_hours(),
            Err(ConversionError::Range {
                field: SexagesimalField::Seconds,
                ..
            })
        ));

        let negative_minutes = Sexagesimal::new(10.0, -1.0, 0.0);
        assert!(negative_minutes.validate_degrees().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let t = Sexagesimal::new(f64::NAN, 0.0, 0.0);
        assert!(matches!(
            t.validate_degrees(),
            Err(ConversionError::NotFinite { .. })
        ));
    }
}
