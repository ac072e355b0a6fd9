//! Core angle type for the conversion engine.
//!
//! [`Angle`] stores radians and carries a pair of normalization bounds,
//! `[0, 2pi)` unless changed with [`Angle::set_bounds`]. Values are never
//! wrapped implicitly; call [`Angle::normalize`] when the bounds should apply.
//!
//! # Quick Start
//!
//! ```
//! use skyconv_core::Angle;
//! use skyconv_core::angle::AngleUnit;
//!
//! // Infallible numeric constructors
//! let a = Angle::from_degrees(45.0);
//! assert!((a.hours() - 3.0).abs() < 1e-12);
//!
//! // Fallible constructors accept anything the parser accepts
//! let ra = Angle::parse_hours("14:24:56.9957071015656").unwrap();
//! assert!((ra.degrees() - 216.23748211292319).abs() < 1e-9);
//!
//! let dec = Angle::new("-23d26m21.45s", AngleUnit::Degrees).unwrap();
//! assert!(dec.degrees() < 0.0);
//! ```
//!
//! # Equality
//!
//! Two angles compare equal when their radian values are equal; bounds are
//! working state and do not take part in comparisons.

use super::input::AngleInput;
use super::normalize::Bounds;
use super::parse;
use super::sexagesimal::{degrees_to_dms, hours_to_hms, Sexagesimal};
use super::units::AngleUnit;
use crate::constants::{DEGREES_PER_HOUR, HALF_PI, PI};
use crate::ConversionResult;
use std::cmp::Ordering;

#[derive(Copy, Clone, Debug)]
pub struct Angle {
    rad: f64,
    pub(super) bounds: Bounds,
}

impl Angle {
    pub const ZERO: Self = Self::unbounded_const(0.0);

    pub const PI: Self = Self::unbounded_const(PI);

    pub const HALF_PI: Self = Self::unbounded_const(HALF_PI);

    const fn unbounded_const(rad: f64) -> Self {
        Self {
            rad,
            bounds: Bounds::FULL_TURN,
        }
    }

    /// Creates an angle from radians with the default `[0, 2pi)` bounds.
    ///
    /// The `from_*` constructors expect a finite value and check it only in
    /// debug builds. Use [`Angle::new`] for values that may be NaN or infinite.
    #[inline]
    pub fn from_radians(rad: f64) -> Self {
        debug_assert!(rad.is_finite(), "angle must be finite, got {rad}");
        Self::unbounded_const(rad)
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self::from_radians(deg.to_radians())
    }

    /// Creates an angle from hours, where 24h = 360 degrees.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_radians((h * DEGREES_PER_HOUR).to_radians())
    }

    /// Copies the value of `other`, resetting bounds to the default.
    #[inline]
    pub fn from_angle(other: &Angle) -> Self {
        Self::from_radians(other.rad)
    }

    /// Parses `input` as a value in `unit`.
    ///
    /// Strings go through the sexagesimal grammar for hours and degrees and
    /// through a plain decimal parse for radians.
    ///
    /// # Errors
    ///
    /// `Format` for unparsable text, `Range` for out-of-range sexagesimal
    /// fields, `NotFinite` for NaN or infinite numbers.
    pub fn new(input: impl Into<AngleInput>, unit: AngleUnit) -> ConversionResult<Self> {
        let input = input.into();
        match unit {
            AngleUnit::Degrees => parse::parse_degrees(input).map(Self::from_degrees),
            AngleUnit::Hours => parse::parse_hours(input).map(Self::from_hours),
            AngleUnit::Radians => parse::parse_radians(input).map(Self::from_radians),
        }
    }

    pub fn parse_degrees(input: impl Into<AngleInput>) -> ConversionResult<Self> {
        Self::new(input, AngleUnit::Degrees)
    }

    pub fn parse_hours(input: impl Into<AngleInput>) -> ConversionResult<Self> {
        Self::new(input, AngleUnit::Hours)
    }

    pub fn parse_radians(input: impl Into<AngleInput>) -> ConversionResult<Self> {
        Self::new(input, AngleUnit::Radians)
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(&self) -> f64 {
        self.rad.to_degrees()
    }

    #[inline]
    pub fn hours(&self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    /// Value expressed in `unit`.
    #[inline]
    pub fn value_in(&self, unit: AngleUnit) -> f64 {
        match unit {
            AngleUnit::Degrees => self.degrees(),
            AngleUnit::Hours => self.hours(),
            AngleUnit::Radians => self.rad,
        }
    }

    /// Hours as an `(h, m, s)` triplet; fails when |hours| >= 24.
    pub fn hms(&self) -> ConversionResult<Sexagesimal> {
        hours_to_hms(self.hours())
    }

    /// Degrees as a `(d, m, s)` triplet.
    pub fn dms(&self) -> ConversionResult<Sexagesimal> {
        degrees_to_dms(self.degrees())
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        self.rad.cos()
    }

    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_radians(self.rad.abs())
    }

    #[inline]
    pub(super) fn with_radians(self, rad: f64) -> Self {
        Self { rad, ..self }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        self.rad == other.rad
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.rad.partial_cmp(&other.rad)
    }
}

/// Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Shorthand for [`Angle::from_hours`].
#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}
