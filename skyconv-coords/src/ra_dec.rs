//! Right ascension and declination as thin wrappers over [`Angle`].
//!
//! Both types delegate to the wrapped angle and differ only in the unit they
//! assume for bare numbers and strings: hours for right ascension, degrees for
//! declination. Neither range is clamped.

use skyconv_core::angle::{degrees_to_string, hours_to_string, AngleInput, AngleUnit, Separator};
use skyconv_core::{Angle, ConversionResult, FormatOptions, Sexagesimal};
use skyconv_time::SiderealTime;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! delegate_angle {
    ($name:ident) => {
        impl $name {
            pub fn from_radians(rad: f64) -> Self {
                Self(Angle::from_radians(rad))
            }

            pub fn from_degrees(deg: f64) -> Self {
                Self(Angle::from_degrees(deg))
            }

            pub fn from_hours(h: f64) -> Self {
                Self(Angle::from_hours(h))
            }

            /// Parses `input` in the named unit (`"hours"`, `"degrees"` or `"radians"`).
            pub fn with_units(input: impl Into<AngleInput>, units: &str) -> ConversionResult<Self> {
                let unit: AngleUnit = units.parse()?;
                Angle::new(input, unit).map(Self)
            }

            pub fn angle(&self) -> Angle {
                self.0
            }

            pub fn radians(&self) -> f64 {
                self.0.radians()
            }

            pub fn degrees(&self) -> f64 {
                self.0.degrees()
            }

            pub fn hours(&self) -> f64 {
                self.0.hours()
            }

            pub fn hms(&self) -> ConversionResult<Sexagesimal> {
                self.0.hms()
            }

            pub fn dms(&self) -> ConversionResult<Sexagesimal> {
                self.0.dms()
            }

            pub fn sin_cos(&self) -> (f64, f64) {
                self.0.sin_cos()
            }

            pub fn to_string_with(&self, options: &FormatOptions) -> String {
                self.0.to_string_with(options)
            }
        }

        impl From<Angle> for $name {
            fn from(angle: Angle) -> Self {
                Self(angle)
            }
        }

        impl From<$name> for Angle {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl From<$name> for AngleInput {
            fn from(value: $name) -> Self {
                AngleInput::Angle(value.0)
            }
        }

        impl AsRef<Angle> for $name {
            fn as_ref(&self) -> &Angle {
                &self.0
            }
        }
    };
}

/// A right ascension; bare values are read as hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RightAscension(Angle);

/// A declination; bare values are read as degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Declination(Angle);

delegate_angle!(RightAscension);
delegate_angle!(Declination);

impl RightAscension {
    /// ```
    /// use skyconv_coords::RightAscension;
    ///
    /// let ra = RightAscension::parse("14:24:56.9957071015656").unwrap();
    /// assert!((ra.degrees() - 216.23748211292319).abs() < 1e-9);
    /// ```
    pub fn parse(input: impl Into<AngleInput>) -> ConversionResult<Self> {
        Angle::parse_hours(input).map(Self)
    }

    /// Hour angle `lst - ra` for a local sidereal time given in `units`.
    ///
    /// The result is not wrapped.
    pub fn hour_angle(&self, lst: impl Into<AngleInput>, units: &str) -> ConversionResult<Angle> {
        let unit: AngleUnit = units.parse()?;
        let lst = Angle::new(lst, unit)?;
        Ok(Angle::from_radians(lst.radians() - self.radians()))
    }

    /// Hour angle for a sidereal time, wrapped into `[-12h, 12h)`.
    pub fn hour_angle_at(&self, lst: SiderealTime) -> Angle {
        let ha = lst.hours() - self.hours();
        Angle::from_hours(ha - 24.0 * ((ha + 12.0) / 24.0).floor())
    }

    /// Local sidereal time `ha + ra` at which this right ascension has hour
    /// angle `ha` (given in `units`).
    pub fn lst_for_hour_angle(
        &self,
        ha: impl Into<AngleInput>,
        units: &str,
    ) -> ConversionResult<Angle> {
        let unit: AngleUnit = units.parse()?;
        let ha = Angle::new(ha, unit)?;
        Ok(Angle::from_radians(ha.radians() + self.radians()))
    }
}

impl Declination {
    pub fn parse(input: impl Into<AngleInput>) -> ConversionResult<Self> {
        Angle::parse_degrees(input).map(Self)
    }
}

impl fmt::Display for RightAscension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hours_to_string(self.hours(), 3, true, &Separator::colon()))
    }
}

impl fmt::Display for Declination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.degrees();
        if degrees >= 0.0 {
            f.write_str("+")?;
        }
        f.write_str(&degrees_to_string(degrees, 2, true, &Separator::colon()))
    }
}
