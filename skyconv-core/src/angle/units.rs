//! The three angular units understood by the parser and formatter.

use crate::constants::{DEGREES_PER_HOUR, DEG_TO_RAD, RAD_TO_DEG};
use crate::{ConversionError, ConversionResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit names accepted by [`AngleUnit::from_str`], compared case-insensitively.
pub const VALID_UNITS: [&str; 3] = ["radians", "degrees", "hours"];

/// Angular unit for parsing, bounds and display.
///
/// ```
/// use skyconv_core::angle::AngleUnit;
///
/// let unit: AngleUnit = "HOURS".parse().unwrap();
/// assert_eq!(unit, AngleUnit::Hours);
/// assert!("furlongs".parse::<AngleUnit>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    Degrees,
    Radians,
    /// Hours of right ascension; 1h = 15 degrees.
    Hours,
}

impl AngleUnit {
    pub fn name(self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
            Self::Hours => "hours",
        }
    }

    /// Converts a value expressed in this unit to radians.
    #[inline]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value * DEG_TO_RAD,
            Self::Radians => value,
            Self::Hours => value * DEGREES_PER_HOUR * DEG_TO_RAD,
        }
    }

    /// Converts radians to a value expressed in this unit.
    #[inline]
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians * RAD_TO_DEG,
            Self::Radians => radians,
            Self::Hours => radians * RAD_TO_DEG / DEGREES_PER_HOUR,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> ConversionResult<Self> {
        let name = s.trim();
        [Self::Radians, Self::Degrees, Self::Hours]
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::illegal_units(s))
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PI;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Degrees".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!(" radians ".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert_eq!("HOURS".parse::<AngleUnit>().unwrap(), AngleUnit::Hours);
    }

    #[test]
    fn test_unknown_unit_is_illegal() {
        let err = "arcmin".parse::<AngleUnit>().unwrap_err();
        assert!(matches!(err, ConversionError::IllegalUnits { ref units } if units == "arcmin"));
    }

    #[test]
    fn test_every_valid_name_parses() {
        for name in VALID_UNITS {
            let unit: AngleUnit = name.parse().unwrap();
            assert_eq!(unit.name(), name);
        }
    }

    #[test]
    fn test_radian_conversions() {
        assert!((AngleUnit::Hours.to_radians(12.0) - PI).abs() < 1e-15);
        assert!((AngleUnit::Degrees.from_radians(PI) - 180.0).abs() < 1e-12);
        assert_eq!(AngleUnit::Radians.to_radians(1.25), 1.25);
    }
}
