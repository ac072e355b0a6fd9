use skyconv_core::angle::{
    hours_to_hms, hours_to_string, parse_in, AngleInput, AngleUnit, Separator, Sexagesimal,
};
use skyconv_core::constants::DEGREES_PER_HOUR;
use skyconv_core::math::wrap_hours;
use skyconv_core::{Angle, ConversionResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sidereal time in decimal hours, always within `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiderealTime {
    hours: f64,
}

impl SiderealTime {
    /// Wraps `hours` into `[0, 24)`.
    pub fn from_hours(hours: f64) -> Self {
        Self {
            hours: wrap_hours(hours),
        }
    }

    pub fn from_angle(angle: &Angle) -> Self {
        Self::from_hours(angle.hours())
    }

    /// Parses `value` in the named unit (`"hours"`, `"degrees"` or `"radians"`).
    ///
    /// # Errors
    ///
    /// `IllegalUnits` for an unknown unit name, otherwise whatever the angle
    /// parser reports for `value`.
    ///
    /// ```
    /// use skyconv_time::SiderealTime;
    ///
    /// let st = SiderealTime::parse("90", "Degrees").unwrap();
    /// assert_eq!(st.hours(), 6.0);
    /// assert!(SiderealTime::parse("6", "furlongs").is_err());
    /// ```
    pub fn parse(value: impl Into<AngleInput>, units: &str) -> ConversionResult<Self> {
        let unit: AngleUnit = units.parse()?;
        Ok(Self::from_hours(to_hours(parse_in(value, unit)?, unit)))
    }

    #[inline]
    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn degrees(&self) -> f64 {
        self.hours * DEGREES_PER_HOUR
    }

    pub fn angle(&self) -> Angle {
        Angle::from_hours(self.hours)
    }

    /// `(h, m, s)` decomposition.
    pub fn hms(&self) -> ConversionResult<Sexagesimal> {
        hours_to_hms(self.hours)
    }
}

pub(super) fn to_hours(value: f64, unit: AngleUnit) -> f64 {
    match unit {
        AngleUnit::Hours => value,
        AngleUnit::Degrees => value / DEGREES_PER_HOUR,
        AngleUnit::Radians => Angle::from_radians(value).hours(),
    }
}

impl From<SiderealTime> for AngleInput {
    fn from(st: SiderealTime) -> Self {
        AngleInput::Number(st.hours)
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hours_to_string(self.hours, 3, true, &Separator::colon()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyconv_core::ConversionError;

    #[test]
    fn test_from_hours_wraps() {
        assert_eq!(SiderealTime::from_hours(25.5).hours(), 1.5);
        assert_eq!(SiderealTime::from_hours(-1.0).hours(), 23.0);
        assert_eq!(SiderealTime::from_hours(24.0).hours(), 0.0);
    }

    #[test]
    fn test_parse_units() {
        let st = SiderealTime::parse("19:46:48.8", "hours").unwrap();
        assert!((st.hours() - 19.780222222222222).abs() < 1e-12);

        let st = SiderealTime::parse(std::f64::consts::PI, "RADIANS").unwrap();
        assert!((st.hours() - 12.0).abs() < 1e-12);

        assert!(matches!(
            SiderealTime::parse(1.0, "arcmin"),
            Err(ConversionError::IllegalUnits { .. })
        ));
    }

    #[test]
    fn test_hms_and_display() {
        let st = SiderealTime::from_hours(19.780222222222222);
        let hms = st.hms().unwrap();
        assert_eq!((hms.whole, hms.minutes), (19.0, 46.0));
        assert!((hms.seconds - 48.8).abs() < 1e-6);
        assert_eq!(st.to_string(), "19:46:48.800");
    }
}
