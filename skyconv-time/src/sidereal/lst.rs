use super::gmst::compute_gmst;
use super::time::{to_hours, SiderealTime};
use crate::timestamp::CalendarTimestamp;
use chrono::FixedOffset;
use skyconv_core::angle::{parse_in, AngleInput, AngleUnit};
use skyconv_core::{Angle, ConversionError, ConversionResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which way a longitude is measured from Greenwich.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LongitudeDirection {
    West,
    East,
}

impl FromStr for LongitudeDirection {
    type Err = ConversionError;

    /// Accepts `w`, `west`, `e` or `east` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "west" => Ok(Self::West),
            "e" | "east" => Ok(Self::East),
            _ => Err(ConversionError::illegal_direction(s)),
        }
    }
}

impl fmt::Display for LongitudeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::West => "W",
            Self::East => "E",
        })
    }
}

/// An observer longitude: a magnitude and the direction it is measured in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude {
    angle: Angle,
    direction: LongitudeDirection,
}

impl Longitude {
    pub fn new(angle: Angle, direction: LongitudeDirection) -> Self {
        Self { angle, direction }
    }

    pub fn east_degrees(degrees: f64) -> Self {
        Self::new(Angle::from_degrees(degrees), LongitudeDirection::East)
    }

    pub fn west_degrees(degrees: f64) -> Self {
        Self::new(Angle::from_degrees(degrees), LongitudeDirection::West)
    }

    /// Parses a longitude from a value, a unit name and a direction name.
    ///
    /// ```
    /// use skyconv_time::{Longitude, LongitudeDirection};
    ///
    /// let lon = Longitude::parse("172:14:06", "degrees", "E").unwrap();
    /// assert_eq!(lon.direction(), LongitudeDirection::East);
    /// assert!((lon.hours() - 11.4823333).abs() < 1e-6);
    ///
    /// assert!(Longitude::parse(10.0, "degrees", "north").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// `IllegalUnits` for an unknown unit, `IllegalDirection` for an unknown
    /// direction, or the parser's error for `value`.
    pub fn parse(
        value: impl Into<AngleInput>,
        units: &str,
        direction: &str,
    ) -> ConversionResult<Self> {
        let unit: AngleUnit = units.parse()?;
        let direction: LongitudeDirection = direction.parse()?;
        let hours = to_hours(parse_in(value, unit)?, unit);
        Ok(Self::new(Angle::from_hours(hours), direction))
    }

    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn direction(&self) -> LongitudeDirection {
        self.direction
    }

    /// Magnitude in hours.
    pub fn hours(&self) -> f64 {
        self.angle.hours()
    }

    /// Hours east of Greenwich; west longitudes are negative.
    pub fn east_hours(&self) -> f64 {
        match self.direction {
            LongitudeDirection::East => self.hours(),
            LongitudeDirection::West => -self.hours(),
        }
    }
}

/// Local sidereal time from Greenwich sidereal time.
///
/// West longitudes subtract, east longitudes add.
pub fn gmst_to_lst(gmst: SiderealTime, longitude: &Longitude) -> SiderealTime {
    SiderealTime::from_hours(gmst.hours() + longitude.east_hours())
}

/// Greenwich sidereal time from local sidereal time.
pub fn lst_to_gmst(lst: SiderealTime, longitude: &Longitude) -> SiderealTime {
    SiderealTime::from_hours(lst.hours() - longitude.east_hours())
}

/// Local mean sidereal time at `longitude` for a timestamp.
pub fn local_sidereal_time(
    ts: &CalendarTimestamp,
    tz: Option<FixedOffset>,
    longitude: &Longitude,
) -> ConversionResult<SiderealTime> {
    Ok(gmst_to_lst(compute_gmst(ts, tz)?, longitude))
}
