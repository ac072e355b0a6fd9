//! Tagged input accepted by the parser and the fallible angle constructors.
//!
//! Every shape a caller may hand to [`parse_hours`](super::parse_hours) or
//! [`parse_degrees`](super::parse_degrees) converts into one [`AngleInput`]
//! variant through `From`, so call sites stay terse:
//!
//! ```
//! use skyconv_core::angle::{parse_degrees, parse_hours};
//!
//! assert_eq!(parse_hours(12.5).unwrap(), 12.5);
//! assert_eq!(parse_hours("12:30:00").unwrap(), 12.5);
//! assert_eq!(parse_degrees((-10.0, 30.0, 0.0)).unwrap(), -10.5);
//! ```

use super::{Angle, Sexagesimal};
use crate::constants::{MICROSECONDS_PER_SECOND, MINUTES_PER_HOUR, SECONDS_PER_HOUR};
use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone, Timelike};

#[derive(Debug, Clone, PartialEq)]
pub enum AngleInput {
    /// A plain decimal value in the requested unit.
    Number(f64),
    /// Decimal or sexagesimal text.
    Text(String),
    /// `(whole, minutes, seconds)` components.
    Triplet(Sexagesimal),
    /// An existing angle, converted to the requested unit.
    Angle(Angle),
    /// A wall-clock time, read as decimal hours of the day.
    TimeOfDay(NaiveTime),
}

impl AngleInput {
    /// Short description used in error messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Number(v) => v.to_string(),
            Self::Text(s) => s.clone(),
            Self::Triplet(t) => format!("({}, {}, {})", t.whole, t.minutes, t.seconds),
            Self::Angle(a) => format!("{} rad", a.radians()),
            Self::TimeOfDay(t) => t.to_string(),
        }
    }
}

/// `hour + minute/60 + (second + microsecond/1e6)/3600`.
pub fn decimal_hours_of_day(time: &NaiveTime) -> f64 {
    let micros = f64::from(time.nanosecond() / 1_000);
    f64::from(time.hour())
        + f64::from(time.minute()) / MINUTES_PER_HOUR
        + (f64::from(time.second()) + micros / MICROSECONDS_PER_SECOND) / SECONDS_PER_HOUR
}

impl From<f64> for AngleInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AngleInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AngleInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AngleInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for AngleInput {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Sexagesimal> for AngleInput {
    fn from(triplet: Sexagesimal) -> Self {
        Self::Triplet(triplet)
    }
}

impl From<(f64, f64, f64)> for AngleInput {
    fn from(triplet: (f64, f64, f64)) -> Self {
        Self::Triplet(triplet.into())
    }
}

impl From<[f64; 3]> for AngleInput {
    fn from(triplet: [f64; 3]) -> Self {
        Self::Triplet(triplet.into())
    }
}

impl From<Angle> for AngleInput {
    fn from(angle: Angle) -> Self {
        Self::Angle(angle)
    }
}

impl From<&Angle> for AngleInput {
    fn from(angle: &Angle) -> Self {
        Self::Angle(*angle)
    }
}

impl From<NaiveTime> for AngleInput {
    fn from(time: NaiveTime) -> Self {
        Self::TimeOfDay(time)
    }
}

impl From<NaiveDateTime> for AngleInput {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::TimeOfDay(datetime.time())
    }
}

/// Uses the wall-clock time in the timestamp's own zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for AngleInput {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::TimeOfDay(datetime.time())
    }
}
