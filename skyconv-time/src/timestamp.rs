//! Calendar timestamps with an optional UTC offset.
//!
//! A [`CalendarTimestamp`] is a wall-clock reading (year through microsecond)
//! plus an optional fixed offset from UTC. The offset is what anchors the
//! reading to an instant: conversions to Julian Date refuse a timestamp that
//! has none unless the caller supplies one.
//!
//! Named zones are supported through any [`chrono::TimeZone`]; they are
//! resolved to the fixed offset in force at that wall-clock time.
//!
//! ```
//! use skyconv_time::CalendarTimestamp;
//!
//! let local = CalendarTimestamp::new(2011, 11, 28, 14, 30, 0, 0)
//!     .unwrap()
//!     .with_offset_hours(10.0)
//!     .unwrap();
//! let utc = local.to_utc().unwrap();
//! assert_eq!((utc.day(), utc.hour()), (28, 4));
//! ```

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Timelike, Utc,
};
use skyconv_core::angle::{decimal_hours_of_day, AngleInput};
use skyconv_core::constants::SECONDS_PER_HOUR;
use skyconv_core::{ConversionError, ConversionResult};
use std::fmt;

/// Wall-clock date and time, optionally anchored to UTC by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTimestamp {
    local: NaiveDateTime,
    offset: Option<FixedOffset>,
}

/// The zero offset.
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}

/// Builds a fixed offset from decimal hours east of Greenwich.
///
/// The offset is rounded to the nearest second and must lie strictly within
/// 24 hours.
pub fn offset_from_hours(hours: f64) -> ConversionResult<FixedOffset> {
    if !hours.is_finite() {
        return Err(ConversionError::not_finite("UTC offset", hours));
    }
    if hours.abs() >= 24.0 {
        return Err(ConversionError::invalid_offset(hours));
    }
    let seconds = (hours * SECONDS_PER_HOUR).round() as i32;
    FixedOffset::east_opt(seconds).ok_or_else(|| ConversionError::invalid_offset(hours))
}

impl CalendarTimestamp {
    /// Builds a timestamp with no offset.
    ///
    /// # Errors
    ///
    /// `InvalidDate` when the fields do not name a real date and time.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> ConversionResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| ConversionError::invalid_date(year, month, day, "no such date"))?;
        let time = NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond).ok_or_else(
            || ConversionError::invalid_date(year, month, day, "time of day out of range"),
        )?;
        Ok(Self::from_naive(date.and_time(time)))
    }

    /// Builds a timestamp already expressed in UTC.
    pub fn utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> ConversionResult<Self> {
        Ok(Self::new(year, month, day, hour, minute, second, microsecond)?.with_offset(utc_offset()))
    }

    #[inline]
    pub fn from_naive(local: NaiveDateTime) -> Self {
        Self {
            local,
            offset: None,
        }
    }

    /// Takes the wall-clock reading and the offset in force from `datetime`.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self {
            local: datetime.naive_local(),
            offset: Some(datetime.offset().fix()),
        }
    }

    pub fn now_utc() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Attaches `offset` without moving the wall clock.
    #[inline]
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    /// Attaches an offset given in decimal hours east of UTC.
    pub fn with_offset_hours(self, hours: f64) -> ConversionResult<Self> {
        Ok(self.with_offset(offset_from_hours(hours)?))
    }

    /// Attaches the offset `tz` has at this wall-clock time.
    ///
    /// # Errors
    ///
    /// `InvalidDate` when the wall-clock time is skipped or repeated in `tz`.
    pub fn with_timezone<Tz: TimeZone>(self, tz: &Tz) -> ConversionResult<Self> {
        let offset = tz
            .offset_from_local_datetime(&self.local)
            .single()
            .ok_or_else(|| {
                ConversionError::invalid_date(
                    self.year(),
                    self.month(),
                    self.day(),
                    "wall-clock time is ambiguous or missing in the given zone",
                )
            })?;
        Ok(self.with_offset(offset.fix()))
    }

    /// The same instant expressed in UTC.
    ///
    /// # Errors
    ///
    /// `MissingTimezone` when the timestamp has no offset.
    pub fn to_utc(&self) -> ConversionResult<Self> {
        self.in_offset(utc_offset())
    }

    /// The same instant expressed at another fixed offset.
    pub fn in_offset(&self, target: FixedOffset) -> ConversionResult<Self> {
        let offset = self.offset.ok_or_else(ConversionError::missing_timezone)?;
        let shift = i64::from(target.local_minus_utc() - offset.local_minus_utc());
        let local = self
            .local
            .checked_add_signed(Duration::seconds(shift))
            .ok_or_else(|| {
                ConversionError::invalid_date(
                    self.year(),
                    self.month(),
                    self.day(),
                    "shifted timestamp out of range",
                )
            })?;
        Ok(Self {
            local,
            offset: Some(target),
        })
    }

    /// Resolves to a `chrono` datetime when an offset is known.
    pub fn to_datetime(&self) -> ConversionResult<DateTime<FixedOffset>> {
        let offset = self.offset.ok_or_else(ConversionError::missing_timezone)?;
        offset.from_local_datetime(&self.local).single().ok_or_else(|| {
            ConversionError::invalid_date(self.year(), self.month(), self.day(), "unresolvable")
        })
    }

    #[inline]
    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }

    #[inline]
    pub fn has_offset(&self) -> bool {
        self.offset.is_some()
    }

    #[inline]
    pub fn naive_local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.local.time()
    }

    pub fn year(&self) -> i32 {
        self.local.year()
    }

    pub fn month(&self) -> u32 {
        self.local.month()
    }

    pub fn day(&self) -> u32 {
        self.local.day()
    }

    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    pub fn second(&self) -> u32 {
        self.local.second()
    }

    pub fn microsecond(&self) -> u32 {
        self.local.nanosecond() / 1_000
    }

    /// `hour + minute/60 + (second + microsecond/1e6)/3600` of the wall clock.
    pub fn decimal_hours(&self) -> f64 {
        decimal_hours_of_day(&self.local.time())
    }
}

impl From<NaiveDateTime> for CalendarTimestamp {
    fn from(local: NaiveDateTime) -> Self {
        Self::from_naive(local)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarTimestamp {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

/// A timestamp used as an angle reads as its decimal hour of the day.
impl From<CalendarTimestamp> for AngleInput {
    fn from(ts: CalendarTimestamp) -> Self {
        AngleInput::TimeOfDay(ts.time())
    }
}

impl fmt::Display for CalendarTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.local.format("%Y-%m-%dT%H:%M:%S%.6f"))?;
        match self.offset {
            Some(offset) => write!(f, "{}", offset),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyconv_core::angle::parse_hours;

    #[test]
    fn test_invalid_fields_rejected() {
        assert!(matches!(
            CalendarTimestamp::new(2011, 2, 30, 0, 0, 0, 0),
            Err(ConversionError::InvalidDate { .. })
        ));
        assert!(CalendarTimestamp::new(2011, 13, 1, 0, 0, 0, 0).is_err());
        assert!(CalendarTimestamp::new(2011, 1, 1, 24, 0, 0, 0).is_err());
    }

    #[test]
    fn test_offset_bounds() {
        assert_eq!(offset_from_hours(-5.5).unwrap().local_minus_utc(), -19_800);
        assert!(matches!(
            offset_from_hours(24.0),
            Err(ConversionError::InvalidOffset { .. })
        ));
        assert!(matches!(
            offset_from_hours(f64::NAN),
            Err(ConversionError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_to_utc_crosses_midnight() {
        let ts = CalendarTimestamp::new(2011, 11, 28, 2, 15, 0, 0)
            .unwrap()
            .with_offset_hours(5.0)
            .unwrap();
        let utc = ts.to_utc().unwrap();
        assert_eq!((utc.day(), utc.hour(), utc.minute()), (27, 21, 15));
        assert_eq!(utc.offset(), Some(utc_offset()));
    }

    #[test]
    fn test_to_utc_needs_offset() {
        let ts = CalendarTimestamp::new(2011, 11, 28, 2, 15, 0, 0).unwrap();
        assert_eq!(ts.to_utc(), Err(ConversionError::MissingTimezone));
    }

    #[test]
    fn test_from_chrono_datetime() {
        let east = FixedOffset::east_opt(3600).unwrap();
        let dt = east.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        let ts = CalendarTimestamp::from(dt);
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.to_utc().unwrap().hour(), 11);
        assert_eq!(ts.to_datetime().unwrap(), dt);
    }

    #[test]
    fn test_with_timezone_resolves_offset() {
        let ts = CalendarTimestamp::new(2020, 6, 1, 12, 0, 0, 0)
            .unwrap()
            .with_timezone(&FixedOffset::west_opt(7 * 3600).unwrap())
            .unwrap();
        assert_eq!(ts.offset().map(|o| o.local_minus_utc()), Some(-25_200));
    }

    #[test]
    fn test_decimal_hours_and_angle_input() {
        let ts = CalendarTimestamp::utc(2011, 11, 28, 4, 30, 2, 592_000).unwrap();
        let expected = 4.0 + 30.0 / 60.0 + 2.592 / 3600.0;
        assert!((ts.decimal_hours() - expected).abs() < 1e-12);
        assert!((parse_hours(ts).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let ts = CalendarTimestamp::utc(2011, 11, 28, 4, 30, 2, 592_000).unwrap();
        assert_eq!(ts.to_string(), "2011-11-28T04:30:02.592000+00:00");
        let naive = CalendarTimestamp::new(2011, 11, 28, 4, 30, 2, 0).unwrap();
        assert_eq!(naive.to_string(), "2011-11-28T04:30:02.000000");
    }
}
