//! Calendar date <-> Julian Date conversions.
//!
//! Both directions follow Duffett-Smith, *Practical Astronomy with your
//! Calculator*. Dates after 1582, and 1582 dates with month >= 10 and
//! day >= 15, are Gregorian; everything else is read as a Julian calendar date,
//! so JD 2299159.5 is 1582-10-04 and the next day, JD 2299160.5, is 1582-10-15.
//! The day test is applied on its own, so 1582-11-01 to 1582-11-14 and
//! 1582-12-01 to 1582-12-14 are read as Julian dates by [`ymd_to_jd`].
//!
//! ```
//! use skyconv_time::{jd_to_calendar, ymd_to_jd};
//!
//! assert_eq!(ymd_to_jd(2000, 1, 1.5), 2451545.0);
//!
//! let ts = jd_to_calendar(2455893.68753).unwrap();
//! assert_eq!((ts.year(), ts.month(), ts.day()), (2011, 11, 28));
//! assert_eq!((ts.hour(), ts.minute(), ts.second()), (4, 30, 2));
//! ```

use crate::julian::JulianDate;
use crate::timestamp::{utc_offset, CalendarTimestamp};
use chrono::{Datelike, Duration, FixedOffset, NaiveDate};
use skyconv_core::constants::{GREGORIAN_CUTOVER_JDN, HOURS_PER_DAY, MJD_ZERO_POINT};
use skyconv_core::{ConversionError, ConversionResult};

const MICROSECONDS_PER_DAY: f64 = 86_400_000_000.0;

/// Julian Date at the start of `day` (which may carry a fraction).
///
/// January and February count as months 13 and 14 of the previous year.
pub fn ymd_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let (y, m) = (f64::from(y), f64::from(m));

    let b = if is_gregorian(year, month, day) {
        let a = (y / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    let c = if y < 0.0 {
        (365.25 * y - 0.75).trunc()
    } else {
        (365.25 * y).trunc()
    };
    let d = (30.6001 * (m + 1.0)).trunc();

    b + c + d + day + 1_720_994.5
}

fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    year > 1582 || (year == 1582 && month >= 10 && day >= 15.0)
}

pub fn ymd_to_mjd(year: i32, month: u32, day: f64) -> f64 {
    jd_to_mjd(ymd_to_jd(year, month, day))
}

/// `jd - 2400000.5`.
///
/// Exact for JDs between 1.2e6 and 4.8e6; use
/// [`ModifiedJulianDate`](crate::ModifiedJulianDate) for a lossless round trip
/// at any magnitude.
#[inline]
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - MJD_ZERO_POINT
}

#[inline]
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + MJD_ZERO_POINT
}

/// Converts a Julian Date to a UTC timestamp, resolved to the microsecond.
///
/// # Errors
///
/// `NotFinite` for NaN or infinite input, `InvalidDate` when the result falls
/// outside the representable calendar range.
pub fn jd_to_calendar(jd: f64) -> ConversionResult<CalendarTimestamp> {
    if !jd.is_finite() {
        return Err(ConversionError::not_finite("Julian Date", jd));
    }

    let shifted = jd + 0.5;
    let i = shifted.floor();
    let f = shifted - i;

    let b = if i > GREGORIAN_CUTOVER_JDN {
        let a = ((i - 1_867_216.25) / 36_524.25).floor();
        i + 1.0 + a - (a / 4.0).floor()
    } else {
        i
    };

    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.25 * d).floor();
    let g = ((c - e) / 30.6001).floor();

    let day = c - e + f - (30.6001 * g).floor();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    let whole_day = day.floor();
    let micros = ((day - whole_day) * MICROSECONDS_PER_DAY).round() as i64;

    let (year, month, whole_day) = (year as i32, month as u32, whole_day as u32);
    let midnight = NaiveDate::from_ymd_opt(year, month, whole_day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            ConversionError::invalid_date(year, month, whole_day, "not a representable date")
        })?;
    let local = midnight
        .checked_add_signed(Duration::microseconds(micros))
        .ok_or_else(|| ConversionError::invalid_date(year, month, whole_day, "out of range"))?;

    tracing::debug!(jd, %local, "converted Julian Date to calendar");
    Ok(CalendarTimestamp::from_naive(local).with_offset(utc_offset()))
}

/// [`jd_to_calendar`] re-expressed at a fixed offset.
pub fn jd_to_calendar_in(jd: f64, offset: FixedOffset) -> ConversionResult<CalendarTimestamp> {
    jd_to_calendar(jd)?.in_offset(offset)
}

pub fn mjd_to_calendar(mjd: f64) -> ConversionResult<CalendarTimestamp> {
    jd_to_calendar(mjd_to_jd(mjd))
}

pub fn mjd_to_calendar_in(mjd: f64, offset: FixedOffset) -> ConversionResult<CalendarTimestamp> {
    jd_to_calendar_in(mjd_to_jd(mjd), offset)
}

/// Two-part Julian Date of a timestamp: the JD of its UTC date plus the day fraction.
///
/// An offset carried by `ts` wins over `tz`; `tz` only anchors a timestamp
/// that has none.
///
/// # Errors
///
/// `MissingTimezone` when neither `ts` nor `tz` supplies an offset.
pub fn datetime_to_julian(
    ts: &CalendarTimestamp,
    tz: Option<FixedOffset>,
) -> ConversionResult<JulianDate> {
    let anchored = match (ts.offset(), tz) {
        (Some(_), _) => *ts,
        (None, Some(offset)) => ts.with_offset(offset),
        (None, None) => return Err(ConversionError::missing_timezone()),
    };
    let utc = anchored.to_utc()?;
    let date = utc.date();

    let jd = JulianDate::new(
        ymd_to_jd(date.year(), date.month(), f64::from(date.day())),
        utc.decimal_hours() / HOURS_PER_DAY,
    );
    tracing::debug!(timestamp = %anchored, jd = jd.to_f64(), "converted timestamp to Julian Date");
    Ok(jd)
}

/// [`datetime_to_julian`] collapsed to a single `f64`.
pub fn datetime_to_jd(ts: &CalendarTimestamp, tz: Option<FixedOffset>) -> ConversionResult<f64> {
    datetime_to_julian(ts, tz).map(|jd| jd.to_f64())
}

pub fn datetime_to_mjd(ts: &CalendarTimestamp, tz: Option<FixedOffset>) -> ConversionResult<f64> {
    datetime_to_julian(ts, tz).map(|jd| jd.to_mjd().value())
}
