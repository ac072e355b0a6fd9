//! Sidereal time at Greenwich from the USNO low-precision expressions.
//!
//! With `jd0` the Julian Date of the preceding midnight, `h` the UT hours since
//! then, `d = jd - 2451545.0`, `d0 = jd0 - 2451545.0` and `t = d / 36525`:
//!
//! ```text
//! GMST = 6.697374558 + 0.06570982441908 d0 + 0.000026 t^2 + 1.00273790935 h
//! GAST = GMST + dpsi cos(eps)
//!   eps   = 23.4393 - 0.0000004 d          (degrees)
//!   L     = 280.47 + 0.98565 d             (degrees)
//!   Omega = 125.04 - 0.052954 d            (degrees)
//!   dpsi  = -0.000319 sin(Omega) - 0.000024 sin(2L)   (hours)
//! ```
//!
//! Both results are wrapped into `[0, 24)`.

use super::time::SiderealTime;
use crate::calendar::{datetime_to_jd, ymd_to_jd};
use crate::timestamp::{utc_offset, CalendarTimestamp};
use chrono::{Datelike, Duration, FixedOffset, NaiveDate};
use skyconv_core::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_HOUR};
use skyconv_core::math::wrap_hours;
use skyconv_core::{ConversionError, ConversionResult};

/// Mean solar to sidereal rate.
const SIDEREAL_RATE: f64 = 1.00273790935;

/// Sidereal to mean solar rate used when inverting GMST.
const SOLAR_RATE: f64 = 0.9972695663;

fn mean_hours(jd: f64) -> f64 {
    let jd0 = (jd - 0.5).round_ties_even() + 0.5;
    let h = (jd - jd0) * 24.0;
    let d = jd - J2000_JD;
    let d0 = jd0 - J2000_JD;
    let t = d / DAYS_PER_JULIAN_CENTURY;

    6.697374558 + 0.06570982441908 * d0 + 0.000026 * t * t + SIDEREAL_RATE * h
}

/// Nutation in longitude projected onto the equator, in hours.
fn equation_of_equinoxes(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let eps = (23.4393 - 0.0000004 * d).to_radians();
    let l = (280.47 + 0.98565 * d).to_radians();
    let omega = (125.04 - 0.052954 * d).to_radians();
    let dpsi = -0.000319 * omega.sin() - 0.000024 * (2.0 * l).sin();
    dpsi * eps.cos()
}

/// Greenwich mean sidereal time at a UT Julian Date.
pub fn gmst_from_jd(jd: f64) -> SiderealTime {
    SiderealTime::from_hours(mean_hours(jd))
}

/// Greenwich apparent sidereal time at a UT Julian Date.
pub fn gast_from_jd(jd: f64) -> SiderealTime {
    SiderealTime::from_hours(mean_hours(jd) + equation_of_equinoxes(jd))
}

/// GMST for a timestamp; `tz` anchors a timestamp that carries no offset.
///
/// This is the mean value without the nutation term: with nutation the LST
/// at 172.235 E for JD 2455893.66045 would miss 19:46:48.8 by about 1 s.
/// [`compute_gast`] applies the correction.
///
/// # Errors
///
/// `MissingTimezone` when no offset is known.
pub fn compute_gmst(
    ts: &CalendarTimestamp,
    tz: Option<FixedOffset>,
) -> ConversionResult<SiderealTime> {
    let jd = datetime_to_jd(ts, tz)?;
    let gmst = gmst_from_jd(jd);
    tracing::debug!(jd, gmst = gmst.hours(), "computed mean sidereal time");
    Ok(gmst)
}

/// GAST for a timestamp, nutation-corrected.
pub fn compute_gast(
    ts: &CalendarTimestamp,
    tz: Option<FixedOffset>,
) -> ConversionResult<SiderealTime> {
    let jd = datetime_to_jd(ts, tz)?;
    let gast = gast_from_jd(jd);
    tracing::debug!(jd, gast = gast.hours(), "computed apparent sidereal time");
    Ok(gast)
}

/// UTC instant on `date` at which Greenwich mean sidereal time equals `gmst`.
///
/// Sidereal days are shorter than solar days, so on a date where one GMST
/// value occurs twice this returns the earlier instant.
///
/// ```
/// use chrono::NaiveDate;
/// use skyconv_time::{gmst_to_utc, SiderealTime};
///
/// let date = NaiveDate::from_ymd_opt(1980, 4, 22).unwrap();
/// let gst = SiderealTime::parse("4:40:05.23", "hours").unwrap();
/// let ut = gmst_to_utc(date, gst).unwrap();
/// assert_eq!((ut.hour(), ut.minute(), ut.second()), (14, 36, 51));
/// ```
pub fn gmst_to_utc(date: NaiveDate, gmst: SiderealTime) -> ConversionResult<CalendarTimestamp> {
    let jd0 = ymd_to_jd(date.year(), date.month(), f64::from(date.day()));
    let t = (jd0 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t0 = wrap_hours(6.697374558 + 2400.051336 * t + 0.000025862 * t * t);
    let ut_hours = wrap_hours(gmst.hours() - t0) * SOLAR_RATE;

    let micros = (ut_hours * SECONDS_PER_HOUR * 1e6).round() as i64;
    let local = date
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.checked_add_signed(Duration::microseconds(micros)))
        .ok_or_else(|| {
            ConversionError::invalid_date(date.year(), date.month(), date.day(), "out of range")
        })?;

    Ok(CalendarTimestamp::from_naive(local).with_offset(utc_offset()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmst_at_j2000() {
        let gmst = gmst_from_jd(J2000_JD);
        assert!((gmst.hours() - 18.697374558).abs() < 1e-8);
    }

    #[test]
    fn test_gast_applies_nutation() {
        let gast = gast_from_jd(J2000_JD);
        assert!((gast.hours() - 18.69714279805709).abs() < 1e-10);
    }

    #[test]
    fn test_compute_gmst_from_timestamp() {
        let ts = CalendarTimestamp::utc(2000, 1, 1, 12, 0, 0, 0).unwrap();
        let gmst = compute_gmst(&ts, None).unwrap();
        assert!((gmst.hours() - 18.697374558).abs() < 1e-8);

        let naive = CalendarTimestamp::new(2000, 1, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(
            compute_gast(&naive, None),
            Err(ConversionError::MissingTimezone)
        );
    }

    #[test]
    fn test_output_in_range_over_a_day() {
        let mut jd = 2455893.0;
        while jd < 2455894.0 {
            for st in [gmst_from_jd(jd), gast_from_jd(jd)] {
                assert!((0.0..24.0).contains(&st.hours()), "jd {}", jd);
            }
            jd += 0.01;
        }
    }

    #[test]
    fn test_gmst_to_utc_inverts_gmst() {
        let date = NaiveDate::from_ymd_opt(1980, 4, 22).unwrap();
        let gst = SiderealTime::from_hours(4.668119444444445);
        let ut = gmst_to_utc(date, gst).unwrap();
        assert_eq!((ut.day(), ut.hour(), ut.minute(), ut.second()), (22, 14, 36, 51));

        let back = compute_gmst(&ut, None).unwrap();
        assert!((back.hours() - gst.hours()).abs() < 1e-5);
    }
}
