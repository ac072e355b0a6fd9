//! Calendar dates, Julian Dates and sidereal time.
//!
//! Timestamps are [`CalendarTimestamp`] values: a local wall-clock reading
//! with an optional UTC offset. Conversions that need an absolute instant take
//! an extra `Option<FixedOffset>` that anchors a timestamp without one, and
//! fail with `MissingTimezone` when neither supplies it.
//!
//! ```
//! use skyconv_time::{compute_gmst, datetime_to_jd, parse_timestamp};
//!
//! let ts = parse_timestamp("2000-01-01T12:00:00Z").unwrap();
//! assert_eq!(datetime_to_jd(&ts, None).unwrap(), 2451545.0);
//!
//! let gmst = compute_gmst(&ts, None).unwrap();
//! assert_eq!(gmst.to_string(), "18:41:50.548");
//! ```

pub mod calendar;
pub mod julian;
pub mod parsing;
pub mod sidereal;
pub mod timestamp;

pub use calendar::{
    datetime_to_jd, datetime_to_julian, datetime_to_mjd, jd_to_calendar, jd_to_calendar_in,
    jd_to_mjd, mjd_to_calendar, mjd_to_calendar_in, mjd_to_jd, ymd_to_jd, ymd_to_mjd,
};
pub use julian::{JulianDate, ModifiedJulianDate};
pub use parsing::parse_timestamp;
pub use sidereal::{
    compute_gast, compute_gmst, gast_from_jd, gmst_from_jd, gmst_to_lst, gmst_to_utc,
    local_sidereal_time, lst_to_gmst, Longitude, LongitudeDirection, SiderealTime,
};
pub use timestamp::{offset_from_hours, utc_offset, CalendarTimestamp};
