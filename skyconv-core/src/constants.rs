//! Numeric constants used by the angle, time and coordinate conversions.
//!
//! Everything here is a compile-time `const`; nothing is computed at startup.

pub const PI: f64 = 3.141592653589793238462643;

pub const HALF_PI: f64 = 1.5707963267948966192313216;

pub const TWOPI: f64 = 6.283185307179586476925287;

pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Degrees per hour of right ascension (24h = 360 degrees).
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const MICROSECONDS_PER_SECOND: f64 = 1_000_000.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Offset between Julian Date and Modified Julian Date.
pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

/// Last Julian Day Number still reckoned in the Julian calendar (1582-10-04).
pub const GREGORIAN_CUTOVER_JDN: f64 = 2_299_160.0;
