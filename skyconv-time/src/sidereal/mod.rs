//! Greenwich and local sidereal time.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`SiderealTime`] | Decimal hours in `[0, 24)` |
//! | [`compute_gmst`] / [`gmst_from_jd`] | Mean sidereal time at Greenwich |
//! | [`compute_gast`] / [`gast_from_jd`] | Apparent sidereal time (mean plus nutation in longitude) |
//! | [`gmst_to_lst`] / [`lst_to_gmst`] | Shift by an observer's longitude |
//! | [`gmst_to_utc`] | Invert GMST to UT on a given date |

mod gmst;
mod lst;
mod time;

pub use gmst::{compute_gast, compute_gmst, gast_from_jd, gmst_from_jd, gmst_to_utc};
pub use lst::{gmst_to_lst, local_sidereal_time, lst_to_gmst, Longitude, LongitudeDirection};
pub use time::SiderealTime;
