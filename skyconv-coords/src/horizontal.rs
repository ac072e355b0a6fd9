//! Altitude and azimuth for an observer on the ground.
//!
//! With hour angle `H`, declination `d` and observer latitude `phi`:
//!
//! ```text
//! sin(alt) = sin(d) sin(phi) + cos(d) cos(phi) cos(H)
//! cos(A)   = (sin(d) - sin(alt) sin(phi)) / (cos(alt) cos(phi))
//! ```
//!
//! `acos` only yields `A` in `[0, 180]`; when `sin(H) >= 0` the object is west
//! of the meridian and the azimuth is `360 - A`. Azimuth runs from north
//! through east.

use crate::equatorial::EquatorialCoordinate;
use chrono::FixedOffset;
use skyconv_core::math::wrap_degrees;
use skyconv_core::{Angle, ConversionResult};
use skyconv_time::{local_sidereal_time, CalendarTimestamp, Longitude, SiderealTime};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Altitude above the horizon and azimuth in `[0, 360)` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    altitude: Angle,
    azimuth: Angle,
}

impl HorizontalCoordinate {
    /// Azimuth is wrapped into `[0, 360)`.
    pub fn from_degrees(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            altitude: Angle::from_degrees(altitude_deg),
            azimuth: Angle::from_degrees(wrap_degrees(azimuth_deg)),
        }
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn zenith_angle(&self) -> Angle {
        Angle::HALF_PI - self.altitude
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude.degrees() > 0.0
    }

    pub fn cardinal_direction(&self) -> &'static str {
        let az = self.azimuth.degrees();
        if !(22.5..337.5).contains(&az) {
            "N"
        } else if az < 67.5 {
            "NE"
        } else if az < 112.5 {
            "E"
        } else if az < 157.5 {
            "SE"
        } else if az < 202.5 {
            "S"
        } else if az < 247.5 {
            "SW"
        } else if az < 292.5 {
            "W"
        } else {
            "NW"
        }
    }
}

impl fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alt={:.6} az={:.6}",
            self.altitude.degrees(),
            self.azimuth.degrees()
        )
    }
}

impl EquatorialCoordinate {
    /// Altitude and azimuth seen from `latitude` when the local sidereal time
    /// is `lst`.
    ///
    /// ```
    /// use skyconv_coords::EquatorialCoordinate;
    /// use skyconv_core::Angle;
    /// use skyconv_time::SiderealTime;
    ///
    /// // On the meridian, 30 degrees south of the zenith.
    /// let star = EquatorialCoordinate::from_hours_degrees(6.0, 10.0);
    /// let hz = star.to_horizontal_at(Angle::from_degrees(40.0), SiderealTime::from_hours(6.0));
    /// assert!((hz.altitude().degrees() - 60.0).abs() < 1e-9);
    /// assert!((hz.azimuth().degrees() - 180.0).abs() < 1e-5);
    /// ```
    pub fn to_horizontal_at(&self, latitude: Angle, lst: SiderealTime) -> HorizontalCoordinate {
        let ha = Angle::from_hours(lst.hours() - self.ra().hours());
        let (sin_ha, cos_ha) = ha.sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_lat, cos_lat) = latitude.sin_cos();

        let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_ha).clamp(-1.0, 1.0);
        let alt = sin_alt.asin();

        let denominator = alt.cos() * cos_lat;
        // Zenith or a pole: azimuth is undefined.
        let az = if denominator.abs() < f64::EPSILON {
            0.0
        } else {
            ((sin_dec - sin_alt * sin_lat) / denominator)
                .clamp(-1.0, 1.0)
                .acos()
                .to_degrees()
        };
        let az = if sin_ha < 0.0 { az } else { 360.0 - az };

        HorizontalCoordinate::from_degrees(alt.to_degrees(), az)
    }

    /// Altitude and azimuth for an observer at `latitude` and `longitude` at
    /// the instant `ts`, using local mean sidereal time.
    ///
    /// # Errors
    ///
    /// `MissingTimezone` when neither `ts` nor `tz` supplies a UTC offset.
    pub fn to_horizontal(
        &self,
        latitude: Angle,
        longitude: &Longitude,
        ts: &CalendarTimestamp,
        tz: Option<FixedOffset>,
    ) -> ConversionResult<HorizontalCoordinate> {
        let lst = local_sidereal_time(ts, tz, longitude)?;
        tracing::debug!(lst = lst.hours(), "computing altitude and azimuth");
        Ok(self.to_horizontal_at(latitude, lst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_example() {
        // HA 5h51m44s, dec +23:13:10, latitude 52 N -> alt 19:20:04, az 283:16:16.
        let dec = 23.0 + 13.0 / 60.0 + 10.0 / 3600.0;
        let star = EquatorialCoordinate::from_hours_degrees(0.0, dec);
        let lst = SiderealTime::from_hours(5.0 + 51.0 / 60.0 + 44.0 / 3600.0);
        let hz = star.to_horizontal_at(Angle::from_degrees(52.0), lst);

        assert!((hz.altitude().degrees() - 19.33434522438047).abs() < 1e-9);
        assert!((hz.azimuth().degrees() - 283.27102726727486).abs() < 1e-9);
        assert!((hz.altitude().degrees() - 19.3344444).abs() < 2e-4);
        assert!((hz.azimuth().degrees() - 283.2711111).abs() < 2e-4);
        assert_eq!(hz.cardinal_direction(), "W");
    }

    #[test]
    fn test_east_of_meridian_keeps_acos_azimuth() {
        let star = EquatorialCoordinate::from_hours_degrees(6.0, 0.0);
        let hz = star.to_horizontal_at(Angle::from_degrees(0.0), SiderealTime::from_hours(3.0));
        assert!((hz.altitude().degrees() - 45.0).abs() < 1e-9);
        assert!((hz.azimuth().degrees() - 90.0).abs() < 1e-9);
        assert_eq!(hz.cardinal_direction(), "E");
    }

    #[test]
    fn test_zenith_stays_finite() {
        let star = EquatorialCoordinate::from_hours_degrees(2.0, 40.0);
        let hz = star.to_horizontal_at(Angle::from_degrees(40.0), SiderealTime::from_hours(2.0));
        assert!((hz.altitude().degrees() - 90.0).abs() < 1e-5);
        assert!((0.0..360.0).contains(&hz.azimuth().degrees()));
        assert!(hz.zenith_angle().degrees().abs() < 1e-5);
    }

    #[test]
    fn test_below_horizon() {
        let star = EquatorialCoordinate::from_hours_degrees(0.0, -60.0);
        let hz = star.to_horizontal_at(Angle::from_degrees(50.0), SiderealTime::from_hours(12.0));
        assert!(!hz.is_above_horizon());
        assert!((hz.altitude().degrees() + 80.0).abs() < 1e-9);
        assert!((hz.azimuth().degrees() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_display_wraps_azimuth() {
        let hz = HorizontalCoordinate::from_degrees(12.5, -90.0);
        assert_eq!(hz.to_string(), "alt=12.500000 az=270.000000");
        assert_eq!(hz.cardinal_direction(), "W");
    }
}
