use crate::constants::EQUATORIAL_TO_GALACTIC;
use crate::ecliptic::EclipticCoordinate;
use crate::galactic::GalacticCoordinate;
use crate::parse::parse_ra_dec;
use crate::ra_dec::{Declination, RightAscension};
use skyconv_core::angle::{degrees_to_string, hours_to_string, AngleInput, AngleUnit, Separator};
use skyconv_core::math::{rotate, vincenty_angular_separation, wrap_degrees, wrap_hours};
use skyconv_core::{Angle, ConversionError, ConversionResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A J2000 right ascension / declination pair.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    ra: RightAscension,
    dec: Declination,
}

impl EquatorialCoordinate {
    pub fn new(ra: RightAscension, dec: Declination) -> Self {
        Self { ra, dec }
    }

    /// Builds a coordinate from loose values: right ascension in hours and
    /// declination in degrees unless already angles.
    ///
    /// ```
    /// use skyconv_coords::EquatorialCoordinate;
    ///
    /// let c = EquatorialCoordinate::parse_pair("14:24:57", "-05:22:30.5").unwrap();
    /// assert!((c.ra().hours() - 14.415833333333333).abs() < 1e-12);
    /// assert!(c.dec().degrees() < 0.0);
    /// ```
    pub fn parse_pair(
        ra: impl Into<AngleInput>,
        dec: impl Into<AngleInput>,
    ) -> ConversionResult<Self> {
        Ok(Self::new(RightAscension::parse(ra)?, Declination::parse(dec)?))
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(
            RightAscension::from_degrees(ra_deg),
            Declination::from_degrees(dec_deg),
        )
    }

    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Self::new(
            RightAscension::from_hours(ra_hours),
            Declination::from_degrees(dec_deg),
        )
    }

    pub fn ra(&self) -> RightAscension {
        self.ra
    }

    pub fn dec(&self) -> Declination {
        self.dec
    }

    pub fn unit_vector(&self) -> [f64; 3] {
        let (sin_dec, cos_dec) = self.dec.sin_cos();
        let (sin_ra, cos_ra) = self.ra.sin_cos();
        [cos_dec * cos_ra, cos_dec * sin_ra, sin_dec]
    }

    /// Direction of a Cartesian vector; right ascension lands in `[0, 2pi)`.
    pub fn from_vector(v: [f64; 3]) -> Self {
        let (lon, lat) = spherical_degrees(v);
        Self::from_degrees(lon, lat)
    }

    /// Great-circle distance to `other` by Vincenty's formula.
    pub fn angular_separation(&self, other: &Self) -> Angle {
        let (sin_dec1, cos_dec1) = self.dec.sin_cos();
        let (sin_dec2, cos_dec2) = other.dec.sin_cos();
        let delta_ra = self.ra.radians() - other.ra.radians();

        Angle::from_radians(vincenty_angular_separation(
            sin_dec2, cos_dec2, sin_dec1, cos_dec1, delta_ra,
        ))
    }

    pub fn to_galactic(&self) -> GalacticCoordinate {
        let (l, b) = spherical_degrees(rotate(&EQUATORIAL_TO_GALACTIC, self.unit_vector()));
        GalacticCoordinate::from_degrees(l, b)
    }

    pub fn to_ecliptic(&self) -> EclipticCoordinate {
        EclipticCoordinate::from_equatorial(self)
    }

    /// `J{HHMMSS.ss}{+|-}{DDMMSS.s}`, the designation used in survey names.
    ///
    /// ```
    /// use skyconv_coords::EquatorialCoordinate;
    ///
    /// let c = EquatorialCoordinate::parse_pair("14:24:57", "-05:22:30.5").unwrap();
    /// assert_eq!(c.to_j_string(), "J142457.00-052230.5");
    /// ```
    pub fn to_j_string(&self) -> String {
        let ra = hours_to_string(wrap_hours(self.ra.hours()), 2, true, &Separator::none());
        let dec = self.dec.degrees();
        let sign = if dec < 0.0 { '-' } else { '+' };
        let dec = degrees_to_string(dec.abs(), 1, true, &Separator::none());
        format!("J{ra}{sign}{dec}")
    }
}

impl FromStr for EquatorialCoordinate {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ra, dec) = parse_ra_dec(s)?;
        Ok(Self::new(ra, dec))
    }
}

impl fmt::Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ra, self.dec)
    }
}

/// `(lon, lat)` in degrees of a Cartesian vector, longitude in `[0, 360)`.
pub(crate) fn spherical_degrees(v: [f64; 3]) -> (f64, f64) {
    let [x, y, z] = v;
    let r = libm::hypot(x, y);
    let lon = libm::atan2(y, x).to_degrees();
    let lat = libm::atan2(z, r).to_degrees();
    (wrap_degrees(lon), lat)
}

/// Angle subtended by two points on a sphere, with every input and the result
/// in `units`.
///
/// In hours mode all four values are hours, latitudes included.
///
/// ```
/// use skyconv_coords::subtends;
///
/// let d = subtends(0.0, 0.0, 90.0, 0.0, "degrees").unwrap();
/// assert!((d - 90.0).abs() < 1e-12);
/// ```
pub fn subtends(a1: f64, b1: f64, a2: f64, b2: f64, units: &str) -> ConversionResult<f64> {
    let unit: AngleUnit = units.parse()?;
    let rad = |v: f64| unit.to_radians(v);
    let (sin_b1, cos_b1) = rad(b1).sin_cos();
    let (sin_b2, cos_b2) = rad(b2).sin_cos();

    let separation =
        vincenty_angular_separation(sin_b2, cos_b2, sin_b1, cos_b1, rad(a1) - rad(a2));
    Ok(unit.from_radians(separation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separation_identity_and_symmetry() {
        let a = EquatorialCoordinate::from_degrees(10.0, 10.0);
        let b = EquatorialCoordinate::from_degrees(20.0, 20.0);
        assert_eq!(a.angular_separation(&a).radians(), 0.0);

        let ab = a.angular_separation(&b).degrees();
        let ba = b.angular_separation(&a).degrees();
        assert!((ab - ba).abs() < 1e-12);
        assert!((ab - 13.892338505402504).abs() < 1e-9);
    }

    #[test]
    fn test_separation_antipodal_and_near_pole() {
        let a = EquatorialCoordinate::from_degrees(0.0, 0.0);
        let b = EquatorialCoordinate::from_degrees(180.0, 0.0);
        assert!((a.angular_separation(&b).degrees() - 180.0).abs() < 1e-12);

        let p = EquatorialCoordinate::from_degrees(0.0, 89.0);
        let q = EquatorialCoordinate::from_degrees(180.0, 89.0);
        assert!((p.angular_separation(&q).degrees() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_galactic_pole_and_center() {
        let ngp = EquatorialCoordinate::from_degrees(192.85948, 27.12825).to_galactic();
        assert!((ngp.b().degrees() - 90.0).abs() < 1e-4);

        let gc = EquatorialCoordinate::from_degrees(266.40499, -28.93617).to_galactic();
        let l = gc.l().degrees();
        assert!(l < 1e-4 || l > 360.0 - 1e-4, "l = {}", l);
        assert!(gc.b().degrees().abs() < 1e-4);
    }

    #[test]
    fn test_galactic_reference_point() {
        let g = EquatorialCoordinate::from_degrees(0.0, 0.0).to_galactic();
        assert!((g.l().degrees() - 96.33726955796409).abs() < 1e-8);
        assert!((g.b().degrees() + 60.18855172347175).abs() < 1e-8);
    }

    #[test]
    fn test_galactic_longitude_wrapped() {
        for ra in [0.0, 45.0, 123.0, 250.0, 359.0] {
            let l = EquatorialCoordinate::from_degrees(ra, -30.0).to_galactic().l().degrees();
            assert!((0.0..360.0).contains(&l));
        }
    }

    #[test]
    fn test_j_string() {
        let c = EquatorialCoordinate::from_hours_degrees(1.0 + 2.0 / 60.0 + 3.4 / 3600.0, 5.5);
        assert_eq!(c.to_j_string(), "J010203.40+053000.0");

        let c: EquatorialCoordinate = "J010203.40+053000.0".parse().unwrap();
        assert!((c.dec().degrees() - 5.5).abs() < 1e-12);

        let c = EquatorialCoordinate::from_hours_degrees(-1.0, -0.25);
        assert_eq!(c.to_j_string(), "J230000.00-001500.0");
    }

    #[test]
    fn test_display() {
        let c = EquatorialCoordinate::from_hours_degrees(5.5, -5.375138888888889);
        assert_eq!(c.to_string(), "05:30:00.000 -05:22:30.50");
    }

    #[test]
    fn test_subtends_units() {
        let deg = subtends(10.0, 10.0, 20.0, 20.0, "degrees").unwrap();
        assert!((deg - 13.892338505402504).abs() < 1e-9);

        let rad = subtends(0.0, 0.0, std::f64::consts::PI, 0.0, "radians").unwrap();
        assert!((rad - std::f64::consts::PI).abs() < 1e-12);

        let hrs = subtends(0.0, 0.0, 6.0, 0.0, "hours").unwrap();
        assert!((hrs - 6.0).abs() < 1e-12);

        assert!(matches!(
            subtends(0.0, 0.0, 1.0, 1.0, "arcmin"),
            Err(ConversionError::IllegalUnits { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let c = EquatorialCoordinate::from_hours_degrees(14.5, -5.25);
        let json = serde_json::to_string(&c).unwrap();
        let back: EquatorialCoordinate = serde_json::from_str(&json).unwrap();
        assert!(c.angular_separation(&back).radians() < 1e-12);

        let g = c.to_galactic();
        let json = serde_json::to_string(&g).unwrap();
        let back: GalacticCoordinate = serde_json::from_str(&json).unwrap();
        assert!(g.angular_separation(&back).radians() < 1e-12);
    }
}
