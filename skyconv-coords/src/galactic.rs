use crate::constants::EQUATORIAL_TO_GALACTIC;
use crate::equatorial::{spherical_degrees, EquatorialCoordinate};
use skyconv_core::math::{rotate_transposed, vincenty_angular_separation, wrap_degrees};
use skyconv_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Galactic longitude `l` in `[0, 360)` degrees and latitude `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticCoordinate {
    l: Angle,
    b: Angle,
}

impl GalacticCoordinate {
    /// Longitude is wrapped into `[0, 360)`.
    pub fn from_degrees(l_deg: f64, b_deg: f64) -> Self {
        Self {
            l: Angle::from_degrees(wrap_degrees(l_deg)),
            b: Angle::from_degrees(b_deg),
        }
    }

    pub fn new(l: Angle, b: Angle) -> Self {
        Self::from_degrees(l.degrees(), b.degrees())
    }

    pub fn galactic_center() -> Self {
        Self::from_degrees(0.0, 0.0)
    }

    pub fn north_galactic_pole() -> Self {
        Self::from_degrees(0.0, 90.0)
    }

    pub fn l(&self) -> Angle {
        self.l
    }

    pub fn b(&self) -> Angle {
        self.b
    }

    pub fn unit_vector(&self) -> [f64; 3] {
        let (sin_b, cos_b) = self.b.sin_cos();
        let (sin_l, cos_l) = self.l.sin_cos();
        [cos_l * cos_b, sin_l * cos_b, sin_b]
    }

    /// Back to J2000 equatorial through the transposed rotation.
    pub fn to_equatorial(&self) -> EquatorialCoordinate {
        let (ra, dec) = spherical_degrees(rotate_transposed(
            &EQUATORIAL_TO_GALACTIC,
            self.unit_vector(),
        ));
        EquatorialCoordinate::from_degrees(ra, dec)
    }

    pub fn angular_separation(&self, other: &Self) -> Angle {
        let (sin_b1, cos_b1) = self.b.sin_cos();
        let (sin_b2, cos_b2) = other.b.sin_cos();
        let delta_l = self.l.radians() - other.l.radians();

        Angle::from_radians(vincenty_angular_separation(
            sin_b1, cos_b1, sin_b2, cos_b2, delta_l,
        ))
    }
}

impl From<&EquatorialCoordinate> for GalacticCoordinate {
    fn from(eq: &EquatorialCoordinate) -> Self {
        eq.to_galactic()
    }
}

impl fmt::Display for GalacticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l={:.6} b={:+.6}", self.l.degrees(), self.b.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_equatorial() {
        for (ra, dec) in [(10.0, 20.0), (200.0, -45.0), (359.5, 0.1), (83.6, 22.01)] {
            let eq = EquatorialCoordinate::from_degrees(ra, dec);
            let back = eq.to_galactic().to_equatorial();
            assert!(eq.angular_separation(&back).degrees() < 1e-6, "{} {}", ra, dec);
        }
    }

    #[test]
    fn test_pole_maps_near_matrix_pole() {
        let eq = GalacticCoordinate::north_galactic_pole().to_equatorial();
        assert!((eq.ra().degrees() - 192.85948).abs() < 1e-3);
        assert!((eq.dec().degrees() - 27.12825).abs() < 1e-3);
    }

    #[test]
    fn test_longitude_wraps() {
        let g = GalacticCoordinate::from_degrees(-10.0, 5.0);
        assert!((g.l().degrees() - 350.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let g = GalacticCoordinate::from_degrees(96.5, -60.25);
        assert_eq!(g.to_string(), "l=96.500000 b=-60.250000");
    }
}
