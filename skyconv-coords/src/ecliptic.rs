//! Ecliptic longitude and latitude referred to the J2000 mean equinox.
//!
//! Equatorial vectors turn into ecliptic ones by a rotation of the mean
//! obliquity about the x axis (the equinox direction).

use crate::equatorial::{spherical_degrees, EquatorialCoordinate};
use skyconv_core::math::{rotate, rotate_transposed, wrap_degrees};
use skyconv_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean obliquity of the ecliptic in degrees, `T` Julian centuries from J2000.
///
/// `23 26' 21.45" - 46.815" T - 0.0006" T^2 + 0.00181" T^3`
pub fn mean_obliquity_degrees(t: f64) -> f64 {
    23.0 + 26.0 / 60.0 + (21.45 - 46.815 * t - 0.0006 * t * t + 0.00181 * t * t * t) / 3600.0
}

fn equatorial_to_ecliptic() -> [[f64; 3]; 3] {
    let (sin_eps, cos_eps) = mean_obliquity_degrees(0.0).to_radians().sin_cos();
    [
        [1.0, 0.0, 0.0],
        [0.0, cos_eps, sin_eps],
        [0.0, -sin_eps, cos_eps],
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticCoordinate {
    lambda: Angle,
    beta: Angle,
}

impl EclipticCoordinate {
    /// Longitude is wrapped into `[0, 360)`.
    pub fn from_degrees(lambda_deg: f64, beta_deg: f64) -> Self {
        Self {
            lambda: Angle::from_degrees(wrap_degrees(lambda_deg)),
            beta: Angle::from_degrees(beta_deg),
        }
    }

    pub fn lambda(&self) -> Angle {
        self.lambda
    }

    pub fn beta(&self) -> Angle {
        self.beta
    }

    pub fn from_equatorial(eq: &EquatorialCoordinate) -> Self {
        let (lambda, beta) = spherical_degrees(rotate(&equatorial_to_ecliptic(), eq.unit_vector()));
        Self::from_degrees(lambda, beta)
    }

    pub fn unit_vector(&self) -> [f64; 3] {
        let (sin_b, cos_b) = self.beta.sin_cos();
        let (sin_l, cos_l) = self.lambda.sin_cos();
        [cos_l * cos_b, sin_l * cos_b, sin_b]
    }

    pub fn to_equatorial(&self) -> EquatorialCoordinate {
        let (ra, dec) =
            spherical_degrees(rotate_transposed(&equatorial_to_ecliptic(), self.unit_vector()));
        EquatorialCoordinate::from_degrees(ra, dec)
    }
}

impl fmt::Display for EclipticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lambda={:.6} beta={:+.6}",
            self.lambda.degrees(),
            self.beta.degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obliquity_at_j2000() {
        assert!((mean_obliquity_degrees(0.0) - 23.439291666666666).abs() < 1e-12);
        assert!(mean_obliquity_degrees(1.0) < mean_obliquity_degrees(0.0));
    }

    #[test]
    fn test_equinox_is_fixed() {
        let e = EquatorialCoordinate::from_degrees(0.0, 0.0).to_ecliptic();
        assert!(e.lambda().degrees().abs() < 1e-12);
        assert!(e.beta().degrees().abs() < 1e-12);
    }

    #[test]
    fn test_reference_values() {
        let e = EquatorialCoordinate::from_degrees(143.72252629028003, 19.535734683739964)
            .to_ecliptic();
        assert!((e.lambda().degrees() - 139.6861111111111).abs() < 1e-8);
        assert!((e.beta().degrees() - 4.875277777777773).abs() < 1e-8);

        let e = EquatorialCoordinate::from_degrees(90.0, 0.0).to_ecliptic();
        assert!((e.lambda().degrees() - 90.0).abs() < 1e-9);
        assert!((e.beta().degrees() + 23.43929166666667).abs() < 1e-9);
    }

    #[test]
    fn test_ecliptic_pole() {
        let pole = EquatorialCoordinate::from_degrees(270.0, 90.0 - mean_obliquity_degrees(0.0));
        assert!((pole.to_ecliptic().beta().degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for (ra, dec) in [(10.0, 20.0), (200.0, -45.0), (300.0, 60.0)] {
            let eq = EquatorialCoordinate::from_degrees(ra, dec);
            let back = eq.to_ecliptic().to_equatorial();
            assert!(eq.angular_separation(&back).degrees() < 1e-10);
        }
    }
}
