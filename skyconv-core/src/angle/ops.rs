//! Arithmetic for [`Angle`].
//!
//! The `std::ops` operators cover the statically typed cases: `Angle + Angle`,
//! `Angle - Angle`, `Angle * f64`, `f64 * Angle`, `Angle / f64` and `-Angle`.
//! When the right-hand side is only known at runtime, pass an [`Operand`] to
//! the `try_*` methods, which reject mixed kinds with `TypeMismatch` and a
//! result that overflows with `NotFinite`. The operators expect finite results.
//!
//! ```
//! use skyconv_core::Angle;
//! use skyconv_core::angle::Operand;
//!
//! let a = Angle::from_degrees(30.0);
//! assert!(((a + Angle::from_degrees(15.0)).degrees() - 45.0).abs() < 1e-12);
//! assert!(a.try_add(Operand::Scalar(1.0)).is_err());
//! assert!(a.try_mul(2.0).is_ok());
//! ```

use super::core::Angle;
use crate::{ConversionError, ConversionResult};
use core::ops::*;

/// Right-hand side of a runtime-checked arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Angle(Angle),
    Scalar(f64),
}

impl From<Angle> for Operand {
    fn from(angle: Angle) -> Self {
        Self::Angle(angle)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl Angle {
    /// Sum of two angles; a scalar right-hand side is a type mismatch.
    pub fn try_add(self, rhs: impl Into<Operand>) -> ConversionResult<Angle> {
        match rhs.into() {
            Operand::Angle(other) => checked(self.radians() + other.radians(), "add"),
            Operand::Scalar(v) => Err(ConversionError::type_mismatch(
                "add",
                format!("cannot add a scalar ({}) to an angle", v),
            )),
        }
    }

    pub fn try_sub(self, rhs: impl Into<Operand>) -> ConversionResult<Angle> {
        match rhs.into() {
            Operand::Angle(other) => checked(self.radians() - other.radians(), "subtract"),
            Operand::Scalar(v) => Err(ConversionError::type_mismatch(
                "subtract",
                format!("cannot subtract a scalar ({}) from an angle", v),
            )),
        }
    }

    /// Scales by a plain number; multiplying two angles is a type mismatch.
    pub fn try_mul(self, rhs: impl Into<Operand>) -> ConversionResult<Angle> {
        match rhs.into() {
            Operand::Scalar(k) => checked(self.radians() * k, "multiply"),
            Operand::Angle(_) => Err(ConversionError::type_mismatch(
                "multiply",
                "multiplication is not supported between two angles",
            )),
        }
    }

    pub fn try_div(self, rhs: impl Into<Operand>) -> ConversionResult<Angle> {
        match rhs.into() {
            Operand::Scalar(k) => checked(self.radians() / k, "divide"),
            Operand::Angle(_) => Err(ConversionError::type_mismatch(
                "divide",
                "division is not supported between two angles",
            )),
        }
    }
}

fn checked(rad: f64, operation: &str) -> ConversionResult<Angle> {
    if rad.is_finite() {
        Ok(Angle::from_radians(rad))
    } else {
        Err(ConversionError::not_finite(operation, rad))
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() + rhs.radians())
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Angle::from_radians(self.radians() - rhs.radians())
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn mul(self, k: f64) -> Self {
        Angle::from_radians(self.radians() * k)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, angle: Angle) -> Angle {
        angle * self
    }
}

impl Div<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn div(self, k: f64) -> Self {
        Angle::from_radians(self.radians() / k)
    }
}

/// Flips the sign of the radian value, keeping bounds.
impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Self {
        self.with_radians(-self.radians())
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.with_radians(self.radians() + rhs.radians());
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.with_radians(self.radians() - rhs.radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Angle::from_radians(1.0);
        let b = Angle::from_radians(0.5);
        assert_eq!((a + b).radians(), 1.5);
        assert_eq!((a - b).radians(), 0.5);
        assert_eq!(a.try_sub(b).unwrap().radians(), 0.5);
    }

    #[test]
    fn test_scalar_ops() {
        let a = Angle::from_degrees(30.0);
        assert!(((a * 2.0).degrees() - 60.0).abs() < 1e-12);
        assert!(((2.0 * a).degrees() - 60.0).abs() < 1e-12);
        assert!((a.try_div(3.0).unwrap().degrees() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_mismatched_operands() {
        let a = Angle::from_degrees(30.0);
        let err = a.try_add(5.0).unwrap_err();
        assert!(matches!(err, ConversionError::TypeMismatch { operation: "add", .. }));

        let err = a.try_sub(5.0).unwrap_err();
        assert!(matches!(err, ConversionError::TypeMismatch { operation: "subtract", .. }));

        let err = a.try_mul(a).unwrap_err();
        assert!(matches!(err, ConversionError::TypeMismatch { operation: "multiply", .. }));

        let err = a.try_div(a).unwrap_err();
        assert!(matches!(err, ConversionError::TypeMismatch { operation: "divide", .. }));
    }

    #[test]
    fn test_division_by_zero_is_not_finite() {
        let err = Angle::from_degrees(1.0).try_div(0.0).unwrap_err();
        assert!(matches!(err, ConversionError::NotFinite { .. }));
    }

    #[test]
    fn test_overflow_is_not_finite() {
        let big = Angle::from_radians(1e308);
        assert_eq!(
            big.try_mul(10.0),
            Err(ConversionError::not_finite("multiply", f64::INFINITY))
        );
        assert_eq!(
            big.try_add(big),
            Err(ConversionError::not_finite("add", f64::INFINITY))
        );
        assert_eq!(
            big.try_sub(-big),
            Err(ConversionError::not_finite("subtract", f64::INFINITY))
        );
        assert_eq!(big.try_sub(big).unwrap().radians(), 0.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "angle must be finite")]
    fn test_non_finite_constructor_panics_in_debug() {
        let _ = Angle::from_degrees(f64::NAN);
    }

    #[test]
    fn test_neg_and_assign() {
        let mut a = Angle::from_radians(1.0);
        assert_eq!((-a).radians(), -1.0);
        a += Angle::from_radians(0.25);
        a -= Angle::from_radians(0.5);
        assert_eq!(a.radians(), 0.75);
    }
}
