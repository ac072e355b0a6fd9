use skyconv_core::constants::{J2000_JD, MJD_ZERO_POINT};
use std::fmt;

/// A Julian Date held as two parts whose sum is the date.
///
/// Splitting lets the epoch part stay exact while the day offset carries the
/// fine detail; [`ModifiedJulianDate`] relies on this to convert without loss.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    /// Wraps the date unchanged; the zero point is subtracted only when the
    /// MJD value is read.
    pub fn to_mjd(&self) -> ModifiedJulianDate {
        ModifiedJulianDate(*self)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

impl From<ModifiedJulianDate> for JulianDate {
    fn from(mjd: ModifiedJulianDate) -> Self {
        mjd.to_jd()
    }
}

/// `JD - 2400000.5`, stored as a [`JulianDate`] split at the MJD zero point.
///
/// An MJD built from a value keeps it untouched in `jd2`, and one built from a
/// [`JulianDate`] keeps both of its parts, so either round trip returns the
/// same bits for every finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifiedJulianDate(JulianDate);

impl ModifiedJulianDate {
    pub fn new(mjd: f64) -> Self {
        Self(JulianDate::new(MJD_ZERO_POINT, mjd))
    }

    pub fn value(&self) -> f64 {
        if self.0.jd1 == MJD_ZERO_POINT {
            self.0.jd2
        } else {
            (self.0.jd1 - MJD_ZERO_POINT) + self.0.jd2
        }
    }

    pub fn to_jd(&self) -> JulianDate {
        self.0
    }
}

impl fmt::Display for ModifiedJulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MJD {:.9}", self.value())
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(mjd: f64) -> Self {
        Self::new(mjd)
    }
}

impl From<JulianDate> for ModifiedJulianDate {
    fn from(jd: JulianDate) -> Self {
        jd.to_mjd()
    }
}
