//! Sexagesimal and decimal string rendering.
//!
//! A sexagesimal string has the shape
//!
//! ```text
//! [-]C1 SEP1 C2 SEP2 C3 [SEP3]
//! ```
//!
//! where `C2` is always two digits wide and `C3` is `precision + 3` wide
//! (two digits, the point, and `precision` decimals; three digits when the
//! precision is zero, so five seconds is `005`). `C1` is zero-padded to
//! two digits only when `pad` is set. The sign is written on its own, so a
//! value like `-0.5` hours renders as `-0 30 00.00000`.
//!
//! # Separators
//!
//! | Spec | Meaning |
//! |------|---------|
//! | `":"` or `""` | same string between every field, nothing after seconds |
//! | `"-:"` | first and second separators |
//! | `"hms"` | one after each field |
//!
//! More than three parts is a `Format` error.
//!
//! ```
//! use skyconv_core::angle::{degrees_to_string, hours_to_string, Separator};
//!
//! let hms = Separator::parse("hms").unwrap();
//! assert_eq!(hours_to_string(14.5, 2, false, &hms), "14h30m00.00s");
//!
//! let colon = Separator::parse(":").unwrap();
//! assert_eq!(degrees_to_string(-23.5, 1, true, &colon), "-23:30:00.0");
//!
//! assert!(Separator::parse("abcd").is_err());
//! ```
//!
//! # Display
//!
//! `Display` writes decimal degrees with six places followed by the default
//! degree string:
//!
//! ```
//! use skyconv_core::Angle;
//!
//! let a = Angle::from_degrees(45.5);
//! assert_eq!(format!("{}", a), "45.500000° (45:30:00.00000)");
//! ```

use super::sexagesimal::Sexagesimal;
use super::units::AngleUnit;
use super::Angle;
use crate::{ConversionError, ConversionResult};
use core::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator strings placed between (and optionally after) the three fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SeparatorSpec", into = "SeparatorSpec")
)]
pub enum Separator {
    /// The same string between every pair of fields.
    Uniform(String),
    /// Distinct strings after the first and second fields.
    Pair(String, String),
    /// Strings after each of the three fields.
    Triple(String, String, String),
}

impl Separator {
    /// Splits a separator string into one part per character.
    ///
    /// Zero or one character is uniform; two or three map positionally.
    pub fn parse(spec: &str) -> ConversionResult<Self> {
        let chars: Vec<String> = spec.chars().map(String::from).collect();
        Self::from_parts(chars)
            .map_err(|_| ConversionError::format(spec, "separator of at most 3 parts"))
    }

    fn from_parts(mut parts: Vec<String>) -> ConversionResult<Self> {
        match parts.len() {
            0 => Ok(Self::Uniform(String::new())),
            1 => Ok(Self::Uniform(parts.remove(0))),
            2 => {
                let second = parts.remove(1);
                Ok(Self::Pair(parts.remove(0), second))
            }
            3 => {
                let third = parts.remove(2);
                let second = parts.remove(1);
                Ok(Self::Triple(parts.remove(0), second, third))
            }
            n => Err(ConversionError::format(
                format!("{} separator parts", n),
                "separator of at most 3 parts",
            )),
        }
    }

    /// `(after whole, after minutes, after seconds)`.
    fn parts(&self) -> (&str, &str, &str) {
        match self {
            Self::Uniform(s) => (s.as_str(), s.as_str(), ""),
            Self::Pair(a, b) => (a.as_str(), b.as_str(), ""),
            Self::Triple(a, b, c) => (a.as_str(), b.as_str(), c.as_str()),
        }
    }

    /// Separator used by [`hours_to_string`] callers that want `14h30m00s`.
    pub fn hms() -> Self {
        Self::Triple("h".into(), "m".into(), "s".into())
    }

    pub fn colon() -> Self {
        Self::Uniform(":".into())
    }

    pub fn none() -> Self {
        Self::Uniform(String::new())
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::Uniform(" ".into())
    }
}

impl FromStr for Separator {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[&str; 2]> for Separator {
    fn from([a, b]: [&str; 2]) -> Self {
        Self::Pair(a.into(), b.into())
    }
}

impl From<[&str; 3]> for Separator {
    fn from([a, b, c]: [&str; 3]) -> Self {
        Self::Triple(a.into(), b.into(), c.into())
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(s) => f.write_str(s),
            Self::Pair(a, b) => write!(f, "{}{}", a, b),
            Self::Triple(a, b, c) => write!(f, "{}{}{}", a, b, c),
        }
    }
}

/// Serialized form: a character string or an explicit list of parts.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SeparatorSpec {
    Text(String),
    Parts(Vec<String>),
}

#[cfg(feature = "serde")]
impl TryFrom<SeparatorSpec> for Separator {
    type Error = ConversionError;

    fn try_from(spec: SeparatorSpec) -> Result<Self, Self::Error> {
        match spec {
            SeparatorSpec::Text(s) => Self::parse(&s),
            SeparatorSpec::Parts(parts) => Self::from_parts(parts),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Separator> for SeparatorSpec {
    fn from(sep: Separator) -> Self {
        match sep {
            Separator::Uniform(s) => Self::Text(s),
            Separator::Pair(a, b) => Self::Parts(vec![a, b]),
            Separator::Triple(a, b, c) => Self::Parts(vec![a, b, c]),
        }
    }
}

/// Options for [`Angle::to_string_with`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    pub unit: AngleUnit,
    /// Render a plain decimal number instead of three fields.
    pub decimal: bool,
    pub separator: Separator,
    /// Decimal places on the seconds field, or on the whole value when decimal.
    pub precision: usize,
    /// Zero-pad the leading field to two digits.
    pub pad: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            unit: AngleUnit::Hours,
            decimal: false,
            separator: Separator::default(),
            precision: 5,
            pad: false,
        }
    }
}

impl FormatOptions {
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn decimal(mut self, decimal: bool) -> Self {
        self.decimal = decimal;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn padded(mut self, pad: bool) -> Self {
        self.pad = pad;
        self
    }
}

/// Renders a signed decimal value as three fields.
///
/// Seconds that round up to 60 carry into the minutes, and minutes of 60
/// carry into the leading field.
pub fn format_sexagesimal(value: f64, precision: usize, pad: bool, separator: &Separator) -> String {
    let negative = value < 0.0;
    let parts = Sexagesimal::from_decimal(value.abs());
    let mut whole = parts.whole as u64;
    let mut minutes = parts.minutes as u64;

    let width = precision + 3;
    let mut seconds = format!("{:0width$.prec$}", parts.seconds, width = width, prec = precision);
    if seconds.parse::<f64>().map_or(false, |s| s >= 60.0) {
        seconds = format!("{:0width$.prec$}", 0.0, width = width, prec = precision);
        minutes += 1;
        if minutes >= 60 {
            minutes = 0;
            whole += 1;
        }
    }

    let (sep1, sep2, sep3) = separator.parts();
    let sign = if negative { "-" } else { "" };
    if pad {
        format!("{sign}{whole:02}{sep1}{minutes:02}{sep2}{seconds}{sep3}")
    } else {
        format!("{sign}{whole}{sep1}{minutes:02}{sep2}{seconds}{sep3}")
    }
}

/// Decimal hours as an `h m s` string.
pub fn hours_to_string(hours: f64, precision: usize, pad: bool, separator: &Separator) -> String {
    format_sexagesimal(hours, precision, pad, separator)
}

/// Decimal degrees as a `d m s` string.
pub fn degrees_to_string(degrees: f64, precision: usize, pad: bool, separator: &Separator) -> String {
    format_sexagesimal(degrees, precision, pad, separator)
}

impl Angle {
    /// Renders the angle according to `options`.
    ///
    /// Radians are always decimal.
    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        let value = self.value_in(options.unit);
        if options.decimal || options.unit == AngleUnit::Radians {
            return format!("{:.*}", options.precision, value);
        }
        format_sexagesimal(value, options.precision, options.pad, &options.separator)
    }

    /// [`to_string_with`](Self::to_string_with) using the default options.
    pub fn string(&self) -> String {
        self.to_string_with(&FormatOptions::default())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.degrees();
        write!(
            f,
            "{:.6}° ({})",
            degrees,
            degrees_to_string(degrees, 5, false, &Separator::colon())
        )
    }
}
