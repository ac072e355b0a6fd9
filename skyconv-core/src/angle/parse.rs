//! Sexagesimal and decimal parsing.
//!
//! Every entry point takes anything convertible into [`AngleInput`] and routes
//! on the variant. Strings are tried as a plain decimal number first, then
//! against a three-field grammar, then against a two-field grammar with the
//! seconds defaulted to zero:
//!
//! ```text
//! three fields:  [+-]D SEP M SEP S[.fff][s]     e.g. 11:30:36.135789  11h30m36.1s
//! two fields:    [+-]D SEP M[m]                 e.g. 12:30  12h30m
//! SEP:           one or more of  : / tab - space h H m M s S d D
//! ```
//!
//! The leading field takes 1-2 digits for hours and 1-3 digits for degrees.
//! The sign attaches to the whole value, so `-00:30:00` is `-0.5`.
//!
//! # Ranges
//!
//! Triplets (parsed from text, given directly, or derived for `parse_hms` /
//! `parse_dms`) must have minutes and seconds in `[0, 60)`. In hour mode every
//! input, decimal or sexagesimal, must lie in `(-24, 24)`.
//!
//! ```
//! use skyconv_core::angle::{parse_hms, parse_hours};
//!
//! let h = parse_hours("11:30:36.135789").unwrap();
//! assert!((h - 11.510037719166666).abs() < 1e-12);
//!
//! let hms = parse_hms("11h30m36.135789s").unwrap();
//! assert_eq!((hms.whole, hms.minutes, hms.seconds), (11.0, 30.0, 36.135789));
//!
//! assert!(parse_hours("25:00:00").is_err());
//! ```

use super::input::{decimal_hours_of_day, AngleInput};
use super::sexagesimal::{degrees_to_dms, hours_to_hms, Sexagesimal};
use super::units::AngleUnit;
use super::Angle;
use crate::constants::DEGREES_PER_HOUR;
use crate::{ConversionError, ConversionResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([+-]?)(\d{1,2})[:/\t\- hHmMsSdD]+(\d{1,2})[:/\t\- hHmMsSdD]+(\d{1,2}(?:\.\d*)?)[sS]?$",
    )
    .expect("three-field hour pattern is valid")
});

static HM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d{1,2})[:/\t\- hHmMsSdD]+(\d{1,2})[mM]?$")
        .expect("two-field hour pattern is valid")
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([+-]?)(\d{1,3})[:/\t\- hHmMsSdD]+(\d{1,2})[:/\t\- hHmMsSdD]+(\d{1,2}(?:\.\d*)?)[sS]?$",
    )
    .expect("three-field degree pattern is valid")
});

static DM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(\d{1,3})[:/\t\- hHmMsSdD]+(\d{1,2})[mM]?$")
        .expect("two-field degree pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Hours,
    Degrees,
}

impl Mode {
    fn name(self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Degrees => "degrees",
        }
    }

    fn patterns(self) -> (&'static Regex, &'static Regex) {
        match self {
            Self::Hours => (&HMS_REGEX, &HM_REGEX),
            Self::Degrees => (&DMS_REGEX, &DM_REGEX),
        }
    }

    fn validate(self, triplet: &Sexagesimal) -> ConversionResult<()> {
        match self {
            Self::Hours => triplet.validate_hours(),
            Self::Degrees => triplet.validate_degrees(),
        }
    }

    fn decompose(self, value: f64) -> ConversionResult<Sexagesimal> {
        match self {
            Self::Hours => hours_to_hms(value),
            Self::Degrees => degrees_to_dms(value),
        }
    }
}

/// Decimal value plus the triplet it was read from, when there was one.
struct Parsed {
    decimal: f64,
    triplet: Option<Sexagesimal>,
}

impl Parsed {
    fn decimal(decimal: f64) -> Self {
        Self {
            decimal,
            triplet: None,
        }
    }

    fn from_triplet(triplet: Sexagesimal) -> Self {
        Self {
            decimal: triplet.to_decimal(),
            triplet: Some(triplet),
        }
    }
}

/// Parses hours into a decimal value.
pub fn parse_hours(input: impl Into<AngleInput>) -> ConversionResult<f64> {
    parse_with(input.into(), Mode::Hours).map(|p| p.decimal)
}

/// Parses hours into an `(h, m, s)` triplet.
///
/// Sexagesimal text and explicit triplets come back exactly as given; other
/// inputs are decomposed from their decimal value.
pub fn parse_hms(input: impl Into<AngleInput>) -> ConversionResult<Sexagesimal> {
    triplet_of(parse_with(input.into(), Mode::Hours)?, Mode::Hours)
}

/// Parses degrees into a decimal value.
pub fn parse_degrees(input: impl Into<AngleInput>) -> ConversionResult<f64> {
    parse_with(input.into(), Mode::Degrees).map(|p| p.decimal)
}

/// Parses degrees into a `(d, m, s)` triplet.
pub fn parse_dms(input: impl Into<AngleInput>) -> ConversionResult<Sexagesimal> {
    triplet_of(parse_with(input.into(), Mode::Degrees)?, Mode::Degrees)
}

/// Parses radians. Only numbers, decimal text and angles are accepted.
pub fn parse_radians(input: impl Into<AngleInput>) -> ConversionResult<f64> {
    match input.into() {
        AngleInput::Number(v) => finite(v, "radians"),
        AngleInput::Text(s) => parse_decimal(&s, "radians")?
            .ok_or_else(|| ConversionError::format(s.as_str(), "radians")),
        AngleInput::Angle(a) => Ok(a.radians()),
        other @ (AngleInput::Triplet(_) | AngleInput::TimeOfDay(_)) => {
            Err(ConversionError::type_mismatch(
                "parse_radians",
                format!("{} has no radian reading", other.describe()),
            ))
        }
    }
}

/// Parses `input` as a value in `unit`, returning it in the same unit.
pub fn parse_in(input: impl Into<AngleInput>, unit: AngleUnit) -> ConversionResult<f64> {
    match unit {
        AngleUnit::Hours => parse_hours(input),
        AngleUnit::Degrees => parse_degrees(input),
        AngleUnit::Radians => parse_radians(input),
    }
}

fn triplet_of(parsed: Parsed, mode: Mode) -> ConversionResult<Sexagesimal> {
    match parsed.triplet {
        Some(triplet) => Ok(triplet),
        None => mode.decompose(parsed.decimal),
    }
}

fn parse_with(input: AngleInput, mode: Mode) -> ConversionResult<Parsed> {
    match input {
        AngleInput::Number(v) => checked_decimal(finite(v, mode.name())?, mode),
        AngleInput::Text(s) => parse_text(&s, mode),
        AngleInput::Triplet(triplet) => {
            mode.validate(&triplet)?;
            Ok(Parsed::from_triplet(triplet))
        }
        AngleInput::Angle(angle) => checked_decimal(
            match mode {
                Mode::Hours => angle.hours(),
                Mode::Degrees => angle.degrees(),
            },
            mode,
        ),
        AngleInput::TimeOfDay(time) => {
            let hours = decimal_hours_of_day(&time);
            checked_decimal(
                match mode {
                    Mode::Hours => hours,
                    Mode::Degrees => hours * DEGREES_PER_HOUR,
                },
                mode,
            )
        }
    }
}

/// Hour-mode decimals go through the same range check as triplets.
fn checked_decimal(value: f64, mode: Mode) -> ConversionResult<Parsed> {
    if mode == Mode::Hours {
        hours_to_hms(value)?;
    }
    Ok(Parsed::decimal(value))
}

fn parse_text(raw: &str, mode: Mode) -> ConversionResult<Parsed> {
    let text = raw.trim();

    if let Some(value) = parse_decimal(text, mode.name())? {
        return checked_decimal(value, mode);
    }

    let (three_field, two_field) = mode.patterns();
    let triplet = if let Some(caps) = three_field.captures(text) {
        captures_to_triplet(&caps, raw, mode, true)?
    } else if let Some(caps) = two_field.captures(text) {
        tracing::trace!(input = text, "parsed with two-field grammar, seconds set to zero");
        captures_to_triplet(&caps, raw, mode, false)?
    } else {
        return Err(ConversionError::format(raw, mode.name()));
    };

    mode.validate(&triplet)?;
    Ok(Parsed::from_triplet(triplet))
}

/// `Ok(None)` when the text is not a number at all.
fn parse_decimal(text: &str, context: &str) -> ConversionResult<Option<f64>> {
    match text.trim().parse::<f64>() {
        Ok(v) => finite(v, context).map(Some),
        Err(_) => Ok(None),
    }
}

fn finite(value: f64, context: &str) -> ConversionResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::not_finite(context, value))
    }
}

fn captures_to_triplet(
    caps: &Captures<'_>,
    raw: &str,
    mode: Mode,
    has_seconds: bool,
) -> ConversionResult<Sexagesimal> {
    let field = |i: usize| -> ConversionResult<f64> {
        caps[i]
            .parse::<f64>()
            .map_err(|_| ConversionError::format(raw, mode.name()))
    };

    let negative = &caps[1] == "-";
    let magnitude = field(2)?;
    let whole = if negative { -magnitude } else { magnitude };
    let minutes = field(3)?;
    let seconds = if has_seconds { field(4)? } else { 0.0 };

    Ok(Sexagesimal::new(whole, minutes, seconds))
}

/// Parse strings as angles in a named unit.
///
/// ```
/// use skyconv_core::angle::AngleUnits;
///
/// let ra = "18h36m56s".hours().unwrap();
/// let dec = "-05 22 30".deg().unwrap();
/// assert!(ra.degrees() > 279.0);
/// assert!(dec.degrees() < -5.0);
/// ```
pub trait AngleUnits {
    fn deg(&self) -> ConversionResult<Angle>;
    fn rad(&self) -> ConversionResult<Angle>;
    fn hours(&self) -> ConversionResult<Angle>;
}

impl AngleUnits for str {
    #[inline]
    fn deg(&self) -> ConversionResult<Angle> {
        Angle::parse_degrees(self)
    }

    #[inline]
    fn rad(&self) -> ConversionResult<Angle> {
        Angle::parse_radians(self)
    }

    #[inline]
    fn hours(&self) -> ConversionResult<Angle> {
        Angle::parse_hours(self)
    }
}
