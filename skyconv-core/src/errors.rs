//! Error types shared by every conversion in the workspace.
//!
//! A single taxonomy covers parsing, range validation, unit and direction
//! names, timezone anchoring and operand kinds. The time and coordinate
//! crates return the same [`ConversionError`], so callers match on one enum
//! regardless of which layer rejected the input.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Format`](ConversionError::Format) | Text matches no decimal or sexagesimal grammar |
//! | [`Range`](ConversionError::Range) | A sexagesimal field is outside its canonical range |
//! | [`IllegalUnits`](ConversionError::IllegalUnits) | Unit name is not degrees, radians or hours |
//! | [`MissingTimezone`](ConversionError::MissingTimezone) | A timestamp has no UTC anchor |
//! | [`TypeMismatch`](ConversionError::TypeMismatch) | Arithmetic between incompatible operands |
//! | [`IllegalDirection`](ConversionError::IllegalDirection) | Longitude direction is not west or east |
//! | [`NotFinite`](ConversionError::NotFinite) | NaN or infinite numeric input |
//! | [`InvalidDate`](ConversionError::InvalidDate) | Calendar fields do not form a valid instant |
//! | [`InvalidOffset`](ConversionError::InvalidOffset) | UTC offset outside +-24 hours |
//!
//! # Usage
//!
//! ```
//! use skyconv_core::{ConversionError, SexagesimalField};
//!
//! fn check_minutes(m: f64) -> Result<f64, ConversionError> {
//!     if !(0.0..60.0).contains(&m) {
//!         return Err(ConversionError::range(SexagesimalField::Minutes, m));
//!     }
//!     Ok(m)
//! }
//!
//! assert!(check_minutes(61.0).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Which sexagesimal field failed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexagesimalField {
    /// Leading field in hour mode, valid in (-24, 24).
    Hours,
    /// Second field, valid in [0, 60).
    Minutes,
    /// Third field, valid in [0, 60).
    Seconds,
}

impl SexagesimalField {
    fn allowed(self) -> &'static str {
        match self {
            Self::Hours => "(-24, 24)",
            Self::Minutes | Self::Seconds => "[0, 60)",
        }
    }
}

impl fmt::Display for SexagesimalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        };
        f.write_str(name)
    }
}

/// Failure of a parse, validation or conversion step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Input text matched none of the accepted grammars.
    #[error("Format error: cannot parse '{input}' as {expected}")]
    Format { input: String, expected: String },

    /// A sexagesimal component fell outside its canonical range.
    #[error("Range error: {field} value {value} outside {allowed}")]
    Range {
        field: SexagesimalField,
        value: f64,
        allowed: &'static str,
    },

    #[error("Illegal units '{units}': expected one of degrees, radians, hours")]
    IllegalUnits { units: String },

    /// A time to JD conversion was requested for a timestamp with no offset.
    #[error("Missing timezone: timestamp carries no UTC offset and none was supplied")]
    MissingTimezone,

    #[error("Type mismatch in {operation}: {message}")]
    TypeMismatch {
        operation: &'static str,
        message: String,
    },

    #[error("Illegal longitude direction '{direction}': expected W or E")]
    IllegalDirection { direction: String },

    #[error("Non-finite value in {context}: {value}")]
    NotFinite { context: String, value: f64 },

    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        message: String,
    },

    #[error("Invalid UTC offset of {hours} hours: must lie strictly within 24 hours")]
    InvalidOffset { hours: f64 },
}

/// Convenience alias for `Result<T, ConversionError>`.
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    /// Creates a [`Format`](Self::Format) error.
    pub fn format(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Format {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Creates a [`Range`](Self::Range) error with the canonical bounds of `field`.
    pub fn range(field: SexagesimalField, value: f64) -> Self {
        Self::Range {
            field,
            value,
            allowed: field.allowed(),
        }
    }

    pub fn illegal_units(units: impl Into<String>) -> Self {
        Self::IllegalUnits {
            units: units.into(),
        }
    }

    pub fn missing_timezone() -> Self {
        Self::MissingTimezone
    }

    pub fn type_mismatch(operation: &'static str, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            operation,
            message: message.into(),
        }
    }

    pub fn illegal_direction(direction: impl Into<String>) -> Self {
        Self::IllegalDirection {
            direction: direction.into(),
        }
    }

    pub fn not_finite(context: impl Into<String>, value: f64) -> Self {
        Self::NotFinite {
            context: context.into(),
            value,
        }
    }

    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: u32, day: u32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn invalid_offset(hours: f64) -> Self {
        Self::InvalidOffset { hours }
    }
}
