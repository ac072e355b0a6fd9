//! Angle values and sexagesimal conversions for astronomy.
//!
//! `skyconv-core` is the bottom layer of the workspace: it owns the error
//! taxonomy shared by every crate, the [`Angle`] value type, the permissive
//! sexagesimal parser and the string formatter. The time and coordinate
//! crates build on it.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | `Angle`, units, bounds, parsing and formatting |
//! | [`constants`] | Unit factors and epoch constants |
//! | [`errors`] | [`ConversionError`] and [`ConversionResult`] |
//! | [`math`] | Floored modulo, hour/degree wrapping, rotations, Vincenty |
//!
//! # Example
//!
//! ```
//! use skyconv_core::{Angle, FormatOptions};
//! use skyconv_core::angle::{AngleUnit, Separator};
//!
//! let ra = Angle::parse_hours("14:24:56.9957071015656").unwrap();
//! assert!((ra.degrees() - 216.23748211292319).abs() < 1e-9);
//!
//! let opts = FormatOptions::default()
//!     .with_unit(AngleUnit::Degrees)
//!     .with_separator(Separator::colon())
//!     .with_precision(2);
//! assert_eq!(ra.to_string_with(&opts), "216:14:14.94");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for angles, triplets, units and
//!   [`FormatOptions`]. An [`Angle`] serializes as its radian value.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;

pub use angle::{Angle, AngleInput, AngleUnit, FormatOptions, Separator, Sexagesimal};
pub use errors::{ConversionError, ConversionResult, SexagesimalField};
