//! Angle values, sexagesimal parsing and string formatting.

mod core;
mod format;
mod input;
mod normalize;
mod ops;
mod parse;
mod sexagesimal;
#[cfg(feature = "serde")]
mod serde_;
mod units;

pub use self::core::Angle;
pub use format::{
    degrees_to_string, format_sexagesimal, hours_to_string, FormatOptions, Separator,
};
pub use input::{decimal_hours_of_day, AngleInput};
pub use normalize::Bounds;
pub use ops::Operand;
pub use parse::{
    parse_degrees, parse_dms, parse_hms, parse_hours, parse_in, parse_radians, AngleUnits,
};
pub use sexagesimal::{degrees_to_dms, dms_to_degrees, hms_to_hours, hours_to_hms, Sexagesimal};
pub use units::{AngleUnit, VALID_UNITS};

pub use self::core::{deg, hours, rad};
