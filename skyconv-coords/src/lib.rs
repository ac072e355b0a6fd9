//! Equatorial coordinates and the conversions hanging off them.
//!
//! [`EquatorialCoordinate`] pairs a [`RightAscension`] with a [`Declination`]
//! and converts to galactic, ecliptic and horizontal coordinates, measures great-circle
//! separations and renders the `J` designation used in survey names.
//!
//! ```
//! use skyconv_coords::EquatorialCoordinate;
//!
//! let a: EquatorialCoordinate = "14:24:57 -05:22:30.5".parse().unwrap();
//! let b = EquatorialCoordinate::from_hours_degrees(14.5, -5.0);
//!
//! assert_eq!(a.to_j_string(), "J142457.00-052230.5");
//! assert!(a.angular_separation(&b).degrees() < 2.0);
//! assert!((0.0..360.0).contains(&a.to_galactic().l().degrees()));
//! ```

pub mod constants;
pub mod ecliptic;
pub mod equatorial;
pub mod galactic;
pub mod horizontal;
pub mod parse;
pub mod ra_dec;

pub use ecliptic::{mean_obliquity_degrees, EclipticCoordinate};
pub use equatorial::{subtends, EquatorialCoordinate};
pub use galactic::GalacticCoordinate;
pub use horizontal::HorizontalCoordinate;
pub use parse::parse_ra_dec;
pub use ra_dec::{Declination, RightAscension};

pub use skyconv_core::{Angle, ConversionError, ConversionResult};
