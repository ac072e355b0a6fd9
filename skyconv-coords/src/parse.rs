//! Combined right ascension / declination strings.
//!
//! Two sexagesimal blocks back to back, with an optional leading `J`:
//!
//! ```text
//! J142457.00-052230.5
//! 14:24:57 -05:22:30.5
//! 14h24m57s|-05d22m30.5s
//! ```
//!
//! Fields are delimited by one or two of `: / tab space h d m s ° ' "`, and the
//! blocks may be joined by any run of whitespace, `|` or `_`. Fields may run
//! together only in the compact form, where every field has two digits (three
//! allowed for declination degrees) and the declination carries a sign. The
//! first block is hours, the second degrees.

use crate::ra_dec::{Declination, RightAscension};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use skyconv_core::{ConversionError, ConversionResult, Sexagesimal};

const MAX_RA_DEC_LENGTH: usize = 80;

static DELIMITED_REGEX: Lazy<Regex> = Lazy::new(|| {
    let sep = r#"[:/\t hdms°'"]"#;
    let pattern = format!(
        r"^J?([+-]?\d{{1,2}}){sep}{{1,2}}(\d{{1,2}}){sep}{{1,2}}(\d{{1,2}}(?:\.\d+)?){sep}{{0,2}}[\s|_]*([+-]?\d{{1,3}}){sep}{{1,2}}(\d{{1,2}}){sep}{{1,2}}(\d{{1,2}}(?:\.\d+)?){sep}{{0,2}}$"
    );
    Regex::new(&pattern).expect("delimited RA/Dec pattern is valid")
});

static COMPACT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^J?(\d{2})(\d{2})(\d{2}(?:\.\d+)?)[\s|_]*([+-]\d{2,3}?)(\d{2})(\d{2}(?:\.\d+)?)$")
        .expect("compact RA/Dec pattern is valid")
});

/// Splits a combined string into a right ascension and a declination.
///
/// ```
/// use skyconv_coords::parse_ra_dec;
///
/// let (ra, dec) = parse_ra_dec("J142457.00-052230.5").unwrap();
/// assert!((ra.hours() - 14.415833333333333).abs() < 1e-12);
/// assert!((dec.degrees() + 5.375138888888889).abs() < 1e-12);
/// ```
///
/// # Errors
///
/// `Format` when the text is not two sexagesimal blocks, `Range` when a field
/// is out of range.
pub fn parse_ra_dec(text: &str) -> ConversionResult<(RightAscension, Declination)> {
    let text = text.trim();
    if text.len() > MAX_RA_DEC_LENGTH {
        return Err(ConversionError::format(text, "RA/Dec pair (input too long)"));
    }

    let caps = DELIMITED_REGEX
        .captures(text)
        .or_else(|| COMPACT_REGEX.captures(text))
        .ok_or_else(|| ConversionError::format(text, "RA/Dec pair such as 14:24:57 -05:22:30.5"))?;

    let ra = RightAscension::parse(triplet(&caps, 1, text)?)?;
    let dec = Declination::parse(triplet(&caps, 4, text)?)?;
    tracing::trace!(input = text, ra = ra.hours(), dec = dec.degrees(), "parsed RA/Dec pair");
    Ok((ra, dec))
}

fn triplet(caps: &Captures<'_>, first: usize, text: &str) -> ConversionResult<Sexagesimal> {
    let field = |i: usize| -> ConversionResult<f64> {
        caps[i]
            .parse::<f64>()
            .map_err(|_| ConversionError::format(text, "RA/Dec pair"))
    };
    Ok(Sexagesimal::new(field(first)?, field(first + 1)?, field(first + 2)?))
}
