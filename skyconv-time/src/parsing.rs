use crate::timestamp::{utc_offset, CalendarTimestamp};
use chrono::FixedOffset;
use once_cell::sync::Lazy;
use regex::Regex;
use skyconv_core::{ConversionError, ConversionResult};

const MAX_ISO8601_LENGTH: usize = 40;

static ISO8601_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(-?\d{4})-(\d{1,2})-(\d{1,2})(?:[T ](\d{1,2}):(\d{2})(?::(\d{2})(?:\.(\d{1,9}))?)?)?\s*(Z|z|[+-]\d{2}(?::?\d{2})?)?$",
    )
    .expect("ISO 8601 pattern is valid")
});

/// Parses `YYYY-MM-DD[THH:MM[:SS[.ffffff]]][Z|+HH:MM|-HH:MM]`.
///
/// A space may replace the `T`. Without a zone designator the timestamp has
/// no offset. Fractions beyond microseconds are truncated.
///
/// ```
/// use skyconv_time::parse_timestamp;
///
/// let ts = parse_timestamp("2011-11-28T04:30:02.592Z").unwrap();
/// assert_eq!(ts.microsecond(), 592_000);
/// assert!(ts.has_offset());
///
/// let naive = parse_timestamp("2011-11-28").unwrap();
/// assert!(!naive.has_offset());
/// ```
pub fn parse_timestamp(s: &str) -> ConversionResult<CalendarTimestamp> {
    let s = s.trim();
    if s.len() > MAX_ISO8601_LENGTH {
        return Err(ConversionError::format(s, "ISO 8601 timestamp (input too long)"));
    }

    let caps = ISO8601_REGEX
        .captures(s)
        .ok_or_else(|| ConversionError::format(s, "ISO 8601 timestamp YYYY-MM-DDTHH:MM:SS"))?;

    let number = |i: usize| -> ConversionResult<u32> {
        caps.get(i).map_or(Ok(0), |m| {
            m.as_str()
                .parse::<u32>()
                .map_err(|_| ConversionError::format(s, "ISO 8601 timestamp"))
        })
    };

    let year = caps[1]
        .parse::<i32>()
        .map_err(|_| ConversionError::format(s, "ISO 8601 year"))?;
    let month = number(2)?;
    let day = number(3)?;
    let hour = number(4)?;
    let minute = number(5)?;
    let second = number(6)?;
    let microsecond = caps.get(7).map_or(Ok(0), |m| fraction_to_micros(m.as_str(), s))?;

    let ts = CalendarTimestamp::new(year, month, day, hour, minute, second, microsecond)?;

    match caps.get(8) {
        None => Ok(ts),
        Some(zone) => Ok(ts.with_offset(parse_zone(zone.as_str(), s)?)),
    }
}

fn fraction_to_micros(digits: &str, input: &str) -> ConversionResult<u32> {
    let mut padded: String = digits.chars().take(6).collect();
    while padded.len() < 6 {
        padded.push('0');
    }
    padded
        .parse::<u32>()
        .map_err(|_| ConversionError::format(input, "fractional seconds"))
}

fn parse_zone(zone: &str, input: &str) -> ConversionResult<FixedOffset> {
    if zone.eq_ignore_ascii_case("z") {
        return Ok(utc_offset());
    }

    let sign = if zone.starts_with('-') { -1 } else { 1 };
    let digits: String = zone[1..].chars().filter(|c| c.is_ascii_digit()).collect();
    let hours: i32 = digits[..2]
        .parse()
        .map_err(|_| ConversionError::format(input, "UTC offset"))?;
    let minutes: i32 = if digits.len() > 2 {
        digits[2..]
            .parse()
            .map_err(|_| ConversionError::format(input, "UTC offset"))?
    } else {
        0
    };

    if hours >= 24 || minutes >= 60 {
        return Err(ConversionError::invalid_offset(
            f64::from(sign * hours) + f64::from(sign * minutes) / 60.0,
        ));
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| ConversionError::format(input, "UTC offset"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_timestamp() {
        let ts = parse_timestamp("2011-11-28T04:30:02.592000+00:00").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2011, 11, 28));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (4, 30, 2));
        assert_eq!(ts.microsecond(), 592_000);
        assert_eq!(ts.offset(), Some(utc_offset()));
    }

    #[test]
    fn test_parse_date_only_and_space_separator() {
        let ts = parse_timestamp("2000-01-01").unwrap();
        assert_eq!((ts.hour(), ts.minute()), (0, 0));
        assert!(ts.offset().is_none());

        let ts = parse_timestamp("2000-01-01 12:00").unwrap();
        assert_eq!(ts.hour(), 12);
    }

    #[test]
    fn test_parse_offsets() {
        let ts = parse_timestamp("2020-06-01T12:00:00-05:30").unwrap();
        assert_eq!(ts.offset().map(|o| o.local_minus_utc()), Some(-19_800));

        let ts = parse_timestamp("2020-06-01T12:00:00+0900").unwrap();
        assert_eq!(ts.offset().map(|o| o.local_minus_utc()), Some(32_400));

        let ts = parse_timestamp("2020-06-01T12:00:00Z").unwrap();
        assert_eq!(ts.to_utc().unwrap().hour(), 12);
    }

    #[test]
    fn test_fraction_truncated_to_micros() {
        let ts = parse_timestamp("2020-06-01T00:00:00.123456789Z").unwrap();
        assert_eq!(ts.microsecond(), 123_456);
        let ts = parse_timestamp("2020-06-01T00:00:00.5").unwrap();
        assert_eq!(ts.microsecond(), 500_000);
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "2011/11/28", "28-11-2011", "2011-11-28T4", "2011-11-28Tnoon"] {
            assert!(
                matches!(parse_timestamp(bad), Err(ConversionError::Format { .. })),
                "{}",
                bad
            );
        }
        assert!(matches!(
            parse_timestamp("2011-02-30"),
            Err(ConversionError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_timestamp("2011-01-01T00:00:00+25:00"),
            Err(ConversionError::InvalidOffset { .. })
        ));
    }
}
