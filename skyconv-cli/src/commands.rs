use crate::cli::{Command, FormatArgs};
use anyhow::Context;
use skyconv_coords::EquatorialCoordinate;
use skyconv_core::angle::AngleUnit;
use skyconv_core::{Angle, FormatOptions};
use skyconv_time::{
    compute_gast, compute_gmst, datetime_to_jd, datetime_to_mjd, gmst_to_lst, jd_to_calendar,
    jd_to_calendar_in, mjd_to_jd, offset_from_hours, parse_timestamp, Longitude, SiderealTime,
};

/// Runs one subcommand and returns what should be printed.
pub fn run(command: &Command, base: &FormatOptions) -> anyhow::Result<String> {
    match command {
        Command::Angle {
            value,
            from,
            format,
        } => convert_angle(value, *from, format, base),
        Command::Jd { timestamp, offset } => julian_dates(timestamp, *offset),
        Command::Calendar { jd, mjd, offset } => calendar(*jd, *mjd, *offset),
        Command::Sidereal {
            timestamp,
            offset,
            longitude,
            direction,
            units,
            apparent,
        } => {
            let longitude = longitude
                .as_deref()
                .map(|value| Angle::new(value, *units).map(|a| Longitude::new(a, *direction)))
                .transpose()
                .context("invalid longitude")?;
            sidereal(timestamp, *offset, longitude.as_ref(), *apparent, base)
        }
        Command::Coord { ra, dec } => coordinate(ra, dec.as_deref(), base),
        Command::Altaz {
            ra,
            dec,
            time,
            offset,
            latitude,
            longitude,
            direction,
        } => {
            let longitude = Angle::parse_degrees(longitude.as_str())
                .map(|a| Longitude::new(a, *direction))
                .context("invalid longitude")?;
            let latitude =
                Angle::parse_degrees(latitude.as_str()).context("invalid latitude")?;
            horizontal(ra, dec, time, *offset, latitude, &longitude, base)
        }
        Command::Separation {
            ra1,
            dec1,
            ra2,
            dec2,
            units,
        } => separation(
            (ra1.as_str(), dec1.as_str()),
            (ra2.as_str(), dec2.as_str()),
            *units,
            base,
        ),
    }
}

pub fn convert_angle(
    value: &str,
    from: AngleUnit,
    format: &FormatArgs,
    base: &FormatOptions,
) -> anyhow::Result<String> {
    let angle = Angle::new(value, from).with_context(|| format!("cannot read {value:?} as {from}"))?;
    Ok(angle.to_string_with(&format.apply(base, from)))
}

pub fn julian_dates(timestamp: &str, offset: Option<f64>) -> anyhow::Result<String> {
    let ts = parse_timestamp(timestamp)?;
    let tz = offset.map(offset_from_hours).transpose()?;
    let jd = datetime_to_jd(&ts, tz)?;
    let mjd = datetime_to_mjd(&ts, tz)?;
    tracing::debug!(%ts, jd, mjd, "converted timestamp");
    Ok(format!("JD  {jd:.8}\nMJD {mjd:.8}"))
}

pub fn calendar(value: f64, is_mjd: bool, offset: Option<f64>) -> anyhow::Result<String> {
    let jd = if is_mjd { mjd_to_jd(value) } else { value };
    let ts = match offset {
        Some(hours) => jd_to_calendar_in(jd, offset_from_hours(hours)?)?,
        None => jd_to_calendar(jd)?,
    };
    Ok(ts.to_string())
}

pub fn sidereal(
    timestamp: &str,
    offset: Option<f64>,
    longitude: Option<&Longitude>,
    apparent: bool,
    base: &FormatOptions,
) -> anyhow::Result<String> {
    let ts = parse_timestamp(timestamp)?;
    let tz = offset.map(offset_from_hours).transpose()?;
    let (label, greenwich) = if apparent {
        ("GAST", compute_gast(&ts, tz)?)
    } else {
        ("GMST", compute_gmst(&ts, tz)?)
    };

    let mut out = format!("{label} {}", render_time(greenwich, base));
    if let Some(longitude) = longitude {
        let lst = gmst_to_lst(greenwich, longitude);
        out.push_str(&format!("\nLST  {}", render_time(lst, base)));
    }
    Ok(out)
}

pub fn coordinate(ra: &str, dec: Option<&str>, base: &FormatOptions) -> anyhow::Result<String> {
    let coord = match dec {
        Some(dec) => EquatorialCoordinate::parse_pair(ra, dec)?,
        None => ra.parse::<EquatorialCoordinate>()?,
    };
    let galactic = coord.to_galactic();
    let ecliptic = coord.to_ecliptic();

    let hours = base.clone().with_unit(AngleUnit::Hours);
    let degrees = base.clone().with_unit(AngleUnit::Degrees);
    Ok([
        format!("RA       {}", coord.ra().to_string_with(&hours)),
        format!("Dec      {}", coord.dec().to_string_with(&degrees)),
        format!("J-name   {}", coord.to_j_string()),
        format!("Galactic {galactic}"),
        format!("Ecliptic {ecliptic}"),
    ]
    .join("\n"))
}

pub fn horizontal(
    ra: &str,
    dec: &str,
    timestamp: &str,
    offset: Option<f64>,
    latitude: Angle,
    longitude: &Longitude,
    base: &FormatOptions,
) -> anyhow::Result<String> {
    let coord = EquatorialCoordinate::parse_pair(ra, dec)?;
    let ts = parse_timestamp(timestamp)?;
    let tz = offset.map(offset_from_hours).transpose()?;
    let hz = coord.to_horizontal(latitude, longitude, &ts, tz)?;

    let degrees = base.clone().with_unit(AngleUnit::Degrees);
    Ok([
        format!("Alt      {}", hz.altitude().to_string_with(&degrees)),
        format!(
            "Az       {} ({})",
            hz.azimuth().to_string_with(&degrees),
            hz.cardinal_direction()
        ),
    ]
    .join("\n"))
}

pub fn separation(
    a: (&str, &str),
    b: (&str, &str),
    units: AngleUnit,
    base: &FormatOptions,
) -> anyhow::Result<String> {
    let a = EquatorialCoordinate::parse_pair(a.0, a.1)?;
    let b = EquatorialCoordinate::parse_pair(b.0, b.1)?;
    let options = base.clone().with_unit(units).decimal(true);
    Ok(a.angular_separation(&b).to_string_with(&options))
}

fn render_time(st: SiderealTime, base: &FormatOptions) -> String {
    st.angle().to_string_with(&base.clone().with_unit(AngleUnit::Hours))
}
