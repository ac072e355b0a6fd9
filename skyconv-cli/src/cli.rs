use clap::{Args, Parser, Subcommand};
use skyconv_core::angle::AngleUnit;
use skyconv_core::{FormatOptions, Separator};
use skyconv_time::LongitudeDirection;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "skyconv")]
#[command(about = "Astronomical angle, time and coordinate conversions", version)]
pub struct Cli {
    /// TOML file with a [format] table of display defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert an angle between units and notations
    Angle {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Unit of the input value
        #[arg(long, default_value = "degrees")]
        from: AngleUnit,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Julian Date and MJD of an ISO 8601 timestamp
    Jd {
        timestamp: String,

        /// UTC offset in hours for a timestamp without a zone
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
    },

    /// Calendar timestamp of a Julian Date
    Calendar {
        #[arg(allow_hyphen_values = true)]
        jd: f64,

        /// Read the value as a Modified Julian Date
        #[arg(long)]
        mjd: bool,

        /// Express the result at this UTC offset in hours
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
    },

    /// Greenwich and local sidereal time of a timestamp
    Sidereal {
        timestamp: String,

        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,

        /// Site longitude; prints LST when given
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,

        #[arg(long, default_value = "w")]
        direction: LongitudeDirection,

        /// Unit of the longitude
        #[arg(long, default_value = "degrees")]
        units: AngleUnit,

        /// Apply the nutation correction (GAST)
        #[arg(long)]
        apparent: bool,
    },

    /// RA/Dec with J designation, galactic and ecliptic coordinates
    Coord {
        /// Right ascension in hours, or a combined RA/Dec string
        #[arg(allow_hyphen_values = true)]
        ra: String,

        /// Declination in degrees
        #[arg(allow_hyphen_values = true)]
        dec: Option<String>,
    },

    /// Altitude and azimuth of an RA/Dec position seen from a site
    Altaz {
        /// Right ascension in hours
        #[arg(allow_hyphen_values = true)]
        ra: String,

        /// Declination in degrees
        #[arg(allow_hyphen_values = true)]
        dec: String,

        /// ISO 8601 time of the observation
        #[arg(long)]
        time: String,

        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,

        /// Site latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        latitude: String,

        /// Site longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        longitude: String,

        #[arg(long, default_value = "w")]
        direction: LongitudeDirection,
    },

    /// Great-circle separation of two RA/Dec positions
    Separation {
        #[arg(allow_hyphen_values = true)]
        ra1: String,
        #[arg(allow_hyphen_values = true)]
        dec1: String,
        #[arg(allow_hyphen_values = true)]
        ra2: String,
        #[arg(allow_hyphen_values = true)]
        dec2: String,

        /// Unit of the printed separation
        #[arg(long, default_value = "degrees")]
        units: AngleUnit,
    },
}

/// Display flags; each overrides the config file when given.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatArgs {
    /// Output unit (defaults to the input unit)
    #[arg(long)]
    pub to: Option<AngleUnit>,

    /// Print a decimal number instead of sexagesimal fields
    #[arg(long)]
    pub decimal: bool,

    /// Field separator, split by character (e.g. ":" or "hms")
    #[arg(long)]
    pub sep: Option<Separator>,

    /// Decimal places on the seconds (or the decimal value)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Zero-pad the leading field
    #[arg(long)]
    pub pad: bool,
}

impl FormatArgs {
    /// Layers these flags over `base`, with `unit` used when `--to` is absent.
    pub fn apply(&self, base: &FormatOptions, unit: AngleUnit) -> FormatOptions {
        let mut options = base.clone().with_unit(self.to.unwrap_or(unit));
        if self.decimal {
            options = options.decimal(true);
        }
        if let Some(sep) = &self.sep {
            options = options.with_separator(sep.clone());
        }
        if let Some(precision) = self.precision {
            options = options.with_precision(precision);
        }
        if self.pad {
            options = options.padded(true);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_positionals() {
        let cli = Cli::try_parse_from(["skyconv", "coord", "14:24:57", "-05:22:30.5"]).unwrap();
        match cli.command {
            Command::Coord { ra, dec } => {
                assert_eq!(ra, "14:24:57");
                assert_eq!(dec.as_deref(), Some("-05:22:30.5"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parses_units_and_direction() {
        let cli = Cli::try_parse_from([
            "skyconv",
            "sidereal",
            "2011-11-28T03:51:03Z",
            "--longitude",
            "172.235",
            "--direction",
            "East",
        ])
        .unwrap();
        match cli.command {
            Command::Sidereal { direction, units, .. } => {
                assert_eq!(direction, LongitudeDirection::East);
                assert_eq!(units, AngleUnit::Degrees);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(Cli::try_parse_from(["skyconv", "angle", "10", "--from", "furlongs"]).is_err());
    }

    #[test]
    fn test_parses_altaz() {
        let cli = Cli::try_parse_from([
            "skyconv",
            "altaz",
            "05:30:00",
            "-05:22:30",
            "--time",
            "2000-01-01T12:00:00Z",
            "--latitude",
            "-33.5",
            "--longitude",
            "75",
        ])
        .unwrap();
        match cli.command {
            Command::Altaz {
                dec,
                latitude,
                direction,
                ..
            } => {
                assert_eq!(dec, "-05:22:30");
                assert_eq!(latitude, "-33.5");
                assert_eq!(direction, LongitudeDirection::West);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_format_flags_override_base() {
        let base = FormatOptions::default().with_precision(3).padded(false);
        let args = FormatArgs {
            to: Some(AngleUnit::Hours),
            sep: Some(Separator::colon()),
            pad: true,
            ..FormatArgs::default()
        };
        let options = args.apply(&base, AngleUnit::Degrees);
        assert_eq!(options.unit, AngleUnit::Hours);
        assert_eq!(options.precision, 3);
        assert_eq!(options.separator, Separator::colon());
        assert!(options.pad);
    }
}
