use std::{env, path::Path};

use log::LevelFilter;
use walklist_derive::{CliOptions, CliValue, KvDisplay};

use crate::cut_list::VoterFilter;
use crate::geo::point::GeoPoint;
use crate::{Error, Result};

// Legacy default start point: downtown Phoenix, AZ.
const DEFAULT_START: GeoPoint = GeoPoint::new(33.4484, -112.074);

/// Runtime options for the walk-list planner.
#[derive(Clone, Debug, CliOptions, KvDisplay)]
pub struct PlannerOptions {
    /// Start point for the walk order, as `lat,lng`.
    #[cli(long = "start", parse_with = "GeoPoint::parse")]
    pub start: GeoPoint,
    /// Boundary polygon file (JSON array of `{lat, lng}` points). Empty
    /// means no geofence.
    #[cli(long = "boundary")]
    pub boundary: String,
    /// Comma-separated party descriptions to keep. Empty means every party.
    #[cli(long = "parties", parse_with = "parse_party_list")]
    #[kv(fmt = "len")]
    pub parties: Vec<String>,
    /// Keep only voters who live at the canvassed property.
    pub lives_at_property_only: bool,
    /// Keep only mail voters.
    pub mail_voters_only: bool,
    /// Structured logging level.
    #[cli(long = "log-level", parse_with = "LogLevel::parse")]
    pub log_level: LogLevel,
    /// Logging output format.
    #[cli(long = "log-format", parse_with = "LogFormat::parse")]
    pub log_format: LogFormat,
    /// Include timestamps in log lines.
    pub log_timestamp: bool,
    /// Optional output file path for logs. Empty means stderr.
    #[cli(long = "log-output")]
    pub log_output: String,
    /// Optional input file path for voter records. Empty means stdin.
    #[cli(long = "input")]
    pub input: String,
    /// Optional output file path for the ordered walk list. Empty means
    /// stdout.
    #[cli(long = "output")]
    pub output: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-level")]
pub enum LogLevel {
    Error,
    #[cli(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
            Self::Off => LevelFilter::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, CliValue)]
#[cli_value(option = "log-format")]
pub enum LogFormat {
    Compact,
    Pretty,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            boundary: String::new(),
            parties: Vec::new(),
            lives_at_property_only: false,
            mail_voters_only: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_timestamp: true,
            log_output: String::new(),
            input: String::new(),
            output: String::new(),
        }
    }
}

impl PlannerOptions {
    pub fn from_args() -> Result<Self> {
        Self::parse_from_iter(env::args().skip(1))
    }

    fn parse_from_iter<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        let mut args = args
            .into_iter()
            .map(|arg| arg.as_ref().to_owned())
            .peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Error::invalid_input(Self::usage()));
            }

            let Some(raw_name) = arg.strip_prefix("--") else {
                return Err(Error::invalid_input(format!(
                    "Unexpected argument: {arg}\n\n{}",
                    Self::usage()
                )));
            };

            if raw_name.is_empty() {
                return Err(Error::invalid_input(format!(
                    "Invalid option name: {arg}\n\n{}",
                    Self::usage()
                )));
            }

            let (name, value) = Self::split_arg(raw_name, &mut args);

            if options.apply_cli_option(&name, value.clone())? {
                continue;
            }

            match name.as_str() {
                "lives-at-property-only" => {
                    options.lives_at_property_only = flag_value(&name, value)?;
                }
                "mail-voters-only" => {
                    options.mail_voters_only = flag_value(&name, value)?;
                }
                "log-timestamp" => {
                    options.log_timestamp = flag_value(&name, value)?;
                }
                "no-log-timestamp" => {
                    if value.is_some() {
                        return Err(Error::invalid_input(format!(
                            "Flag --{name} does not take a value"
                        )));
                    }
                    options.log_timestamp = false;
                }
                _ => {
                    return Err(Error::invalid_input(format!(
                        "Unknown option: --{name}\n\n{}",
                        Self::usage()
                    )));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  walklist [options] [--input voters.json]\n",
            "  walklist [options] < voters.json\n\n",
            "Options:\n",
            "  --start <lat,lng>\n",
            "  --boundary <path>\n",
            "  --parties <a,b,...>\n",
            "  --lives-at-property-only[=<bool>]\n",
            "  --mail-voters-only[=<bool>]\n",
            "  --log-level <error|warn|info|debug|trace|off>\n",
            "  --log-format <compact|pretty>\n",
            "  --log-timestamp[=<bool>]\n",
            "  --no-log-timestamp\n",
            "  --log-output <path>\n",
            "  --input <path>\n",
            "  --output <path>\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  walklist --boundary precinct12.json --output route.txt < voters.json\n",
            "  walklist --input voters.json --start 33.4484,-112.074\n",
            "  walklist --parties Democrat,Other --mail-voters-only --log-level=info\n",
        )
    }

    /// Attribute filters implied by the CLI options.
    pub fn filter(&self) -> VoterFilter {
        VoterFilter {
            parties: self.parties.clone(),
            lives_at_property_only: self.lives_at_property_only,
            mail_voters_only: self.mail_voters_only,
        }
    }

    pub fn boundary_path(&self) -> Option<&Path> {
        optional_path(&self.boundary)
    }

    pub fn input_path(&self) -> Option<&Path> {
        optional_path(&self.input)
    }

    pub fn output_path(&self) -> Option<&Path> {
        optional_path(&self.output)
    }

    pub fn log_output_path(&self) -> Option<&Path> {
        optional_path(&self.log_output)
    }
}

fn optional_path(raw: &str) -> Option<&Path> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        None
    } else {
        Some(Path::new(raw))
    }
}

fn parse_party_list(raw: &str) -> Result<Vec<String>> {
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect())
}

fn flag_value(name: &str, value: Option<String>) -> Result<bool> {
    match value {
        Some(v) => parse_bool(name, &v),
        None => Ok(true),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON" => Ok(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "off" | "OFF" => Ok(false),
        _ => Err(Error::invalid_input(format!(
            "Invalid boolean for --{name}: {value} (expected true/false)"
        ))),
    }
}
