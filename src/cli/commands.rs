//! Command definitions and argument parsing.

use super::errors::CommandParseError;
use crate::config::Config;
use crate::format::{FormatOptions, Style};
use crate::interval::Interval;
use crate::unit::Unit;

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage.
    Help,

    /// Format one or more intervals.
    Format(FormatRequest),
}

/// Intervals to format, with per-invocation overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatRequest {
    /// Overrides the configured precision.
    pub precision: Option<Unit>,
    /// Overrides the configured ceiling.
    pub ceiling: Option<Unit>,
    /// Overrides the configured style.
    pub style: Option<Style>,
    /// Zero-pad every count after the leading one.
    pub padded: bool,
    /// Values are milliseconds rather than seconds.
    pub millis: bool,
    /// Raw interval values.
    pub values: Vec<u64>,
}

impl Command {
    /// Parse a command from string arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError`] for unknown flags, flags missing their
    /// value, unit names that don't parse, values that are not non-negative
    /// integers, or when no value is given at all.
    pub fn parse(args: &[String]) -> Result<Self, CommandParseError> {
        if args
            .first()
            .is_some_and(|arg| matches!(arg.as_str(), "help" | "--help" | "-h"))
        {
            return Ok(Self::Help);
        }

        let mut request = FormatRequest::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--precision" | "-p" => {
                    request.precision = Some(parse_unit("--precision", args.next())?);
                }
                "--ceiling" | "-c" => {
                    request.ceiling = Some(parse_unit("--ceiling", args.next())?);
                }
                "--short" | "-s" => request.style = Some(Style::Short),
                "--timestamp" | "-t" => request.style = Some(Style::Timestamp),
                "--padded" => request.padded = true,
                "--millis" => request.millis = true,
                "--help" | "-h" => return Ok(Self::Help),
                value => {
                    if let Ok(parsed) = value.parse::<u64>() {
                        request.values.push(parsed);
                    } else if value.starts_with('-') && value.parse::<i64>().is_err() {
                        return Err(CommandParseError::UnknownFlag(value.into()));
                    } else {
                        return Err(CommandParseError::InvalidValue {
                            flag: "VALUE".into(),
                            value: value.into(),
                        });
                    }
                }
            }
        }

        if request.values.is_empty() {
            return Err(CommandParseError::MissingInterval);
        }
        Ok(Self::Format(request))
    }
}

impl FormatRequest {
    /// Options after applying overrides on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandParseError::InvalidValue`] for `--ceiling` when the
    /// merged ceiling is finer than the merged precision, the same rule
    /// [`crate::config::validate_config`] applies to the environment.
    pub fn options(&self, config: &Config) -> Result<FormatOptions, CommandParseError> {
        let precision = self.precision.unwrap_or(config.precision);
        let ceiling = self.ceiling.or(config.ceiling);

        // A ceiling below the precision leaves nothing to show
        if let Some(unit) = ceiling.filter(|unit| *unit > precision) {
            return Err(CommandParseError::InvalidValue {
                flag: "--ceiling".into(),
                value: unit.to_string(),
            });
        }

        Ok(FormatOptions {
            precision,
            ceiling,
            padded: self.padded,
        })
    }

    /// The parsed values as intervals.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.values.iter().map(|&value| {
            if self.millis {
                Interval::from_millis(value)
            } else {
                Interval::from_secs(value)
            }
        })
    }

    /// Renders every value, one line each.
    ///
    /// # Errors
    ///
    /// Fails when the merged options are invalid (see [`Self::options`]).
    pub fn render(&self, config: &Config) -> Result<Vec<String>, CommandParseError> {
        let options = self.options(config)?;
        let style = self.style.unwrap_or(config.style);
        Ok(self
            .intervals()
            .map(|interval| interval.human(options).style(style).to_string())
            .collect())
    }
}

/// Parse the value following a unit flag.
fn parse_unit(flag: &str, value: Option<&String>) -> Result<Unit, CommandParseError> {
    let value = value.ok_or_else(|| CommandParseError::MissingValue(flag.into()))?;
    value
        .parse()
        .map_err(|_| CommandParseError::InvalidValue {
            flag: flag.into(),
            value: value.clone(),
        })
}
