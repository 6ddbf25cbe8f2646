//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use human_duration::config::Config;
//! use human_duration::{Interval, Style, Unit};
//!
//! // Build a config directly (use Config::from_env() in production)
//! let config = Config {
//!     precision: Unit::Minute,
//!     ceiling: Some(Unit::Hour),
//!     style: Style::Long,
//!     log_level: "info".to_string(),
//! };
//!
//! let rendered = config.render(Interval::from_secs(26 * 3_600 + 61));
//! assert_eq!(rendered, "26 hours 1 minute");
//! ```

mod validation;

pub use validation::validate_config;

use std::env;

use crate::error::ConfigError;
use crate::format::{FormatOptions, Style};
use crate::interval::Interval;
use crate::unit::Unit;

/// Default precision.
pub const DEFAULT_PRECISION: Unit = Unit::Second;

/// Default rendering style.
pub const DEFAULT_STYLE: Style = Style::Long;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding the precision unit.
pub const PRECISION_VAR: &str = "HUMAN_DURATION_PRECISION";

/// Environment variable holding the ceiling unit.
pub const CEILING_VAR: &str = "HUMAN_DURATION_CEILING";

/// Environment variable holding the rendering style.
pub const STYLE_VAR: &str = "HUMAN_DURATION_STYLE";

/// Environment variable holding the log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Formatter configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
/// Unlike the token-based formatting functions, configuration is strict: a
/// misspelled unit is an error rather than a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Finest unit shown.
    pub precision: Unit,
    /// Unit that absorbs every coarser unit, if any.
    pub ceiling: Option<Unit>,
    /// Output style.
    pub style: Style,
    /// Log filter: a level (`info`) or `tracing` directives (`human_duration=debug`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            ceiling: None,
            style: DEFAULT_STYLE,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `HUMAN_DURATION_PRECISION`: finest unit shown (default: `second`)
    /// - `HUMAN_DURATION_CEILING`: unit absorbing coarser units (default: none)
    /// - `HUMAN_DURATION_STYLE`: `long`, `short` or `timestamp` (default: `long`)
    /// - `LOG_LEVEL`: logging level (default: `info`)
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - A unit variable is not a recognized unit name
    /// - `HUMAN_DURATION_STYLE` is not a recognized style
    /// - The values fail validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let precision = parse_env_unit(PRECISION_VAR)?.unwrap_or(DEFAULT_PRECISION);
        let ceiling = parse_env_unit(CEILING_VAR)?;

        let style = match env_value(STYLE_VAR) {
            None => DEFAULT_STYLE,
            Some(value) => {
                Style::from_token(&value).ok_or_else(|| ConfigError::InvalidValue {
                    var: STYLE_VAR.into(),
                    reason: format!("'{value}' must be one of long, short, timestamp"),
                })?
            }
        };

        let log_level = env_value(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());

        let config = Self {
            precision,
            ceiling,
            style,
            log_level,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Options for the long and short styles.
    #[must_use]
    pub const fn format_options(&self) -> FormatOptions {
        FormatOptions {
            precision: self.precision,
            ceiling: self.ceiling,
            padded: false,
        }
    }

    /// Renders `interval` in the configured style.
    #[must_use]
    pub fn render(&self, interval: Interval) -> String {
        interval
            .human(self.format_options())
            .style(self.style)
            .to_string()
    }
}

/// Read an environment variable, treating an empty value as unset.
fn env_value(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if value.is_empty() => {
            tracing::warn!(var = name, "Empty environment variable ignored");
            None
        }
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

/// Parse an environment variable as a unit name, `None` if not set.
fn parse_env_unit(name: &str) -> Result<Option<Unit>, ConfigError> {
    env_value(name)
        .map(|value| {
            value.parse::<Unit>().map_err(|e| ConfigError::InvalidValue {
                var: name.into(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
