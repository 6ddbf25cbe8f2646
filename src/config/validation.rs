//! Configuration validation.
//!
//! This module provides validation logic for configuration values,
//! rejecting combinations that could only ever render a floor phrase.

use tracing_subscriber::EnvFilter;

use super::{Config, CEILING_VAR, LOG_LEVEL_VAR};
use crate::error::ConfigError;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `HUMAN_DURATION_CEILING` is finer than `HUMAN_DURATION_PRECISION`
/// - `LOG_LEVEL` is not a valid `tracing` filter directive
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // A ceiling below the precision leaves nothing to show
    if let Some(ceiling) = config.ceiling {
        if ceiling > config.precision {
            return Err(ConfigError::InvalidValue {
                var: CEILING_VAR.into(),
                reason: format!(
                    "ceiling '{ceiling}' is finer than precision '{}'",
                    config.precision
                ),
            });
        }
    }

    if let Err(e) = config.log_level.parse::<EnvFilter>() {
        return Err(ConfigError::InvalidValue {
            var: LOG_LEVEL_VAR.into(),
            reason: format!("not a valid log filter: {e}"),
        });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::unit::Unit;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_ceiling_finer_than_precision() {
        let config = Config {
            precision: Unit::Day,
            ceiling: Some(Unit::Hour),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: CEILING_VAR.into(),
                reason: "ceiling 'hour' is finer than precision 'day'".into(),
            }
        );
    }

    #[test]
    fn test_boundary_ceiling_equals_precision() {
        let config = Config {
            precision: Unit::Hour,
            ceiling: Some(Unit::Hour),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_ceiling_coarser_than_precision() {
        let config = Config {
            precision: Unit::Second,
            ceiling: Some(Unit::Year),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let config = Config {
            log_level: "DEBUG".into(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_log_filter_directives() {
        for directive in ["human_duration=debug", "warn,human_duration=trace"] {
            let config = Config {
                log_level: directive.into(),
                ..Config::default()
            };
            assert!(validate_config(&config).is_ok(), "{directive}");
        }
    }

    #[test]
    fn test_unknown_log_level() {
        let config = Config {
            log_level: "human_duration=loud".into(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var, .. } if var == LOG_LEVEL_VAR));
    }
}
