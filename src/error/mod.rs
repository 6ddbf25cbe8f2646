//! Error types for the duration formatter.
//!
//! This module defines a small error hierarchy:
//! - [`AppError`]: Top-level errors surfaced by the binary
//! - [`DurationError`]: Invalid intervals and unit tokens
//! - [`ConfigError`]: Configuration errors
//!
//! The formatting operations themselves never fail. Errors only arise when
//! converting signed or floating-point sources into an [`Interval`], when a
//! unit token is parsed strictly, or when loading configuration.
//!
//! All errors implement `Send + Sync`.
//!
//! [`Interval`]: crate::Interval

use thiserror::Error;

/// Top-level application error.
///
/// Wraps all subsystem errors for unified error handling in the binary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Interval or unit error.
    #[error("Duration error: {0}")]
    Duration(#[from] DurationError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Interval and unit errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// A signed source held a negative value.
    #[error("Negative interval: {value}")]
    NegativeInterval {
        /// Rendering of the rejected value.
        value: String,
    },

    /// A floating-point source was NaN or infinite.
    #[error("Non-finite interval: {value}")]
    NonFiniteInterval {
        /// Rendering of the rejected value.
        value: String,
    },

    /// A finite value too large for `Duration`.
    #[error("Interval out of range: {value}")]
    OutOfRange {
        /// Rendering of the rejected value.
        value: String,
    },

    /// A unit token matched none of the known units.
    #[error("Unknown unit: '{token}' (expected one of second, minute, hour, day, week, year)")]
    UnknownUnit {
        /// The unrecognized token.
        token: String,
    },
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
