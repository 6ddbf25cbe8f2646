//! Human Duration
//!
//! Renders elapsed time intervals as readable phrases, compact symbolic
//! strings or clock-style timestamps, truncated to a chosen precision.
//!
//! # Features
//!
//! - Six fixed units: year (365 days), week, day, hour, minute, second
//! - Precision cutoff that truncates finer units
//! - Ceiling that collapses coarser units into one (`26 hours` instead of
//!   `1 day 2 hours`)
//! - Long (`1 day 4 minutes`), short (`1d4m`) and timestamp (`24:04`) styles
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//!
//! let elapsed = Duration::from_secs(61 * 60);
//! assert_eq!(human_duration::format(elapsed, "minute"), "1 hour 1 minute");
//! assert_eq!(human_duration::format(Duration::ZERO, "second"), "less than a second");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Interval ──▶ decompose ──▶ select ──▶ write_long ──▶ "1 day 4 minutes"
//!               (ceiling)   (precision) write_short ─▶ "1d4m"
//!                                       write_timestamp ▶ "24:04"
//! ```
//!
//! Every operation is a pure function of its inputs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod decompose;
pub mod error;
pub mod format;
pub mod interval;
pub mod precision;
pub mod render;
pub mod unit;

pub use decompose::{decompose, Decomposition, UnitCount};
pub use error::{AppError, ConfigError, DurationError};
pub use format::{
    format, format_ceiling, format_ceiling_padded, format_short, format_timestamp, render_long,
    render_short, render_timestamp, FormatOptions, HumanDuration, Style,
};
pub use interval::Interval;
pub use precision::{resolve_precision, select, Selection};
pub use unit::Unit;
