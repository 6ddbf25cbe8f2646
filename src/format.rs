//! Public formatting operations.
//!
//! The string-token functions ([`format`], [`format_ceiling`],
//! [`format_ceiling_padded`], [`format_short`], [`format_timestamp`]) accept
//! unit names as text and silently fall back to defaults for anything they
//! don't recognize. The typed functions take [`FormatOptions`] directly.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! let elapsed = Duration::from_secs(86_400 + 4 * 60 + 8);
//! assert_eq!(human_duration::format(elapsed, "second"), "1 day 4 minutes 8 seconds");
//! assert_eq!(human_duration::format(elapsed, "minute"), "1 day 4 minutes");
//! assert_eq!(human_duration::format_short(elapsed, "minute"), "1d4m");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::decompose::decompose;
use crate::interval::Interval;
use crate::precision::{resolve_precision, select};
use crate::render::{write_long, write_short, write_timestamp};
use crate::unit::Unit;

/// How an interval is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `1 day 4 minutes`
    #[default]
    Long,
    /// `1d4m`
    Short,
    /// `24:04:08`
    Timestamp,
}

impl Style {
    /// Looks up a style by its lowercase name.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "long" => Some(Self::Long),
            "short" => Some(Self::Short),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "long"),
            Self::Short => write!(f, "short"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// Precision, ceiling and padding for a single rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Finest unit shown; finer units are truncated.
    pub precision: Unit,
    /// Unit that absorbs every coarser unit.
    pub ceiling: Option<Unit>,
    /// Zero-pad every count after the leading one to two digits.
    pub padded: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: Unit::Second,
            ceiling: None,
            padded: false,
        }
    }
}

impl FormatOptions {
    /// Builds options from text tokens.
    ///
    /// Unrecognized or empty tokens select full precision and no ceiling.
    #[must_use]
    pub fn from_tokens(precision: &str, ceiling: &str) -> Self {
        Self {
            precision: resolve_precision(precision),
            ceiling: Unit::matching(ceiling),
            padded: false,
        }
    }

    /// Sets the precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: Unit) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the ceiling.
    #[must_use]
    pub const fn with_ceiling(mut self, ceiling: Unit) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Enables or disables zero-padding.
    #[must_use]
    pub const fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }
}

/// Display adapter for an [`Interval`].
///
/// The timestamp style always collapses into hours and ignores the
/// ceiling and padding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration {
    interval: Interval,
    options: FormatOptions,
    style: Style,
}

impl HumanDuration {
    /// Long-form adapter for `interval`.
    #[must_use]
    pub const fn new(interval: Interval, options: FormatOptions) -> Self {
        Self {
            interval,
            options,
            style: Style::Long,
        }
    }

    /// Switches to `style`.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Switches to the short symbolic form.
    #[must_use]
    pub const fn short(self) -> Self {
        self.style(Style::Short)
    }

    /// Switches to the clock form.
    #[must_use]
    pub const fn timestamp(self) -> Self {
        self.style(Style::Timestamp)
    }
}

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FormatOptions {
            precision,
            ceiling,
            padded,
        } = self.options;
        tracing::trace!(
            secs = self.interval.as_secs(),
            %precision,
            ?ceiling,
            padded,
            style = %self.style,
            "Formatting interval"
        );

        if self.style == Style::Timestamp {
            return write_timestamp(f, self.interval, precision);
        }

        let selection = select(decompose(self.interval, ceiling), precision);
        match self.style {
            Style::Short => write_short(f, &selection),
            _ => write_long(f, &selection, padded),
        }
    }
}

/// Renders the long phrase for typed options.
#[must_use]
pub fn render_long(interval: Interval, options: FormatOptions) -> String {
    interval.human(options).to_string()
}

/// Renders the short symbolic form for typed options.
#[must_use]
pub fn render_short(interval: Interval, options: FormatOptions) -> String {
    interval.human(options).short().to_string()
}

/// Renders the clock form at `precision`.
#[must_use]
pub fn render_timestamp(interval: Interval, precision: Unit) -> String {
    let options = FormatOptions::default().with_precision(precision);
    interval.human(options).timestamp().to_string()
}

/// Long phrase truncated to `precision`, e.g. `1 day 4 minutes`.
#[must_use]
pub fn format(interval: impl Into<Interval>, precision: &str) -> String {
    format_ceiling(interval, precision, "")
}

/// Long phrase with every unit coarser than `ceiling` collapsed into it.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// let elapsed = Duration::from_secs(26 * 3_600 + 33 * 60 + 24);
/// assert_eq!(
///     human_duration::format_ceiling(elapsed, "second", "hour"),
///     "26 hours 33 minutes 24 seconds"
/// );
/// ```
#[must_use]
pub fn format_ceiling(interval: impl Into<Interval>, precision: &str, ceiling: &str) -> String {
    format_ceiling_padded(interval, precision, ceiling, false)
}

/// Like [`format_ceiling`], optionally zero-padding non-leading counts.
#[must_use]
pub fn format_ceiling_padded(
    interval: impl Into<Interval>,
    precision: &str,
    ceiling: &str,
    padded: bool,
) -> String {
    let options = FormatOptions::from_tokens(precision, ceiling).padded(padded);
    render_long(interval.into(), options)
}

/// Short symbolic form truncated to `precision`, e.g. `2y2w2d2m2s`.
#[must_use]
pub fn format_short(interval: impl Into<Interval>, precision: &str) -> String {
    render_short(interval.into(), FormatOptions::from_tokens(precision, ""))
}

/// Clock form: `H:MM:SS` at second precision, `H:MM` otherwise.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// let elapsed = Duration::from_secs(25 * 3_600 + 20 * 60 + 14);
/// assert_eq!(human_duration::format_timestamp(elapsed, "second"), "25:20:14");
/// assert_eq!(human_duration::format_timestamp(elapsed, "minute"), "25:20");
/// ```
#[must_use]
pub fn format_timestamp(interval: impl Into<Interval>, precision: &str) -> String {
    render_timestamp(interval.into(), resolve_precision(precision))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use test_case::test_case;

    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const YEAR: u64 = 365 * DAY;

    #[test_case(DAY + 4 * MINUTE + 8, "second", "1 day 4 minutes 8 seconds")]
    #[test_case(DAY + 4 * MINUTE + 8, "minute", "1 day 4 minutes")]
    #[test_case(DAY + 4 * MINUTE + 8, "day", "1 day")]
    #[test_case(4 * YEAR + 2 * DAY, "second", "4 years 2 days")]
    #[test_case(60 * MINUTE, "hour", "1 hour")]
    #[test_case(60 * MINUTE, "minute", "1 hour" ; "whole hour at minute precision")]
    #[test_case(61 * MINUTE, "minute", "1 hour 1 minute")]
    #[test_case(61 * MINUTE + 10, "minute", "1 hour 1 minute" ; "seconds truncated")]
    #[test_case(61 * MINUTE + 10, "second", "1 hour 1 minute 10 seconds")]
    #[test_case(24 * HOUR, "day", "1 day" ; "whole day")]
    #[test_case(49 * HOUR, "day", "2 days")]
    #[test_case(49 * HOUR, "hour", "2 days 1 hour")]
    #[test_case(49 * HOUR + 1, "foobarlalala", "2 days 1 hour 1 second")]
    #[test_case(49 * HOUR + 1, "", "2 days 1 hour 1 second" ; "empty precision")]
    #[test_case(61 * MINUTE, "hours", "1 hour" ; "plural precision")]
    #[test_case(YEAR + DAY + 2 * HOUR, "hours", "1 year 1 day 2 hours")]
    #[test_case(YEAR + 8 * HOUR + 33 * MINUTE + 24, "second", "1 year 8 hours 33 minutes 24 seconds")]
    #[test_case(0, "second", "less than a second")]
    #[test_case(0, "", "less than a second" ; "zero with default precision")]
    #[test_case(30 * MINUTE, "hours", "less than a hour")]
    fn test_format(secs: u64, precision: &str, expected: &str) {
        assert_eq!(format(Duration::from_secs(secs), precision), expected);
    }

    #[test]
    fn test_format_ignores_sub_second_remainder() {
        assert_eq!(format(Duration::from_millis(1_999), "second"), "1 second");
        assert_eq!(format(Duration::from_millis(999), "second"), "less than a second");
    }

    #[test]
    fn test_format_ceiling() {
        let elapsed = Duration::from_secs(26 * HOUR + 33 * MINUTE + 24);
        assert_eq!(
            format_ceiling(elapsed, "second", "hour"),
            "26 hours 33 minutes 24 seconds"
        );
        assert_eq!(
            format_ceiling(elapsed, "second", "minutes"),
            "1593 minutes 24 seconds"
        );
        assert_eq!(
            format_ceiling(elapsed, "second", "nope"),
            "1 day 2 hours 33 minutes 24 seconds"
        );
    }

    #[test]
    fn test_format_ceiling_finer_than_precision_floors() {
        let elapsed = Duration::from_secs(3 * HOUR);
        assert_eq!(format_ceiling(elapsed, "hour", "minute"), "less than a hour");
    }

    #[test]
    fn test_format_ceiling_padded() {
        let elapsed = Duration::from_secs(2 * HOUR + 3 * MINUTE + 4);
        assert_eq!(
            format_ceiling_padded(elapsed, "second", "hour", true),
            "2 hours 03 minutes 04 seconds"
        );
        assert_eq!(
            format_ceiling_padded(elapsed, "second", "hour", false),
            "2 hours 3 minutes 4 seconds"
        );
    }

    #[test]
    fn test_format_short() {
        let elapsed = Duration::from_secs(2 * YEAR + 16 * DAY + 2 * MINUTE + 2);
        assert_eq!(format_short(elapsed, "second"), "2y2w2d2m2s");
        assert_eq!(format_short(elapsed, "weeks"), "2y2w");
        assert_eq!(format_short(Duration::ZERO, "minute"), "lessthanam");
        assert_eq!(format_short(Duration::ZERO, "second"), "lessthanas");
    }

    #[test]
    fn test_format_timestamp() {
        let elapsed = Duration::from_secs(25 * HOUR + 20 * MINUTE + 14);
        assert_eq!(format_timestamp(elapsed, "second"), "25:20:14");
        assert_eq!(format_timestamp(elapsed, "minute"), "25:20");
        assert_eq!(format_timestamp(elapsed, "day"), "25:00");
        assert_eq!(format_timestamp(elapsed, ""), "25:20:14");
    }

    #[test]
    fn test_human_duration_display() {
        let interval = Interval::from_secs(90);
        let options = FormatOptions::default();
        assert_eq!(format!("took {}", interval.human(options)), "took 1 minute 30 seconds");
        assert_eq!(interval.human(options).short().to_string(), "1m30s");
        assert_eq!(interval.human(options).timestamp().to_string(), "0:01:30");
    }

    #[test]
    fn test_typed_and_token_operations_agree() {
        let interval = Interval::from_secs(3 * DAY + 5 * HOUR + 7);
        let options = FormatOptions::default()
            .with_precision(Unit::Hour)
            .with_ceiling(Unit::Day);
        assert_eq!(render_long(interval, options), format_ceiling(interval, "hour", "day"));
        assert_eq!(render_long(interval, options), "3 days 5 hours");
    }

    #[test]
    fn test_options_serde_defaults() {
        let options: FormatOptions = serde_json::from_str(r#"{"precision":"minute"}"#).unwrap();
        assert_eq!(options, FormatOptions::default().with_precision(Unit::Minute));

        let options: FormatOptions =
            serde_json::from_str(r#"{"ceiling":"hour","padded":true}"#).unwrap();
        assert_eq!(options.ceiling, Some(Unit::Hour));
        assert!(options.padded);
    }

    #[test]
    fn test_style_tokens() {
        assert_eq!(Style::from_token("short"), Some(Style::Short));
        assert_eq!(Style::from_token("Short"), None);
        assert_eq!(Style::Timestamp.to_string(), "timestamp");
        assert_eq!(Style::default(), Style::Long);
    }
}
