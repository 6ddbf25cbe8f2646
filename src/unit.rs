//! Calendar-like time units.
//!
//! Units are ordered coarsest to finest, so `Unit::Year < Unit::Second`.
//! A year is a fixed 365 days; no calendar awareness is involved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: u64 = 7 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// One of the six granularities an interval is broken into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// 365 days.
    Year,
    /// 7 days.
    Week,
    /// 24 hours.
    Day,
    /// 60 minutes.
    Hour,
    /// 60 seconds.
    Minute,
    /// The finest unit.
    Second,
}

impl Unit {
    /// All units, coarsest first.
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Week,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Length of one unit in seconds.
    #[must_use]
    pub const fn seconds(self) -> u64 {
        match self {
            Self::Year => SECONDS_PER_YEAR,
            Self::Week => SECONDS_PER_WEEK,
            Self::Day => SECONDS_PER_DAY,
            Self::Hour => SECONDS_PER_HOUR,
            Self::Minute => SECONDS_PER_MINUTE,
            Self::Second => 1,
        }
    }

    /// Singular English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
        }
    }

    /// Single-letter symbol used by the short form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Year => 'y',
            Self::Week => 'w',
            Self::Day => 'd',
            Self::Hour => 'h',
            Self::Minute => 'm',
            Self::Second => 's',
        }
    }

    /// Writes the name, pluralized with a plain `s` unless `amount` is 1.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_label(self, f: &mut impl fmt::Write, amount: u64) -> fmt::Result {
        f.write_str(self.name())?;
        if amount != 1 {
            f.write_char('s')?;
        }
        Ok(())
    }

    /// Looks up a unit by its singular name or its name followed by `s`.
    ///
    /// Matching is case-sensitive. Returns `None` for anything else, which
    /// the formatting operations treat as "use the default".
    ///
    /// # Example
    ///
    /// ```
    /// use human_duration::Unit;
    ///
    /// assert_eq!(Unit::matching("hours"), Some(Unit::Hour));
    /// assert_eq!(Unit::matching("Hour"), None);
    /// ```
    #[must_use]
    pub fn matching(token: &str) -> Option<Self> {
        let singular = token.strip_suffix('s').unwrap_or(token);
        Self::ALL
            .into_iter()
            .find(|unit| unit.name() == token || unit.name() == singular)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::matching(s).ok_or_else(|| DurationError::UnknownUnit { token: s.into() })
    }
}
