//! The elapsed-time value being formatted.

use std::time::Duration;

use chrono::TimeDelta;

use crate::error::DurationError;
use crate::format::{FormatOptions, HumanDuration};

/// A non-negative elapsed time with nanosecond resolution.
///
/// Unsigned by construction: signed or floating-point sources go through
/// the fallible constructors, which reject negative values instead of
/// clamping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval(Duration);

impl Interval {
    /// The empty interval.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Creates an interval from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Creates an interval from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Creates an interval from fractional seconds.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::NonFiniteInterval`] for NaN or infinity,
    /// [`DurationError::NegativeInterval`] for values below zero and
    /// [`DurationError::OutOfRange`] for values too large for a `Duration`.
    pub fn try_from_secs_f64(secs: f64) -> Result<Self, DurationError> {
        if !secs.is_finite() {
            return Err(DurationError::NonFiniteInterval {
                value: secs.to_string(),
            });
        }
        if secs < 0.0 {
            return Err(DurationError::NegativeInterval {
                value: format!("{secs}s"),
            });
        }
        Duration::try_from_secs_f64(secs)
            .map(Self)
            .map_err(|_| DurationError::OutOfRange {
                value: format!("{secs:e}s"),
            })
    }

    /// Whole seconds, with any sub-second remainder truncated.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0.as_secs()
    }

    /// The wrapped [`Duration`].
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Display adapter rendering this interval as a long phrase.
    ///
    /// # Example
    ///
    /// ```
    /// use human_duration::{FormatOptions, Interval, Unit};
    ///
    /// let interval = Interval::from_secs(3_661);
    /// let options = FormatOptions::default().with_precision(Unit::Minute);
    /// assert_eq!(interval.human(options).to_string(), "1 hour 1 minute");
    /// ```
    #[must_use]
    pub const fn human(self, options: FormatOptions) -> HumanDuration {
        HumanDuration::new(self, options)
    }
}

impl From<Duration> for Interval {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl From<Interval> for Duration {
    fn from(interval: Interval) -> Self {
        interval.0
    }
}

impl TryFrom<TimeDelta> for Interval {
    type Error = DurationError;

    fn try_from(delta: TimeDelta) -> Result<Self, Self::Error> {
        delta
            .to_std()
            .map(Self)
            .map_err(|_| DurationError::NegativeInterval {
                value: delta.to_string(),
            })
    }
}
