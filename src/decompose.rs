//! Breaking an interval into per-unit counts.
//!
//! Without a ceiling every unit is taken modulo its parent, except the
//! week/day pair: weeks wrap every 52 and reset with each 365-day year, so a
//! leftover 53rd week is absorbed into the year count instead of being shown.
//! With a ceiling, the ceiling unit holds the whole interval in its own terms
//! and every coarser unit is zero.

use crate::interval::Interval;
use crate::unit::Unit;

const DAYS_PER_YEAR: u64 = 365;
const DAYS_PER_WEEK: u64 = 7;
const WEEKS_PER_YEAR: u64 = 52;

/// Amount of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitCount {
    /// The unit being counted.
    pub unit: Unit,
    /// How many whole units.
    pub amount: u64,
}

/// Six unit counts, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition {
    counts: [UnitCount; 6],
}

impl Decomposition {
    /// Counts in coarsest-to-finest order.
    #[must_use]
    pub const fn counts(&self) -> &[UnitCount; 6] {
        &self.counts
    }

    /// Amount held by `unit`.
    #[must_use]
    pub const fn amount(&self, unit: Unit) -> u64 {
        self.counts[unit as usize].amount
    }

    /// Weighted sum of the counts, in seconds.
    #[must_use]
    pub fn total_secs(&self) -> u64 {
        self.counts
            .iter()
            .map(|count| count.amount * count.unit.seconds())
            .sum()
    }
}

/// Breaks `interval` into unit counts.
///
/// Sub-second remainders are truncated; nothing is rounded.
///
/// # Example
///
/// ```
/// use human_duration::{decompose, Interval, Unit};
///
/// let interval = Interval::from_secs(26 * 3_600 + 33 * 60 + 24);
///
/// let plain = decompose(interval, None);
/// assert_eq!(plain.amount(Unit::Day), 1);
/// assert_eq!(plain.amount(Unit::Hour), 2);
///
/// let collapsed = decompose(interval, Some(Unit::Hour));
/// assert_eq!(collapsed.amount(Unit::Day), 0);
/// assert_eq!(collapsed.amount(Unit::Hour), 26);
/// ```
#[must_use]
pub fn decompose(interval: Interval, ceiling: Option<Unit>) -> Decomposition {
    let secs = interval.as_secs();
    let in_units = |unit: Unit| secs / unit.seconds();

    let total_days = in_units(Unit::Day);
    let days_into_year = total_days % DAYS_PER_YEAR;
    // Capped so the day count below can never go negative.
    let weeks = (in_units(Unit::Week) % WEEKS_PER_YEAR).min(days_into_year / DAYS_PER_WEEK);

    let mut amounts = [
        in_units(Unit::Year),
        weeks,
        days_into_year - weeks * DAYS_PER_WEEK,
        in_units(Unit::Hour) % 24,
        in_units(Unit::Minute) % 60,
        secs % 60,
    ];

    if let Some(ceiling) = ceiling {
        let index = ceiling as usize;
        amounts[..index].fill(0);
        amounts[index] = in_units(ceiling);
        if ceiling == Unit::Week {
            amounts[Unit::Day as usize] = total_days % DAYS_PER_WEEK;
        }
    }

    let mut counts = [UnitCount {
        unit: Unit::Year,
        amount: 0,
    }; 6];
    for ((slot, unit), amount) in counts.iter_mut().zip(Unit::ALL).zip(amounts) {
        *slot = UnitCount { unit, amount };
    }

    Decomposition { counts }
}
