//! Clock-style form: `H:MM:SS` or `H:MM`.

use std::fmt::{self, Write};

use crate::decompose::decompose;
use crate::interval::Interval;
use crate::unit::Unit;

/// Writes `interval` as a clock reading.
///
/// Hours are never split into days and are never padded; an empty hour
/// component is written as `0`. Minutes and seconds are always two digits.
/// Seconds appear only at [`Unit::Second`] precision, and any precision
/// coarser than an hour is treated as hour precision, which shows `:00`
/// minutes.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_timestamp(f: &mut impl Write, interval: Interval, precision: Unit) -> fmt::Result {
    let precision = precision.max(Unit::Hour);
    let counts = decompose(interval, Some(Unit::Hour));
    let shown = |unit: Unit| {
        if unit <= precision {
            counts.amount(unit)
        } else {
            0
        }
    };

    write!(f, "{}:{:02}", shown(Unit::Hour), shown(Unit::Minute))?;
    if precision == Unit::Second {
        write!(f, ":{:02}", shown(Unit::Second))?;
    }
    Ok(())
}
