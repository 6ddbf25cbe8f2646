//! Compact symbolic form: `2y2w2d2m2s`.

use std::fmt::{self, Write};

use crate::precision::Selection;

/// Writes each kept count followed by its unit symbol, without separators.
///
/// The floor case is the long floor phrase compressed the same way:
/// `less than a minute` becomes `lessthanam`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_short(f: &mut impl Write, selection: &Selection) -> fmt::Result {
    if let Some(unit) = selection.floor() {
        return write!(f, "lessthana{}", unit.symbol());
    }

    for count in selection.included() {
        write!(f, "{}{}", count.amount, count.unit.symbol())?;
    }
    Ok(())
}
