//! Writers turning selected unit counts into text.
//!
//! Each writer targets [`std::fmt::Write`] so the same code backs both the
//! `String`-returning operations and the [`HumanDuration`] display adapter.
//!
//! [`HumanDuration`]: crate::HumanDuration

mod short;
mod timestamp;

pub use short::write_short;
pub use timestamp::write_timestamp;

use std::fmt::{self, Write};

use crate::precision::Selection;

/// Writes the long phrase, e.g. `1 day 4 minutes`.
///
/// With `padded`, every count after the leading one is zero-padded to two
/// digits. An interval shorter than the precision unit is written as
/// `less than a {unit}`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_long(f: &mut impl Write, selection: &Selection, padded: bool) -> fmt::Result {
    if let Some(unit) = selection.floor() {
        return write!(f, "less than a {unit}");
    }

    for (index, count) in selection.included().enumerate() {
        if index == 0 {
            write!(f, "{}", count.amount)?;
        } else if padded {
            write!(f, " {:02}", count.amount)?;
        } else {
            write!(f, " {}", count.amount)?;
        }
        f.write_char(' ')?;
        count.unit.write_label(f, count.amount)?;
    }
    Ok(())
}
