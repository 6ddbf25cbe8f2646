//! Truncating a decomposition to the requested precision.

use crate::decompose::{Decomposition, UnitCount};
use crate::unit::Unit;

/// Resolves a precision token, falling back to [`Unit::Second`].
///
/// Empty and unrecognized tokens are not errors: they select full precision.
#[must_use]
pub fn resolve_precision(token: &str) -> Unit {
    Unit::matching(token).unwrap_or(Unit::Second)
}

/// The units of a [`Decomposition`] that survive a precision cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    decomposition: Decomposition,
    precision: Unit,
}

impl Selection {
    /// The finest unit kept.
    #[must_use]
    pub const fn precision(&self) -> Unit {
        self.precision
    }

    /// The underlying decomposition, including truncated units.
    #[must_use]
    pub const fn decomposition(&self) -> &Decomposition {
        &self.decomposition
    }

    /// Non-zero counts at or coarser than the precision, coarsest first.
    pub fn included(&self) -> impl Iterator<Item = UnitCount> + '_ {
        self.decomposition
            .counts()
            .iter()
            .take(self.precision as usize + 1)
            .copied()
            .filter(|count| count.amount > 0)
    }

    /// `Some(precision)` when the interval is shorter than one precision
    /// unit and only a floor phrase can describe it.
    #[must_use]
    pub fn floor(&self) -> Option<Unit> {
        self.included().next().is_none().then_some(self.precision)
    }
}

/// Drops every unit finer than `precision`. Truncates, never rounds.
#[must_use]
pub const fn select(decomposition: Decomposition, precision: Unit) -> Selection {
    Selection {
        decomposition,
        precision,
    }
}
