/*!
A valuation --- a partial map from atoms to truth values.

The representation is a vector of optional booleans indexed by atoms, with `None` for an atom without a value.

All assignment flows through [try_assign](Valuation::try_assign), which reports whether the assignment was fresh, redundant, or in conflict with the standing value.
A conflicting assignment leaves the standing value in place, so a caller decides how to react (typically by recording the atom as a point of inconsistency and [retracting](Valuation::retract) it).
*/

use crate::{
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
};

/// The outcome of attempting an assignment against a valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuationStatus {
    /// The atom had no value, and now has the given value.
    None,

    /// The atom already had the given value.
    Set,

    /// The atom has the opposing value, which remains in place.
    Conflict,
}

/// A partial map from atoms to truth values.
#[derive(Clone, Debug, Default)]
pub struct Valuation {
    /// The value of each atom, indexed by the atom.
    values: Vec<Option<bool>>,
}

impl Valuation {
    /// Extends the valuation to cover at least `count` atoms, with fresh atoms unvalued.
    pub fn accommodate(&mut self, count: usize) {
        if self.values.len() < count {
            self.values.resize(count, None);
        }
    }

    /// The value of the given atom, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.values.get(atom as usize).copied().flatten()
    }

    /// Attempts to assign `value` to `atom`.
    ///
    /// On [Conflict](ValuationStatus::Conflict) the standing value is untouched.
    pub fn try_assign(&mut self, atom: Atom, value: bool) -> ValuationStatus {
        match self.values[atom as usize] {
            None => {
                self.values[atom as usize] = Some(value);
                log::trace!(target: targets::VALUATION, "{atom} ← {value}");
                ValuationStatus::None
            }
            Some(standing) if standing == value => ValuationStatus::Set,
            Some(_) => ValuationStatus::Conflict,
        }
    }

    /// Removes any value from the given atom.
    pub fn retract(&mut self, atom: Atom) {
        log::trace!(target: targets::VALUATION, "{atom} ← ?");
        self.values[atom as usize] = None;
    }

    /// Removes every value, keeping the accommodated size.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|value| *value = None);
    }

    /// A count of atoms with a value.
    pub fn assigned_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }

    /// The valued atoms as literals, in atom order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(atom, value)| value.map(|polarity| Literal::new(atom as Atom, polarity)))
    }
}
