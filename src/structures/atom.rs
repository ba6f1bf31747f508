/*!
(The internal representation of) an atom, aka. a proposition letter.

Atoms are things with a name whose (boolean) truth value is of interest.
- 'Internal' atoms are dense `u32` indicies handed out by the [atom database](crate::db::atom).
- 'External' atoms are opaque strings, supplied by a caller when building a [HornClause](crate::structures::clause::HornClause) and stored in the atom database.

Two external atoms are the same proposition exactly when their names match, and as names are interned this is index equality internally.

The dense representation allows atoms to be used as the indicies of a structure, e.g. `valuation[atom]`, without taking too much space.

# Notes
- The truth sentinels ⊤ and ⊥ are *not* atoms --- see [Node](crate::structures::implication_graph::Node).
- In the SAT literature atoms are often called 'variables'.
*/

/// An atom, aka. a proposition letter.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = Atom::MAX;
