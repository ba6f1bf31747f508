/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- Internal and external name maps, for reading and writing [Atom]s, [Literal](crate::structures::literal::Literal)s, etc.

Internal atoms are dense indicies, handed out in order of first sight of a name.
Interning is never undone: the atoms of a knowledge base keep their indicies across every query made against the same context, so results of distinct queries are directly comparable.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, ATOM_MAX},
    types::err::{self},
};

/// The atom database.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// The external name of each atom, indexed by the atom.
    names: Vec<String>,

    /// A map from an external name to the corresponding internal atom.
    indicies: HashMap<String, Atom>,
}

impl AtomDB {
    /// The atom with the given external name, interning the name on first sight.
    ///
    /// Returns an error if a fresh atom would overflow the atom representation.
    pub fn atom_of(&mut self, name: &str) -> Result<Atom, err::AtomDBError> {
        if let Some(atom) = self.indicies.get(name) {
            return Ok(*atom);
        }

        if self.names.len() >= ATOM_MAX as usize {
            log::error!(target: targets::ATOM_DB, "The atom limit has been reached");
            return Err(err::AtomDBError::AtomsExhausted);
        }

        let atom = self.names.len() as Atom;
        self.names.push(name.to_owned());
        self.indicies.insert(name.to_owned(), atom);
        log::trace!(target: targets::ATOM_DB, "+Atom {atom} ({name})");
        Ok(atom)
    }

    /// The interned atom of the given name, if the name has been seen.
    pub fn internal_representation(&self, name: &str) -> Option<Atom> {
        self.indicies.get(name).copied()
    }

    /// The external name of the given atom.
    ///
    /// # Safety
    /// Assumes the atom was handed out by this database.
    pub fn external_representation(&self, atom: Atom) -> &str {
        &self.names[atom as usize]
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut db = AtomDB::default();
        let a = db.atom_of("A").unwrap();
        let b = db.atom_of("B").unwrap();
        assert_ne!(a, b);
        assert_eq!(db.atom_of("A").unwrap(), a);
        assert_eq!(db.external_representation(b), "B");
        assert_eq!(db.count(), 2);
    }
}
