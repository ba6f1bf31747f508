/*!
Literals are atoms paired with a (boolean) polarity.

The representation is an [Atom] paired with a boolean, where a polarity of `true` is a positive occurrence of the atom and a polarity of `false` a negated occurrence.

An example:

```rust
# use heron_horn::structures::literal::Literal;
let atom = 79;
let literal = Literal::new(atom, true);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert!(!literal.negate().polarity());
assert_eq!(literal.negate().negate(), literal);
```

Literals are ordered by atom and then polarity, with the (Rust default) ordering of 'false' being (strictly) less than 'true', and are hashable to allow straightforward use as members of sets, etc.
*/

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The atom of the literal --- the 'raw' projection, stripping polarity.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// Whether the literal is a negated occurrence of its atom.
    pub fn is_negated(&self) -> bool {
        !self.polarity
    }
}
