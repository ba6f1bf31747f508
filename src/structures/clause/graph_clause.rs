use crate::{db::ClauseKey, structures::literal::Literal};

/// The disjunctive rewrite of a [HornClause](super::HornClause), as used for the implication-graph encoding.
///
/// Invariant: at most one literal is positive.
/// A clause compiled from a negated head has no positive literal, and behaves as a pure constraint aimed at ⊥.
///
/// Immutable once compiled.
/// During refinement clauses are narrowed by copy --- see [ReducedClause](crate::procedures::refinement::ReducedClause) --- never by mutating the stored clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphClause {
    /// The key of the originating Horn clause in the clause database.
    key: ClauseKey,

    /// The disjoined literals of the clause.
    literals: Vec<Literal>,

    /// The unique positive literal of the clause, if one exists.
    positive: Option<Literal>,
}

impl GraphClause {
    /// A fresh, empty, graph clause tied to the given key.
    pub(crate) fn empty(key: ClauseKey) -> Self {
        GraphClause {
            key,
            literals: Vec::default(),
            positive: None,
        }
    }

    /// Appends a literal to the clause.
    ///
    /// # Panics
    /// A second positive literal breaks the Horn invariant.
    /// The compilation rule cannot produce one, so this is an unrecoverable programming error rather than a result.
    pub(crate) fn push(&mut self, literal: Literal) {
        if literal.polarity() {
            if self.positive.is_some() {
                panic!("! Two positive literals in the disjunctive form of a Horn clause");
            }
            self.positive = Some(literal);
        }
        self.literals.push(literal);
    }

    /// The key of the originating Horn clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals of the clause, in compilation order (body negations first, then the head).
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The positive literal of the clause, if one exists.
    pub fn positive(&self) -> Option<Literal> {
        self.positive
    }

    /// The number of negated literals in the clause at compilation time.
    ///
    /// This seeds the pending-antecedent counter: the count of literals not yet known true, decremented by propagation as antecedents are established.
    pub fn pending_count(&self) -> usize {
        self.literals
            .iter()
            .filter(|literal| literal.is_negated())
            .count()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }
}
