/*!
Refinement of the assignment left by propagation, and extraction of minimal inconsistent pairs.

Propagation establishes only what unit resolution forces from facts.
Refinement closes the assignment further by narrowing each clause against the assignment:
- A negated literal whose raw atom is assigned true is known false and is removed, by copy.
- A clause narrowed to a single literal is forced: a clause to be satisfied requires the literal to hold, a violated clause requires it to fail.

[close_satisfied](Context::close_satisfied) and [close_unsatisfied](Context::close_unsatisfied) each iterate to a fixpoint over their clause set, and [close_maximal](Context::close_maximal) alternates the two until the assignment stops growing.

A forced assignment meeting an opposing settled value is never fatal.
The atom is recorded as a minimal inconsistent pair, its value is retracted, and closure continues --- every pair is collected, as each is an independent witness of inconsistency.
*/

use crate::{
    context::Context,
    db::{valuation::ValuationStatus, ClauseKey},
    misc::log::targets::{self},
    structures::{atom::Atom, literal::Literal},
    types::err::{self, ErrorKind},
};

/// A clause narrowed against an assignment, by copy.
///
/// The stored [GraphClause](crate::structures::clause::GraphClause) is immutable; refinement works over these reduced copies, rebuilt per query.
#[derive(Clone, Debug)]
pub struct ReducedClause {
    /// The key of the clause the copy was narrowed from.
    key: ClauseKey,

    /// The literals not yet known false.
    literals: Vec<Literal>,
}

impl ReducedClause {
    /// The key of the clause the copy was narrowed from.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The literals not yet known false.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }
}

impl Context {
    /// Alternates the two closures until the assignment stops changing across a full alternation.
    pub fn close_maximal(&mut self) {
        loop {
            let before = self.valuation.assigned_count();
            self.counters.refinement_passes += 1;

            self.close_satisfied();
            self.close_unsatisfied();

            if self.valuation.assigned_count() == before {
                break;
            }
        }
        log::debug!(target: targets::REFINEMENT, "Closed after {} passes", self.counters.refinement_passes);
    }

    /// Closes the assignment under the clauses to be satisfied.
    pub fn close_satisfied(&mut self) {
        self.close_set(true);
    }

    /// Closes the assignment under the violated clauses, which must come out false.
    pub fn close_unsatisfied(&mut self) {
        self.close_set(false);
    }

    /// A fixpoint pass over one clause set.
    ///
    /// For the satisfied set a lone literal is forced to hold; for the unsatisfied set, to fail.
    fn close_set(&mut self, satisfied: bool) {
        let keys: Vec<ClauseKey> = match satisfied {
            true => self.satisfied.iter().copied().collect(),
            false => self.unsatisfied.iter().copied().collect(),
        };

        let mut working: Vec<ReducedClause> = keys
            .iter()
            .filter_map(|key| {
                self.clause_db.graph_clause(*key).map(|clause| ReducedClause {
                    key: *key,
                    literals: clause.literals().to_vec(),
                })
            })
            .collect();

        loop {
            let mut changed = false;
            let mut kept = Vec::with_capacity(working.len());

            for clause in working.drain(..) {
                let reduced: Vec<Literal> = clause
                    .literals
                    .iter()
                    .filter(|literal| {
                        !(literal.is_negated()
                            && self.valuation.value_of(literal.atom()) == Some(true))
                    })
                    .copied()
                    .collect();

                if reduced.len() != clause.literals.len() {
                    changed = true;
                }

                match reduced.as_slice() {
                    [literal] => {
                        let value = match satisfied {
                            true => literal.polarity(),
                            false => !literal.polarity(),
                        };
                        log::trace!(target: targets::REFINEMENT, "{:?} forces {} ← {value}", clause.key, literal.atom());
                        self.assign_or_conflict(literal.atom(), value);
                        changed = true;
                    }
                    _ => kept.push(ReducedClause {
                        key: clause.key,
                        literals: reduced,
                    }),
                }
            }

            working = kept;
            if !changed {
                break;
            }
        }
    }

    /// Assigns, unless the atom already seeds an inconsistent pair.
    ///
    /// An opposing settled value makes the atom such a seed: the pair is recorded and the value retracted.
    fn assign_or_conflict(&mut self, atom: Atom, value: bool) {
        if self.conflicts.contains(&atom) {
            return;
        }
        match self.valuation.try_assign(atom, value) {
            ValuationStatus::None | ValuationStatus::Set => {}
            ValuationStatus::Conflict => {
                log::debug!(target: targets::CONFLICT, "Both polarities of {atom} required");
                self.conflicts.insert(atom);
                self.valuation.retract(atom);
            }
        }
    }

    /// Extracts the minimal inconsistent pairs behind an unsatisfiable verdict.
    ///
    /// An assigned atom contradicting a literal some violated clause required is such a pair, as is an assumed unit clause contradicting a settled value.
    /// An assumed unit clause whose atom is unset, and untouched by any conflict, installs its value.
    pub fn extract_conflicts(&mut self) -> Result<(), ErrorKind> {
        let assigned: Vec<Literal> = self.valuation.literals().collect();
        for literal in assigned {
            if self.expected.contains(&literal.negate()) {
                log::debug!(target: targets::CONFLICT, "{} contradicts an expectation", literal.atom());
                self.conflicts.insert(literal.atom());
                self.valuation.retract(literal.atom());
            }
        }

        for key in self.assumptions.clone() {
            let clause = match self.clause_db.graph_clause(key) {
                Some(clause) => clause,
                None => return Err(err::ClauseDBError::MissingGraphClause(key).into()),
            };
            let literal = match clause.literals() {
                [literal] => *literal,
                _ => continue,
            };

            match self.valuation.value_of(literal.atom()) {
                Some(value) if value == literal.polarity() => {}
                Some(_) => {
                    self.conflicts.insert(literal.atom());
                    self.valuation.retract(literal.atom());
                }
                None => {
                    if !self.conflicts.contains(&literal.atom()) {
                        self.valuation.try_assign(literal.atom(), literal.polarity());
                    }
                }
            }
        }

        if !self.conflicts.is_empty() {
            self.satisfiable = false;
        }
        Ok(())
    }
}
