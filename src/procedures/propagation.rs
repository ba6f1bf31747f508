/*!
Unit propagation over the implication graph, as a worklist fixpoint.

A clause enters the worklist when its pending-antecedent counter reaches zero, i.e. when every negated literal of the clause is known false.
Taking a clause from the worklist establishes its positive literal, and the out-edges of the established atom are traversed to decrement the counters of the clauses the atom feeds.
A clause with no positive literal taken from the worklist, or a counter reaching zero on an edge into ⊥, is a violation.

Each atom's out-edges are traversed at most once per query, so the total count of edge visits is bounded by the edge count of the graph.
The guard is also what keeps the verdict independent of the order clauses are taken in: a second derivation of an established atom decrements nothing twice.

Violations do not stop propagation.
Every violated clause is collected, together with the literals it required, for conflict extraction after refinement.
*/

use crate::{
    config::WorklistOrder,
    context::Context,
    db::{valuation::ValuationStatus, ClauseKey},
    misc::log::targets::{self},
    structures::{atom::Atom, implication_graph::Node, literal::Literal},
    types::err::{self, ErrorKind},
};

impl Context {
    /// Propagates the worklist to a fixpoint.
    ///
    /// Returns an error only on a corrupt clause database; violations are recorded, not raised.
    pub fn propagate(&mut self) -> Result<(), ErrorKind> {
        while let Some(key) = self.pop_clause() {
            self.counters.clauses_popped += 1;

            let clause = match self.clause_db.graph_clause(key) {
                Some(clause) => clause.clone(),
                None => return Err(err::ClauseDBError::MissingGraphClause(key).into()),
            };

            match clause.positive() {
                Some(positive) => {
                    log::trace!(target: targets::PROPAGATION, "Established {positive:?} via {key:?}");
                    match self.valuation.try_assign(positive.atom(), true) {
                        ValuationStatus::Conflict => {
                            // The head was settled false by an earlier refinement.
                            self.violate(key, &[positive]);
                        }
                        ValuationStatus::None | ValuationStatus::Set => {
                            self.fire(positive.atom());
                        }
                    }
                }

                None => {
                    let literals: Vec<Literal> = clause.literals().to_vec();
                    self.violate(key, &literals);
                }
            }
        }
        Ok(())
    }

    /// The next clause of the worklist, per the configured order.
    fn pop_clause(&mut self) -> Option<ClauseKey> {
        match self.config.worklist_order {
            WorklistOrder::Fifo => self.worklist.pop_front(),
            WorklistOrder::Lifo => self.worklist.pop_back(),
        }
    }

    /// Traverses the out-edges of an established atom, at most once per query.
    fn fire(&mut self, atom: Atom) {
        if self.fired[atom as usize] {
            return;
        }
        self.fired[atom as usize] = true;

        for (target, edge_key) in self.graph.edges_from_atom(atom) {
            self.counters.edge_visits += 1;

            let pending = match self.pending.get_mut(edge_key) {
                Some(pending) => pending,
                None => continue,
            };
            if *pending > 0 {
                *pending -= 1;
            }
            if *pending > 0 {
                continue;
            }

            match target {
                // Every antecedent of the constraint holds.
                // The driving literal's negation is what the clause required.
                Node::Bottom => self.violate(edge_key, &[Literal::new(atom, false)]),

                // ⊤ is never the target of an edge.
                Node::Top => {}

                Node::Atom(head) => match self.valuation.value_of(head) {
                    // Established through another clause already.
                    Some(true) => {}

                    // Settled false elsewhere; left for refinement to reconcile.
                    Some(false) => {}

                    None => self.worklist.push_back(edge_key),
                },
            }
        }
    }

    /// Records a violated clause, with the literals the clause required to hold.
    fn violate(&mut self, key: ClauseKey, required: &[Literal]) {
        log::debug!(target: targets::PROPAGATION, "Violation of {key:?}, requiring {required:?}");
        self.satisfiable = false;
        self.satisfied.remove(&key);
        self.unsatisfied.insert(key);
        for literal in required {
            self.expected.insert(*literal);
        }
    }
}
