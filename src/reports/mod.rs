/*!
Reports for the context.

An [InferenceResult] packages everything a query establishes: the verdict, the closed partial assignment, the final standing of each clause, and the minimal inconsistent pairs behind an unsatisfiable verdict.

Results are plain values, detached from the context which produced them.
Clauses are sorted by key and the assignment by atom, so two runs of the same query produce equal results.
*/

use crate::structures::{atom::Atom, clause::GraphClause, literal::Literal};

/// High-level reports regarding a query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The queried collection of clauses is satisfiable.
    Satisfiable,

    /// The queried collection of clauses is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the queried collection of clauses is unknown, for some reason.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// The detailed outcome of a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferenceResult {
    /// Whether the queried collection of clauses is satisfiable.
    satisfiable: bool,

    /// Clauses satisfied on the final assignment, sorted by key.
    satisfied: Vec<GraphClause>,

    /// Clauses violated on the final assignment, sorted by key.
    unsatisfied: Vec<GraphClause>,

    /// The closed partial assignment, as literals sorted by atom.
    assignment: Vec<Literal>,

    /// The minimal inconsistent pairs, each an atom with both polarities required.
    inconsistencies: Vec<[Literal; 2]>,
}

impl InferenceResult {
    pub(crate) fn new(
        satisfiable: bool,
        satisfied: Vec<GraphClause>,
        unsatisfied: Vec<GraphClause>,
        assignment: Vec<Literal>,
        inconsistencies: Vec<[Literal; 2]>,
    ) -> Self {
        InferenceResult {
            satisfiable,
            satisfied,
            unsatisfied,
            assignment,
            inconsistencies,
        }
    }

    /// Whether the queried collection of clauses is satisfiable.
    pub fn satisfiable(&self) -> bool {
        self.satisfiable
    }

    /// The verdict, as a high-level report.
    pub fn report(&self) -> Report {
        match self.satisfiable {
            true => Report::Satisfiable,
            false => Report::Unsatisfiable,
        }
    }

    /// Clauses satisfied on the final assignment.
    pub fn satisfied(&self) -> &[GraphClause] {
        &self.satisfied
    }

    /// Clauses violated on the final assignment.
    pub fn unsatisfied(&self) -> &[GraphClause] {
        &self.unsatisfied
    }

    /// The closed partial assignment, in atom order.
    ///
    /// Atoms taking part in an inconsistent pair carry no value here.
    pub fn assignment(&self) -> &[Literal] {
        &self.assignment
    }

    /// The value of the given atom on the final assignment, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.assignment
            .iter()
            .find(|literal| literal.atom() == atom)
            .map(|literal| literal.polarity())
    }

    /// The minimal inconsistent pairs --- for each, both polarities of a single atom are required.
    pub fn inconsistencies(&self) -> &[[Literal; 2]] {
        &self.inconsistencies
    }
}
