/*!
The context --- to which clauses are added and within which queries take place, etc.

A context owns the databases, the implication graph, and the transient state of a query, tied together by a configuration.
Atom interning persists across queries made against the same context, so results of distinct queries are directly comparable name for name.

# Example
```rust
# use heron_horn::context::Context;
# use heron_horn::config::Config;
# use heron_horn::reports::Report;
# use heron_horn::structures::clause::HornClause;
let mut the_context = Context::from_config(Config::default());

let kb = [HornClause::rule("C", ["A", "B"])];
let queries = [HornClause::fact("A"), HornClause::fact("B")];

let result = the_context.query(kb, queries).unwrap();
assert_eq!(result.report(), Report::Satisfiable);
assert_eq!(the_context.value_of("C"), Some(true));
```
*/

mod counters;
pub use counters::Counters;

use std::collections::{BTreeSet, HashSet, VecDeque};

use slotmap::SecondaryMap;

use crate::{
    config::Config,
    db::{
        atom::AtomDB,
        clause::ClauseDB,
        valuation::Valuation,
        ClauseKey,
    },
    misc::log::targets::{self},
    reports::{InferenceResult, Report},
    structures::{
        atom::Atom,
        clause::{GraphClause, HornClause},
        implication_graph::{ImplicationGraph, Node},
        literal::Literal,
    },
    types::err::ErrorKind,
};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, with no verdict settled.
    Input,

    /// The last query found the clauses consistent.
    Satisfiable,

    /// The last query found the clauses inconsistent.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A context, exclusively owned for the duration of any query.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to queries made against the context.
    pub counters: Counters,

    /// The atom database.
    pub atom_db: AtomDB,

    /// The clause database.
    pub clause_db: ClauseDB,

    /// The implication graph of the enrolled clauses.
    pub graph: ImplicationGraph,

    /// The state of the context.
    pub state: ContextState,

    /// The partial assignment of the current query.
    pub(crate) valuation: Valuation,

    /// The pending-antecedent counter of each enrolled clause.
    pub(crate) pending: SecondaryMap<ClauseKey, usize>,

    /// Whether each atom's out-edges have been traversed this query.
    pub(crate) fired: Vec<bool>,

    /// Clauses established and awaiting traversal of their conclusion.
    pub(crate) worklist: VecDeque<ClauseKey>,

    /// Clauses not (yet) found violated, sorted by key.
    pub(crate) satisfied: BTreeSet<ClauseKey>,

    /// Clauses found violated, sorted by key.
    pub(crate) unsatisfied: BTreeSet<ClauseKey>,

    /// Literals a violated clause required to hold.
    pub(crate) expected: HashSet<Literal>,

    /// Atoms required at both polarities, each the seed of a minimal inconsistent pair.
    pub(crate) conflicts: BTreeSet<Atom>,

    /// Whether no violation has been found.
    pub(crate) satisfiable: bool,

    /// The keys of the clauses assumed by the current query.
    pub(crate) assumptions: Vec<ClauseKey>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,

            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            graph: ImplicationGraph::default(),
            state: ContextState::Input,

            valuation: Valuation::default(),
            pending: SecondaryMap::default(),
            fired: Vec::default(),
            worklist: VecDeque::default(),
            satisfied: BTreeSet::default(),
            unsatisfied: BTreeSet::default(),
            expected: HashSet::default(),
            conflicts: BTreeSet::default(),
            satisfiable: true,
            assumptions: Vec::default(),
        }
    }

    /// Clears the clause database, graph, and every piece of query state, then enrolls the given clauses.
    ///
    /// The atom interning table persists, as names are stable across queries.
    pub fn initialize<I>(&mut self, clauses: I) -> Result<(), ErrorKind>
    where
        I: IntoIterator<Item = HornClause>,
    {
        self.clause_db = ClauseDB::default();
        self.graph.clear();
        self.pending.clear();
        self.worklist.clear();
        self.satisfied.clear();
        self.unsatisfied.clear();
        self.expected.clear();
        self.conflicts.clear();
        self.assumptions.clear();
        self.satisfiable = true;
        self.state = ContextState::Input;

        self.valuation.accommodate(self.atom_db.count());
        self.valuation.clear();
        self.fired.clear();
        self.fired.resize(self.atom_db.count(), false);

        self.counters.reset_query_counts();

        for clause in clauses {
            self.enroll(clause)?;
        }
        Ok(())
    }

    /// Enrolls a clause: stores it, compiles it, counts its pending antecedents, adds its edges, and seeds the worklist if nothing is pending.
    ///
    /// Returns the clause's key and whether the clause was fresh.
    /// A clause structurally equal to an enrolled clause is not enrolled again.
    pub(crate) fn enroll(&mut self, clause: HornClause) -> Result<(ClauseKey, bool), ErrorKind> {
        let (key, fresh) = self.clause_db.insert(clause.clone());
        if !fresh {
            return Ok((key, false));
        }
        log::debug!(target: targets::CLAUSE_DB, "+Clause {clause} [{key:?}]");

        let compiled = self.compile(key, &clause)?;

        self.valuation.accommodate(self.atom_db.count());
        self.fired.resize(self.atom_db.count(), false);

        let pending = compiled.pending_count();
        self.pending.insert(key, pending);
        self.satisfied.insert(key);

        match compiled.positive() {
            None => {
                for literal in compiled.literals() {
                    self.graph
                        .add_edge(Node::Atom(literal.atom()), Node::Bottom, key);
                }
            }
            Some(head) if pending == 0 => {
                self.graph.add_edge(Node::Top, Node::Atom(head.atom()), key);
            }
            Some(head) => {
                for literal in compiled.literals() {
                    if literal.is_negated() {
                        self.graph
                            .add_edge(Node::Atom(literal.atom()), Node::Atom(head.atom()), key);
                    }
                }
            }
        }

        self.clause_db.attach_graph_clause(key, compiled);

        if pending == 0 {
            self.worklist.push_back(key);
        }

        Ok((key, true))
    }

    /// The compiled, disjunctive, form of a clause, with every name interned.
    fn compile(&mut self, key: ClauseKey, clause: &HornClause) -> Result<GraphClause, ErrorKind> {
        let mut compiled = GraphClause::empty(key);
        for name in clause.body() {
            let atom = self.atom_db.atom_of(name)?;
            compiled.push(Literal::new(atom, false));
        }
        let head = self.atom_db.atom_of(clause.head())?;
        compiled.push(Literal::new(head, !clause.head_negated()));
        Ok(compiled)
    }

    /// Adds a single clause to the live clause set, without re-running inference.
    ///
    /// The clause's edges extend the existing graph and its pending count is recorded, with the worklist re-seeded if nothing is pending.
    /// Callers re-run [infer](Context::infer) (or a full [query](Context::query)) for a refreshed verdict.
    pub fn update(&mut self, clause: HornClause) -> Result<ClauseKey, ErrorKind> {
        let (key, fresh) = self.enroll(clause)?;
        if fresh {
            self.state = ContextState::Input;
        }
        Ok(key)
    }

    /// Determines the satisfiability of the knowledge base under the given query clauses.
    ///
    /// The query clauses take part in inference as assumptions, with their keys excluded from the reported satisfied set.
    pub fn query<K, Q>(&mut self, kb: K, queries: Q) -> Result<InferenceResult, ErrorKind>
    where
        K: IntoIterator<Item = HornClause>,
        Q: IntoIterator<Item = HornClause>,
    {
        self.initialize(kb)?;

        let mut assumptions = Vec::default();
        for clause in queries {
            let (key, _) = self.enroll(clause)?;
            self.satisfied.remove(&key);
            assumptions.push(key);
        }
        self.assumptions = assumptions;

        self.infer()
    }

    /// Runs inference on the current state of the context: propagation to a fixpoint, refinement to a maximal closed assignment, then conflict extraction.
    pub fn infer(&mut self) -> Result<InferenceResult, ErrorKind> {
        self.counters.reset_query_counts();
        self.counters.queries += 1;

        self.propagate()?;
        self.close_maximal();
        self.extract_conflicts()?;

        self.state = match self.satisfiable {
            true => ContextState::Satisfiable,
            false => ContextState::Unsatisfiable,
        };
        log::info!(target: targets::PROPAGATION, "Query {} closed: {}", self.counters.queries, self.state);

        Ok(self.package_result())
    }

    /// The state of the context, as a high-level report.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The value of the atom with the given name on the current assignment, if any.
    pub fn value_of(&self, name: &str) -> Option<bool> {
        let atom = self.atom_db.internal_representation(name)?;
        self.valuation.value_of(atom)
    }

    /// Packages the state of the context as a detached result.
    fn package_result(&self) -> InferenceResult {
        let clauses_of = |keys: &BTreeSet<ClauseKey>| {
            keys.iter()
                .filter_map(|key| self.clause_db.graph_clause(*key).cloned())
                .collect()
        };

        InferenceResult::new(
            self.satisfiable,
            clauses_of(&self.satisfied),
            clauses_of(&self.unsatisfied),
            self.valuation.literals().collect(),
            self.conflicts
                .iter()
                .map(|atom| [Literal::new(*atom, true), Literal::new(*atom, false)])
                .collect(),
        )
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}
