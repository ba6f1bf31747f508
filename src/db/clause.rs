/*!
A database of clauses, indexed by [ClauseKey]s.

Each clause is stored twice over:
- In surface [HornClause] form, as the caller built it.
- In compiled [GraphClause] form, attached once the clause has been run through the implication-graph encoding.

Insertion is deduplicating.
A clause structurally equal to a stored clause takes the stored clause's key, so a query clause repeating a knowledge-base clause is a single entity throughout inference and contributes pending counts and edges only once.
*/

use std::collections::HashMap;

use slotmap::{SecondaryMap, SlotMap};

use crate::{
    misc::log::targets::{self},
    structures::clause::{GraphClause, HornClause},
};

use super::ClauseKey;

/// The clause database.
#[derive(Debug, Default)]
pub struct ClauseDB {
    /// The stored clauses, in surface form.
    clauses: SlotMap<ClauseKey, HornClause>,

    /// The compiled form of each stored clause.
    graph_clauses: SecondaryMap<ClauseKey, GraphClause>,

    /// A map from a surface clause to its key, for deduplication.
    keys: HashMap<HornClause, ClauseKey>,
}

impl ClauseDB {
    /// Stores a clause, returning its key and whether the clause was fresh.
    ///
    /// A clause structurally equal to a stored clause is not stored again.
    pub fn insert(&mut self, clause: HornClause) -> (ClauseKey, bool) {
        if let Some(key) = self.keys.get(&clause) {
            log::trace!(target: targets::CLAUSE_DB, "Duplicate clause {clause}");
            return (*key, false);
        }

        let key = self.clauses.insert(clause.clone());
        self.keys.insert(clause, key);
        (key, true)
    }

    /// Attaches the compiled form of a stored clause.
    pub fn attach_graph_clause(&mut self, key: ClauseKey, compiled: GraphClause) {
        self.graph_clauses.insert(key, compiled);
    }

    /// The surface form of the clause stored at `key`.
    pub fn clause(&self, key: ClauseKey) -> Option<&HornClause> {
        self.clauses.get(key)
    }

    /// The compiled form of the clause stored at `key`.
    pub fn graph_clause(&self, key: ClauseKey) -> Option<&GraphClause> {
        self.graph_clauses.get(key)
    }

    /// The keys of every stored clause.
    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> + '_ {
        self.clauses.keys()
    }

    /// A count of stored clauses.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }
}
