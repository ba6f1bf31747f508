/// Counts for various things which count, roughly.
///
/// The propagation counts reset per query; the query count does not.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of clauses taken from the worklist during propagation.
    pub clauses_popped: usize,

    /// A count of implication-graph edges traversed during propagation.
    ///
    /// Bounded by the edge count of the graph --- each atom's out-edges are traversed at most once per query.
    pub edge_visits: usize,

    /// A count of passes through the refinement fixpoint.
    pub refinement_passes: usize,

    /// A count of queries made against the context.
    pub queries: usize,
}

impl Counters {
    /// Resets the per-query counts.
    pub fn reset_query_counts(&mut self) {
        self.clauses_popped = 0;
        self.edge_visits = 0;
        self.refinement_passes = 0;
    }
}
