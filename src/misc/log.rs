/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [propagation](crate::procedures::propagation)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [refinement](crate::procedures::refinement)
    pub const REFINEMENT: &str = "refinement";

    /// Logs related to conflict extraction
    pub const CONFLICT: &str = "conflict";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [atom database](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to the [implication graph](crate::structures::implication_graph)
    pub const GRAPH: &str = "graph";
}
