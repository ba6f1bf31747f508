//! A library for determining the satisfiability of knowledge bases of propositional Horn clauses.
//!
//! heron_horn decides Horn satisfiability by linear-time unit resolution: a knowledge base is compiled to an implication graph over its atoms, facts are propagated along the graph to a fixpoint, and the assignment reached is then refined against every clause until maximally closed.
//! An unsatisfiable verdict comes with witnesses: the violated clauses, and for each atom required at both polarities the minimal inconsistent pair of literals.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration, and clauses are added programatically as [HornClause](structures::clause::HornClause)s through named constructors (facts, rules, and their negated-head forms).
//!
//! Internally, and at a high-level, a query is viewed in terms of manipulation of, and relationships between, a handful of databases which instantiate core theoretical objects.
//! Notably:
//! - The clauses of a knowledge base and query are stored in a clause database, in surface form and compiled disjunctive form.
//! - Atom names are interned in an atom database, and persist across queries made against the same context.
//! - The compiled shape of the knowledge base is an implication graph, with edges labeled by clause keys.
//!
//! Useful starting points, then, may be:
//! - The [propagation procedure](crate::procedures::propagation) to inspect the dynamics of a query.
//! - The [refinement procedure](crate::procedures::refinement) for how an assignment is closed and inconsistency witnessed.
//! - The [database module](crate::db) to inspect the data considered during a query.
//! - The [structures] to familiarise yourself with the abstract elements of a query and their representation (atoms, literals, clauses, etc.)
//!
//! # Example
//!
//! ```rust
//! use heron_horn::config::Config;
//! use heron_horn::context::Context;
//! use heron_horn::reports::Report;
//! use heron_horn::structures::clause::HornClause;
//!
//! let mut the_context = Context::from_config(Config::default());
//!
//! // Anyone stung turns wary, and the wary never pet the swarm.
//! let kb = [
//!     HornClause::rule("Wary", ["Stung"]),
//!     HornClause::negated_rule("PetsSwarm", ["Wary"]),
//! ];
//!
//! // Could someone stung still pet the swarm?
//! let queries = [HornClause::fact("Stung"), HornClause::fact("PetsSwarm")];
//!
//! let result = the_context.query(kb, queries).unwrap();
//! assert_eq!(result.report(), Report::Unsatisfiable);
//!
//! // The constraint is the clause which fails…
//! assert_eq!(result.unsatisfied().len(), 1);
//!
//! // …as 'Wary' is required at both polarities.
//! let wary = the_context.atom_db.internal_representation("Wary").unwrap();
//! assert_eq!(result.inconsistencies().len(), 1);
//! assert_eq!(result.inconsistencies()[0][0].atom(), wary);
//! ```

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
