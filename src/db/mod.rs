/*!
Databases for holding information relevant to inference.

- [The atom database](crate::db::atom)
  + Internal and external representations of atoms.
- [The clause database](crate::db::clause)
  + The stored clauses of a knowledge base and query, in surface and compiled form, indexed by [ClauseKey]s.
- [Valuations](crate::db::valuation)
  + Partial maps from atoms to truth values.

The atom and clause databases persist across queries made against the same context, while a fresh valuation is taken per query.
*/

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod valuation;
