/*!
Fundamental structures for Horn inference.

- [Atoms](atom), the proposition letters truth is about.
- [Literals](literal), atoms with a polarity.
- [Clauses](clause), in surface Horn form and compiled disjunctive form.
- The [implication graph](implication_graph), the compiled shape of a knowledge base.
*/

pub mod atom;
pub mod clause;
pub mod implication_graph;
pub mod literal;
