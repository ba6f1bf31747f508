/*!
Horn clauses, in their surface form and in their compiled disjunctive form.

A [HornClause] is the representation a caller builds: a conjunctive body of atom names and a single (possibly negated) head, `a1 ∧ a2 ∧ … ∧ an ⇒ h`, with an empty body encoding a fact (or negated fact).

A [GraphClause] is the disjunctive rewrite used for the implication-graph encoding: `{¬a1, ¬a2, …, ¬an, h'}`, where `h'` is `h` or `¬h` depending on the polarity of the head.
At most one literal in a graph clause is positive, and a negated head yields no positive literal at all --- the clause is then a pure constraint aimed at ⊥.

Horn clauses are built through named constructors only.
In particular, a caller cannot negate a head except through [negated_fact](HornClause::negated_fact) or [negated_rule](HornClause::negated_rule), which keeps heads normalised.

```rust
# use heron_horn::structures::clause::HornClause;
let rule = HornClause::rule("C", ["A", "B"]);
assert_eq!(rule.to_string(), "A ∧ B ⇒ C");

let constraint = HornClause::negated_rule("C", ["B"]);
assert_eq!(constraint.to_string(), "B ⇒ ¬C");

assert_eq!(HornClause::fact("A").to_string(), "A");
```
*/

mod graph_clause;
pub use graph_clause::GraphClause;

use serde::{Deserialize, Serialize};

/// A Horn clause as manually imputed by the caller: a conjunctive body and a single, possibly negated, head.
///
/// Immutable once constructed.
/// Equality and hashing are structural, so a query clause equal to a knowledge-base clause is a single entity in the [clause database](crate::db::clause).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HornClause {
    /// The head of the clause, always stored raw (non-negated).
    head: String,

    /// Whether the head is negated.
    negated_head: bool,

    /// The body of the clause, a conjunction of (non-negated) atoms.
    body: Vec<String>,
}

impl HornClause {
    fn new<H, B, I>(head: H, negated_head: bool, body: I) -> Self
    where
        H: Into<String>,
        B: Into<String>,
        I: IntoIterator<Item = B>,
    {
        HornClause {
            head: head.into(),
            negated_head,
            body: body.into_iter().map(|atom| atom.into()).collect(),
        }
    }

    /// A fact --- an always true statement, `h` with an empty body.
    pub fn fact<H: Into<String>>(head: H) -> Self {
        Self::new(head, false, Vec::<String>::new())
    }

    /// A negated fact, `¬h` with an empty body.
    pub fn negated_fact<H: Into<String>>(head: H) -> Self {
        Self::new(head, true, Vec::<String>::new())
    }

    /// A classic Horn rule `a1 ∧ … ∧ an ⇒ h`, where the head is not negated.
    pub fn rule<H, B, I>(head: H, body: I) -> Self
    where
        H: Into<String>,
        B: Into<String>,
        I: IntoIterator<Item = B>,
    {
        Self::new(head, false, body)
    }

    /// A Horn rule with a negated head, `a1 ∧ … ∧ an ⇒ ¬h`.
    pub fn negated_rule<H, B, I>(head: H, body: I) -> Self
    where
        H: Into<String>,
        B: Into<String>,
        I: IntoIterator<Item = B>,
    {
        Self::new(head, true, body)
    }

    /// The (raw) head of the clause.
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Whether the head of the clause is negated.
    pub fn head_negated(&self) -> bool {
        self.negated_head
    }

    /// The body of the clause.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Whether the clause is a fact or negated fact, i.e. has an empty body.
    pub fn is_fact(&self) -> bool {
        self.body.is_empty()
    }
}

impl std::fmt::Display for HornClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, atom) in self.body.iter().enumerate() {
            if index > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{atom}")?;
        }
        if !self.body.is_empty() {
            write!(f, " ⇒ ")?;
        }
        match self.negated_head {
            true => write!(f, "¬{}", self.head),
            false => write!(f, "{}", self.head),
        }
    }
}
